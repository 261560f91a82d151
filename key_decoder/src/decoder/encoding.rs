// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words ucs

//! Byte to text decoding for raw input chunks. Decoding is best effort: malformed
//! input is replaced, never rejected.

use crate::KeyDecoderError;
use std::{borrow::Cow, char::REPLACEMENT_CHARACTER, str::FromStr};
use strum_macros::{Display, EnumIter, EnumString};

/// Text encodings a [`KeyDecoder`] can be configured with.
///
/// | Encoding  | Aliases                     | Behavior                                    |
/// |:----------|:----------------------------|:--------------------------------------------|
/// | `utf8`    | `utf-8`                     | Invalid sequences become U+FFFD             |
/// | `latin1`  | `binary`                    | Each byte is U+0000..U+00FF                 |
/// | `ascii`   |                             | High bit cleared, then as `latin1`          |
/// | `utf16le` | `utf-16le`, `ucs2`, `ucs-2` | Unpaired surrogates become U+FFFD, a trailing odd byte is dropped |
///
/// Names parse case insensitively.
///
/// [`KeyDecoder`]: crate::KeyDecoder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
#[strum(ascii_case_insensitive)]
pub enum TextEncoding {
    #[default]
    #[strum(to_string = "utf8", serialize = "utf-8")]
    Utf8,
    #[strum(to_string = "latin1", serialize = "binary")]
    Latin1,
    #[strum(to_string = "ascii")]
    Ascii,
    #[strum(to_string = "utf16le", serialize = "utf-16le", serialize = "ucs2", serialize = "ucs-2")]
    Utf16Le,
}

impl TextEncoding {
    /// Decode a whole chunk. Borrows the input when no conversion is needed.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> Cow<'_, str> {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes),
            TextEncoding::Latin1 => match std::str::from_utf8(bytes) {
                Ok(text) if bytes.is_ascii() => Cow::Borrowed(text),
                _ => Cow::Owned(bytes.iter().map(|&byte| char::from(byte)).collect()),
            },
            TextEncoding::Ascii => match std::str::from_utf8(bytes) {
                Ok(text) if bytes.is_ascii() => Cow::Borrowed(text),
                _ => Cow::Owned(
                    bytes.iter().map(|&byte| char::from(byte & 0x7F)).collect(),
                ),
            },
            TextEncoding::Utf16Le => {
                let code_units = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
                Cow::Owned(
                    char::decode_utf16(code_units)
                        .map(|it| it.unwrap_or(REPLACEMENT_CHARACTER))
                        .collect(),
                )
            }
        }
    }
}

impl TryFrom<String> for TextEncoding {
    type Error = KeyDecoderError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        TextEncoding::from_str(name.trim())
            .map_err(|_| KeyDecoderError::UnknownEncoding { name })
    }
}

impl From<TextEncoding> for String {
    fn from(encoding: TextEncoding) -> Self { encoding.to_string() }
}
