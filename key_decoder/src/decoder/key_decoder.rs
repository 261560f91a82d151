// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`KeyDecoder`] and its configuration.

use super::{classifier::classify_whole_chunk, fallback::classify_per_grapheme,
            normalizer::normalize_chunk};
use crate::{CommonResult, InlineVec, InputChunk, Key, TextEncoding};
use serde::{Deserialize, Serialize};

/// Construction options for a [`KeyDecoder`]. The only recognized option is
/// `encoding`, which the normalizer uses to turn raw bytes into text.
///
/// Deserializes from eg: `{ "encoding": "latin1" }`; a missing `encoding` means UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyDecoderConfig {
    pub encoding: TextEncoding,
}

impl KeyDecoderConfig {
    #[must_use]
    pub fn new(encoding: TextEncoding) -> Self { Self { encoding } }

    /// # Errors
    ///
    /// Returns [`KeyDecoderError::UnknownEncoding`] if `name` isn't a known encoding
    /// name or alias.
    ///
    /// [`KeyDecoderError::UnknownEncoding`]: crate::KeyDecoderError::UnknownEncoding
    pub fn try_from_encoding_name(name: &str) -> CommonResult<Self> {
        let encoding = TextEncoding::try_from(name.to_string())?;
        Ok(Self { encoding })
    }
}

impl From<TextEncoding> for KeyDecoderConfig {
    fn from(encoding: TextEncoding) -> Self { Self::new(encoding) }
}

/// Decodes terminal input chunks into [`Key`]s.
///
/// ```text
/// chunk ─▶ normalize_chunk() ─▶ classify_whole_chunk() ─▶ 1 key
///                                     │ None
///                                     ▼
///                              classify_per_grapheme() ─▶ 0..n keys
/// ```
///
/// # Chunk boundaries
///
/// Each chunk is classified on its own. Nothing is buffered between chunks, so a
/// sequence split across two chunks (eg: `ESC [` then `A`) is decoded as the keys of
/// each part, not as `up`. There is no timeout based ESC disambiguation either: a
/// chunk that is exactly ESC is the `escape` key.
///
/// # Totality
///
/// Decoding never fails. Every non empty chunk produces at least one key; unknown
/// escape sequences come out as [`NamedKey::Undefined`] with their modifier flags.
///
/// [`NamedKey::Undefined`]: crate::NamedKey::Undefined
#[derive(Debug, Clone, Default)]
pub struct KeyDecoder {
    config: KeyDecoderConfig,
}

impl KeyDecoder {
    #[must_use]
    pub fn new(config: impl Into<KeyDecoderConfig>) -> Self {
        Self {
            config: config.into(),
        }
    }

    #[must_use]
    pub fn config(&self) -> KeyDecoderConfig { self.config }

    #[must_use]
    pub fn encoding(&self) -> TextEncoding { self.config.encoding }

    /// Decode one chunk, pushing its keys into `sink` in arrival order.
    pub fn decode_into<'a>(
        &self,
        chunk: impl Into<InputChunk<'a>>,
        sink: &mut impl Extend<Key>,
    ) {
        let text = normalize_chunk(chunk.into(), self.config.encoding);

        match classify_whole_chunk(&text) {
            Some(key) => {
                tracing::trace!(message = "Whole chunk key", len = text.len(), key = %key);
                sink.extend(std::iter::once(key));
            }
            None => {
                tracing::trace!(message = "Per character fallback", len = text.len(), chunk = ?text);
                classify_per_grapheme(&text, sink);
            }
        }
    }

    /// Decode one chunk.
    #[must_use]
    pub fn decode<'a>(&self, chunk: impl Into<InputChunk<'a>>) -> InlineVec<Key> {
        let mut keys = InlineVec::new();
        self.decode_into(chunk, &mut keys);
        keys
    }

    /// Decode each chunk independently, and concatenate the keys in order.
    #[must_use]
    pub fn decode_all<'a, I, C>(&self, chunks: I) -> Vec<Key>
    where
        I: IntoIterator<Item = C>,
        C: Into<InputChunk<'a>>,
    {
        let mut keys = Vec::new();
        for chunk in chunks {
            self.decode_into(chunk, &mut keys);
        }
        keys
    }
}
