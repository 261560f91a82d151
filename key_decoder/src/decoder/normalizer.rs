// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns one raw input chunk into one text chunk for the classifier.
//!
//! The only interpretation done here is the legacy "meta sends high bit" convention:
//! a chunk that is exactly one byte `>= 0x80` is the key `byte - 0x80` pressed with
//! Meta, so it is rewritten as ESC + that key. Everything else is decoded verbatim.

use crate::{ESC, HIGH_BIT, TextEncoding};
use std::borrow::Cow;

/// One chunk of terminal input, exactly as delivered by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChunk<'a> {
    /// Raw bytes, decoded with the configured [`TextEncoding`].
    Bytes(&'a [u8]),
    /// Already decoded text. Skips the normalizer.
    Text(&'a str),
}

impl<'a> From<&'a [u8]> for InputChunk<'a> {
    fn from(bytes: &'a [u8]) -> Self { InputChunk::Bytes(bytes) }
}

impl<'a, const N: usize> From<&'a [u8; N]> for InputChunk<'a> {
    fn from(bytes: &'a [u8; N]) -> Self { InputChunk::Bytes(bytes) }
}

impl<'a> From<&'a Vec<u8>> for InputChunk<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self { InputChunk::Bytes(bytes) }
}

impl<'a> From<&'a str> for InputChunk<'a> {
    fn from(text: &'a str) -> Self { InputChunk::Text(text) }
}

impl<'a> From<&'a String> for InputChunk<'a> {
    fn from(text: &'a String) -> Self { InputChunk::Text(text) }
}

/// Owned counterpart of [`InputChunk`], for streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputChunkBuf {
    Bytes(Vec<u8>),
    Text(String),
}

impl InputChunkBuf {
    #[must_use]
    pub fn as_chunk(&self) -> InputChunk<'_> {
        match self {
            InputChunkBuf::Bytes(bytes) => InputChunk::Bytes(bytes),
            InputChunkBuf::Text(text) => InputChunk::Text(text),
        }
    }
}

impl From<Vec<u8>> for InputChunkBuf {
    fn from(bytes: Vec<u8>) -> Self { InputChunkBuf::Bytes(bytes) }
}

impl From<&[u8]> for InputChunkBuf {
    fn from(bytes: &[u8]) -> Self { InputChunkBuf::Bytes(bytes.to_vec()) }
}

impl From<String> for InputChunkBuf {
    fn from(text: String) -> Self { InputChunkBuf::Text(text) }
}

impl From<&str> for InputChunkBuf {
    fn from(text: &str) -> Self { InputChunkBuf::Text(text.to_string()) }
}

/// Produce the text chunk the classifier sees.
///
/// | Chunk                         | Result                                  |
/// |:------------------------------|:----------------------------------------|
/// | `Text(s)`                     | `s`, borrowed                           |
/// | `Bytes([b])` where `b >= 0x80`| ESC + `encoding.decode([b - 0x80])`     |
/// | `Bytes(bytes)`                | `encoding.decode(bytes)`                |
#[must_use]
pub fn normalize_chunk(chunk: InputChunk<'_>, encoding: TextEncoding) -> Cow<'_, str> {
    match chunk {
        InputChunk::Text(text) => Cow::Borrowed(text),
        InputChunk::Bytes(&[byte]) if byte >= HIGH_BIT => {
            let stripped = [byte - HIGH_BIT];
            let decoded = encoding.decode(&stripped);
            tracing::debug!(
                message = "High bit meta byte rewritten as ESC prefix",
                byte = byte,
                decoded = %decoded
            );
            let mut text = String::with_capacity(1 + decoded.len());
            text.push(ESC);
            text.push_str(&decoded);
            Cow::Owned(text)
        }
        InputChunk::Bytes(bytes) => encoding.decode(bytes),
    }
}
