// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InputChunkBuf, Key, KeyDecoder};
use async_stream::stream;
use futures_core::Stream;
use futures_util::StreamExt;
use std::pin::Pin;

pub type PinnedKeyStream = Pin<Box<dyn Stream<Item = Key> + Send>>;

/// Decode an async stream of chunks into a stream of keys. Each chunk is decoded with
/// [`KeyDecoder::decode`] as soon as it arrives, so chunk boundaries are exactly the
/// ones the input stream produces. The key stream ends when the input stream does.
pub fn decode_stream<S, C>(decoder: KeyDecoder, input: S) -> PinnedKeyStream
where
    S: Stream<Item = C> + Send + 'static,
    C: Into<InputChunkBuf> + Send + 'static,
{
    let it = stream! {
        let mut input = std::pin::pin!(input);
        while let Some(chunk) = input.next().await {
            let chunk: InputChunkBuf = chunk.into();
            for key in decoder.decode(chunk.as_chunk()) {
                yield key;
            }
        }
    };
    Box::pin(it)
}
