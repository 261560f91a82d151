// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Key decoding layer.
//!
//! ## Module Responsibilities
//!
//! ### key.rs
//! - [`Key`], [`KeyName`], [`NamedKey`] and [`KeyModifiers`]
//! - Modifier parameter decoding (`parameter - 1`, ctrl = 4, meta = 10, shift = 1)
//!
//! ### encoding.rs and normalizer.rs
//! - Bytes → text, per [`TextEncoding`]
//! - Single high-bit byte → ESC + (byte - 0x80), the "meta sends 8th bit" convention
//!
//! ### `function_key_parser.rs` and `function_key_table.rs`
//! - Parse `ESC+ (O | N | [ | [[) body` into a lookup code and a modifier parameter
//! - Map the lookup code to a [`NamedKey`], or `undefined`
//!
//! ### classifier.rs and fallback.rs
//! - Whole chunk classification, first match wins
//! - Per grapheme fallback with a short lived ESC carry
//!
//! ### `key_decoder.rs` and `key_stream.rs`
//! - [`KeyDecoder`], the entry point
//! - [`decode_stream`], the same over an async stream of chunks
//!
//! # Testing strategy
//!
//! Each module has unit tests for its own contract. The [`validation_tests`] module
//! drives the full decoder with hardcoded byte sequences that terminals actually send,
//! and checks the resulting keys end to end.
//!
//! [`validation_tests`]: mod@validation_tests

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach.
pub mod key;
pub mod encoding;
pub mod key_decoder;
pub mod key_stream;

// Conditionally public modules for documentation and testing.
// In test/doc builds: fully public (for rustdoc and test access)
// In release builds: private (encapsulated implementation details)
#[cfg(any(test, doc))]
pub mod normalizer;
#[cfg(not(any(test, doc)))]
mod normalizer;

#[cfg(any(test, doc))]
pub mod function_key_parser;
#[cfg(not(any(test, doc)))]
mod function_key_parser;

#[cfg(any(test, doc))]
pub mod function_key_table;
#[cfg(not(any(test, doc)))]
mod function_key_table;

#[cfg(any(test, doc))]
pub mod classifier;
#[cfg(not(any(test, doc)))]
mod classifier;

#[cfg(any(test, doc))]
pub mod fallback;
#[cfg(not(any(test, doc)))]
mod fallback;

// Re-export types for flat public API.
pub use key::*;
pub use encoding::*;
pub use key_decoder::*;
pub use key_stream::*;
pub use normalizer::*;
pub use function_key_parser::*;
pub use function_key_table::*;
pub use classifier::*;
pub use fallback::*;
