// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words linefeed pageup pagedown rxvt

//! # Terminal key decoder
//!
//! Every keystroke a user makes in a terminal arrives on stdin as a variable length,
//! often ambiguous run of bytes: a plain character, a C0 control character, or a
//! multi-byte ANSI / VT escape sequence. This crate turns those chunks into a stream of
//! discrete [`Key`] values, each with a stable [`KeyName`] and `ctrl` / `meta` /
//! `shift` flags.
//!
//! ```text
//! raw chunk (bytes or text)
//!    │
//! ┌──▼─────────────────────────────┐
//! │ normalizer                     │  single high-bit byte → ESC + char
//! └────────────────────────────────┘
//!    │ text
//! ┌──▼─────────────────────────────┐
//! │ classifier (whole chunk)       │  literals, ESC + alnum, CSI / SS3 function keys
//! └────────────────────────────────┘
//!    │ no match
//! ┌──▼─────────────────────────────┐
//! │ fallback (per grapheme)        │  short lived ESC carry
//! └────────────────────────────────┘
//!    │
//!    ▼
//! Key { name, ctrl, meta, shift } ... in arrival order
//! ```
//!
//! # Example
//!
//! ```
//! use r3bl_key_decoder::{Key, KeyDecoder, NamedKey};
//!
//! let decoder = KeyDecoder::default();
//!
//! let keys = decoder.decode("\x1b[1;5A");
//! assert_eq!(keys.as_slice(), &[Key::named(NamedKey::Up).with_ctrl()]);
//!
//! let keys = decoder.decode(b"\x03");
//! assert_eq!(keys[0].name_str(), "c");
//! assert!(keys[0].ctrl);
//! ```
//!
//! Chunks are classified independently. A sequence split across two chunks is not
//! reassembled, see [`KeyDecoder`] for details.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod common;
pub mod constants;
pub mod decoder;
pub mod log;
pub mod stack_alloc_types;

// Re-export.
pub use common::*;
pub use constants::*;
pub use decoder::*;
pub use stack_alloc_types::*;
