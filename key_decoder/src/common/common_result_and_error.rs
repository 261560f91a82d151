// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! Decoding keys never fails. Errors only show up at the edges: turning a user
//! supplied encoding name into a [`TextEncoding`], and reading stdin in the `keylog`
//! binary.
//!
//! [`TextEncoding`]: crate::TextEncoding

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`],
/// which are [`std::error::Error`] wrappers. Works hand in hand w/ [`KeyDecoderError`].
pub type CommonResult<T> = miette::Result<T>;

/// Errors at the configuration and I/O boundary of the decoder.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum KeyDecoderError {
    /// The configured encoding name isn't one of [`TextEncoding`]'s names or aliases.
    ///
    /// [`TextEncoding`]: crate::TextEncoding
    #[error("Unknown text encoding: '{name}'")]
    #[diagnostic(
        code(r3bl_key_decoder::config::unknown_encoding),
        help("Supported encodings are: utf8 (utf-8), latin1 (binary), ascii, utf16le (utf-16le, ucs2)")
    )]
    UnknownEncoding { name: String },

    /// Reading a chunk from stdin failed.
    #[error("Could not read from stdin")]
    #[diagnostic(
        code(r3bl_key_decoder::io::stdin_read),
        help("Make sure stdin is attached to a terminal or a readable pipe")
    )]
    StdinRead(#[source] std::io::Error),
}
