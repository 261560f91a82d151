// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Print every key the decoder sees on stdin, one per line.
//!
//! Put the terminal in raw mode first so each keystroke arrives as its own chunk:
//!
//! ```bash
//! stty raw -echo; cargo run --bin keylog; stty sane
//! ```
//!
//! Press Ctrl+C or Ctrl+D to quit.

use clap::Parser;
use miette::IntoDiagnostic;
use r3bl_key_decoder::{CommonResult, Key, KeyDecoder, KeyDecoderConfig, KeyDecoderError,
                       log::{LogTarget, try_initialize_logging_global}, ok};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing_core::LevelFilter;

use crate::clap_config::CLIArg;

/// Size of the stdin read buffer. Each successful read is one chunk.
const READ_BUFFER_SIZE: usize = 4096;

#[tokio::main]
async fn main() -> CommonResult<()> {
    let cli_arg = CLIArg::parse();

    // Start logging.
    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        try_initialize_logging_global(LevelFilter::DEBUG, LogTarget::default())?;
    }

    let config = KeyDecoderConfig::try_from_encoding_name(&cli_arg.encoding)?;
    tracing::debug!(message = "Start keylog", encoding = %config.encoding);

    run(KeyDecoder::new(config)).await?;

    tracing::debug!(message = "Stop keylog");
    ok!()
}

async fn run(decoder: KeyDecoder) -> CommonResult<()> {
    let mut stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    let mut keys: Vec<Key> = Vec::new();

    loop {
        let bytes_read = stdin
            .read(&mut buffer)
            .await
            .map_err(KeyDecoderError::StdinRead)?;

        // EOF.
        if bytes_read == 0 {
            break;
        }

        keys.clear();
        decoder.decode_into(&buffer[..bytes_read], &mut keys);

        let mut output = String::new();
        let mut quit = false;
        for key in &keys {
            // Raw mode has no output post processing, so emit CR LF.
            output.push_str(&format!("{key}\r\n"));
            if is_quit_key(key) {
                quit = true;
                break;
            }
        }

        stdout.write_all(output.as_bytes()).await.into_diagnostic()?;
        stdout.flush().await.into_diagnostic()?;

        if quit {
            break;
        }
    }

    ok!()
}

/// Ctrl+C or Ctrl+D.
fn is_quit_key(key: &Key) -> bool {
    key.ctrl && !key.meta && matches!(key.name_str(), "c" | "d")
}

mod clap_config {
    use clap::{Args, Parser};

    /// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
    #[derive(Debug, Parser)]
    #[command(bin_name = "keylog")]
    #[command(about = "⌨️ Show the keys decoded from terminal input")]
    #[command(version)]
    #[command(next_line_help = true)]
    #[command(arg_required_else_help(false))]
    pub struct CLIArg {
        #[arg(
            long,
            short = 'e',
            default_value = "utf8",
            help = "Text encoding of stdin: utf8, latin1, ascii, or utf16le."
        )]
        pub encoding: String,

        #[command(flatten)]
        pub global_options: GlobalOption,
    }

    #[derive(Debug, Args)]
    pub struct GlobalOption {
        #[arg(
            global = true,
            long,
            short = 'l',
            help = "Log app output to a file named `log.txt` for debugging."
        )]
        pub enable_logging: bool,
    }
}
