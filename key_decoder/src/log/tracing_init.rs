// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::try_create_file_appender;
use crate::{CommonResult, ok};
use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Default file name used when logging to a file.
pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where the formatted log lines go. The decoder's own output goes to stdout, so logs
/// never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(String),
}

impl Default for LogTarget {
    fn default() -> Self { LogTarget::File(DEFAULT_LOG_FILE_NAME.to_string()) }
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Global default subscriber, which once set, can't be unset or changed.
///
/// Logging is **DISABLED** by **default**. If you don't call this function w/ a value
/// other than [`LevelFilter::OFF`], the [`tracing::debug!`] etc. calls in the decoder
/// go nowhere.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(
    level_filter: LevelFilter,
    log_target: LogTarget,
) -> CommonResult<()> {
    // Early return if the level filter is off.
    if matches!(level_filter, LevelFilter::OFF) {
        return ok!();
    }

    let layer =
        try_create_layer::<tracing_subscriber::Registry>(level_filter, log_target)?;

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .into_diagnostic()
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layer<S>(
    level_filter: LevelFilter,
    log_target: LogTarget,
) -> CommonResult<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    Ok(match log_target {
        LogTarget::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
        LogTarget::File(path) => Box::new(
            fmt_layer
                .with_ansi(false)
                .with_writer(try_create_file_appender(&path)?)
                .with_filter(level_filter),
        ),
    })
}
