#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging setup for the wirecode binaries.
//!
//! Library crates only emit `tracing` events; this crate installs the
//! global subscriber that formats them.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured level is not a valid filter directive.
    #[error("Invalid log level `{level}`: {source}")]
    InvalidLevel {
        /// Level as configured
        level: String,
        /// Parser error
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    /// The log file could not be created.
    #[error("Failed to open log file {path}: {source}")]
    File {
        /// Requested log file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// A global subscriber is already installed.
    #[error("Failed to install log subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Output settings for [`init`].
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Default level or filter directive, used when `RUST_LOG` is unset.
    pub level: String,
    /// Raise the default level to `debug`.
    pub verbose: bool,
    /// Emit JSON lines instead of compact text.
    pub json: bool,
    /// Write to this file instead of stderr.
    pub file: Option<PathBuf>,
}

/// Build the event filter: `RUST_LOG` wins, then `verbose`, then `level`.
pub fn build_filter(level: &str, verbose: bool) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let level = if verbose { "debug" } else if level.is_empty() { "info" } else { level };
    EnvFilter::try_new(level)
        .map_err(|source| LoggingError::InvalidLevel { level: level.to_string(), source })
}

fn make_writer(file: Option<&Path>) -> Result<BoxMakeWriter, LoggingError> {
    match file {
        Some(path) => {
            let file = File::create(path)
                .map_err(|source| LoggingError::File { path: path.to_path_buf(), source })?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
        None => Ok(BoxMakeWriter::new(std::io::stderr)),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(options: &LogOptions) -> Result<(), LoggingError> {
    let filter = build_filter(&options.level, options.verbose)?;
    let writer = make_writer(options.file.as_deref())?;
    let ansi = options.file.is_none();

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if options.json {
        tracing_subscriber::registry().with(filter).with(layer.json()).try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_ansi(ansi).compact())
            .try_init()?;
    }
    Ok(())
}
