//! Logging initialization and configuration.
//!
//! The hook's stdout carries the JSON response, so diagnostic logs are written
//! to `~/.trash-guard/logs/` instead. The hook runs once per shell command,
//! so every run appends to one daily file and only the last week is kept.
//!
//! # Configuration
//!
//! The log level can be controlled via the `RUST_LOG` environment variable:
//! - `RUST_LOG=debug` - Show every classification
//! - `RUST_LOG=info` - Show denials and rewrites (default)
//! - `RUST_LOG=warn` - Show malformed input and errors only

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_PREFIX: &str = "trash-guard";
const MAX_LOG_FILES: usize = 7;

/// Initialize file-based logging under `log_dir`.
///
/// Lines go to `trash-guard.<YYYY-MM-DD>.log`, rotated daily.
///
/// Returns the writer guard, which must be kept alive until exit so buffered
/// lines are flushed. Returns `None` without creating any file if a global
/// subscriber is already installed, or if the directory or file cannot be
/// created.
pub fn init_logging(log_dir: &Path) -> Option<WorkerGuard> {
    if tracing::dispatcher::has_been_set() {
        return None;
    }

    if let Err(e) = fs::create_dir_all(log_dir) {
        eprintln!("Warning: Failed to create logs directory: {}", e);
        return None;
    }

    let appender = match RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(log_dir)
    {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Warning: Failed to create log file: {}", e);
            return None;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Warning: Failed to install log subscriber: {}", e);
        return None;
    }

    tracing::debug!("Logging initialized - writing to {}", log_dir.display());
    Some(guard)
}
