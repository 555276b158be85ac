//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::{Path, PathBuf};

/// File name prefix for rolling log files
const LOG_FILE_PREFIX: &str = "booking-core";

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// Falls back to stdout when `log_dir` is missing. Calling it again after a
/// subscriber is installed is a no-op.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir.and_then(resolve_log_dir) {
        let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        let _ = subscriber.with_writer(file_appender).try_init();
        return;
    }

    let _ = subscriber.try_init();
}

/// Log directory to write to, if it exists
pub fn resolve_log_dir(dir: &str) -> Option<PathBuf> {
    let path = Path::new(dir);
    if dir.trim().is_empty() || !path.is_dir() {
        return None;
    }
    Some(path.to_path_buf())
}
