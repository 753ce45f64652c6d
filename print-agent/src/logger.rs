//! Logging Infrastructure
//!
//! Structured logging setup. Logs go to stderr so stdout stays clean
//! for operation results; an optional log directory adds daily
//! rolling files.

use std::path::Path;

use crate::config::Config;

/// Initialize the logger from agent configuration.
pub fn init_logger(config: &Config) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
}

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "print-agent");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
