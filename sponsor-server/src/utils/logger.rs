//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise the filter is built from `LOG_LEVEL`
//! for this crate and tower-http. With a log directory, output goes to a
//! daily rolling file instead of stdout.

use std::path::Path;

use tracing_subscriber::EnvFilter;

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("sponsor_server={log_level},tower_http={log_level}"))
    })
}

/// Initialize the logger with stdout output at `info`
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if std::fs::create_dir_all(log_path).is_ok() {
            let file_appender = tracing_appender::rolling::daily(log_path, "sponsor-server");
            let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
            return;
        }
        eprintln!("Log directory {dir} is not writable, logging to stdout");
    }

    let _ = subscriber.try_init();
}
