//! File-based logging initialization

use super::config::LogConfig;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up:
/// - Daily rotated log file `<log_dir>/banking-terminal.log`
/// - Non-blocking writes so logging never stalls the UI thread
/// - Panic hook that records panics in the log
/// - With a debug or trace filter, a copy of every line on stderr
///
/// Falls back to stderr if the log directory cannot be created. The returned
/// guard flushes buffered lines on drop; keep it alive for the whole program.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(super::config::DEFAULT_LOG_FILTER));

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .try_init();
        setup_panic_hook();
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, super::config::LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    let stderr_layer = config
        .is_debug_enabled()
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(true));

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: A global tracing subscriber is already installed");
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        mirror_to_stderr = config.is_debug_enabled(),
        "Logging initialized"
    );

    setup_panic_hook();
    Some(guard)
}

/// Set up panic hook to log panics with location and message
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );

        default_panic(panic_info);
    }));
}
