//! Logging configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "banking_terminal=info,warn";

/// Log file name inside the log directory (daily rotation appends the date)
pub const LOG_FILE_NAME: &str = "banking-terminal.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directory for rotated log files
    pub log_dir: PathBuf,
    /// Filter directive (e.g., "banking_terminal=debug,info")
    pub log_level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl LogConfig {
    /// Load configuration from `BANKING_LOG_DIR` and `RUST_LOG`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_dir: std::env::var("BANKING_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }

    /// Full path of the current log file (without rotation suffix)
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = LogConfig::default();
        assert_eq!(config.log_file(), PathBuf::from("logs").join("banking-terminal.log"));
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_debug_detection() {
        let config = LogConfig {
            log_level: "banking_terminal=debug".to_string(),
            ..Default::default()
        };
        assert!(config.is_debug_enabled());
    }
}
