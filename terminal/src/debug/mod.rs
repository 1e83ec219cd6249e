//! # Logging Infrastructure
//!
//! Structured logging to a rotated file via `tracing`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use banking_terminal::debug::{self, LogConfig};
//!
//! let _guard = debug::init(&LogConfig::from_env());
//! tracing::info!(account_number = 42, "Request succeeded");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `banking_terminal=info,warn`)
//! - `BANKING_LOG_DIR`: Log directory (default `logs`)
//!
//! A filter containing `debug` or `trace` also mirrors every line to stderr.

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init;
