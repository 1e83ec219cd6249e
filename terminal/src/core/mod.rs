//! # Core Abstractions
//!
//! Error types, configuration and the service trait the view controller is
//! written against.
//!
//! ## Modules
//!
//! - **[`config`]**: Account service base URL (`ClientConfig`)
//! - **[`error`]**: `ApiError`, `AppError`, `Result<T>`
//! - **[`service`]**: `AccountService` trait for dependency injection
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use banking_terminal::core::{AccountService, ClientConfig};
//! use banking_terminal::services::api::ApiClient;
//!
//! let config = ClientConfig::from_env().unwrap();
//! let service: Arc<dyn AccountService> = Arc::new(ApiClient::new(&config));
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::ClientConfig;
pub use error::{ApiError, AppError, Result};
pub use service::AccountService;
