//! # Banking Terminal - Library Root
//!
//! A native desktop client for a remote account service: look up an account
//! by number, open a new account, deposit, withdraw and refresh the balance.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              banking-terminal (this crate)             │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI                    │
//! │  Tokio         - Async runtime for requests            │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!                          │ HTTP/JSON
//!                          ▼
//!               ┌─────────────────────┐
//!               │  Account Service    │
//!               │  /accounts/*        │
//!               └─────────────────────┘
//! ```
//!
//! The server is the only source of truth for balances: every balance on
//! screen is the literal value from the latest response.
//!
//! ## Module Structure
//!
//! - **app**: View controller (state machine, request dispatch, reducers)
//! - **core**: Error types, configuration, `AccountService` trait
//! - **services**: `api` - HTTP client for the account service
//! - **ui**: egui screens (login, create, dashboard) and widgets
//! - **debug**: Logging setup
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, handlers, tasks)
//!   │   └── core::service::AccountService ◀── services::api::ApiClient
//!   │
//!   └── ui (screens, widgets, theme)
//! ```
//!
//! ## Configuration
//!
//! - `BANKING_API_BASE_URL`: account service base URL
//!   (default `http://localhost:8080/api`), also read from `.env`
//! - `BANKING_LOG_DIR`, `RUST_LOG`: logging
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p banking-terminal
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Status, StatusKind, View};
pub use core::{AccountService, ApiError, AppError, ClientConfig, Result};
