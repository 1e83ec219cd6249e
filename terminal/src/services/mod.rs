//! # Services Module
//!
//! External service integrations for the banking terminal.
//!
//! ```text
//! services/
//! └── api/   - Account service HTTP client
//! ```
//!
//! ```text
//! ┌──────────────────────────────┐
//! │       Banking Terminal       │
//! │  ┌────────────────────────┐  │
//! │  │  ApiClient (api/)      │  │
//! │  └───────────┬────────────┘  │
//! └──────────────┼───────────────┘
//!                │ HTTP/JSON
//!                ▼
//! ┌──────────────────────────────┐
//! │  Account Service             │
//! │  /accounts, /accounts/{n}/*  │
//! └──────────────────────────────┘
//! ```

pub mod api;
