//! # Account Service API Client
//!
//! HTTP client for the remote account service.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports and documentation
//! ├── client.rs    - ApiClient struct, AccountService impl
//! ├── accounts.rs  - Account endpoints (create, deposit, withdraw, lookup, balance update)
//! └── errors.rs    - Error message extraction from failure bodies
//! ```
//!
//! ## Endpoints
//!
//! | Operation      | Method | Path                           | Body                                        |
//! |----------------|--------|--------------------------------|---------------------------------------------|
//! | Create account | POST   | `/accounts`                    | `{accountNumber, customerName, balance}`    |
//! | Deposit        | POST   | `/accounts/{n}/deposit`        | `{amount}`                                  |
//! | Withdraw       | POST   | `/accounts/{n}/withdraw`       | `{amount}`                                  |
//! | Get account    | GET    | `/accounts/{n}`                | -                                           |
//! | Update balance | PUT    | `/accounts/{n}/balance`        | `{amount}`                                  |
//!
//! Every success body is an account record.

pub mod accounts;
pub mod client;
pub mod errors;

pub use accounts::*;
pub use client::ApiClient;
pub use errors::read_error;
