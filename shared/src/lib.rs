//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the banking terminal and the
//! account service API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::account`]**: Account record and request bodies
//!   - **[`dto::number`]**: Form-entered numbers as they go on the wire
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::format_currency`]**: Render a balance as `$1234.50`
//!
//! ## Wire Format
//!
//! The account service speaks camelCase JSON:
//! - `accountNumber`, `customerName`, `balance` on account records
//! - `amount` on deposit/withdraw bodies
//! - `error` or `message` on failure bodies
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::account::Account;
//! use shared::utils::format_currency;
//!
//! let account: Account = serde_json::from_str(
//!     r#"{"accountNumber":42,"customerName":"Ada","balance":100}"#,
//! ).unwrap();
//!
//! assert_eq!(format_currency(account.balance), "$100.00");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
