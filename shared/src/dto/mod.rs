//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the account service over its REST API.
//!
//! ## Module Organization
//!
//! - [`account`] - Account record, create/amount request bodies, error body
//! - [`number`] - [`FormNumber`], a user-entered number that may be NaN
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase via `#[serde(rename_all = "camelCase")]`
//! - **Numbers from forms**: integral values encode as JSON integers,
//!   NaN and infinities encode as `null`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/accounts/42/deposit
//! Content-Type: application/json
//!
//! { "amount": 50 }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "accountNumber": 42, "customerName": "Ada", "balance": 150.0 }
//! ```

pub mod account;
pub mod number;

pub use account::*;
pub use number::*;
