//! # Common Error Types
//!
//! Error handling for the banking terminal.
//!
//! Two layers:
//!
//! - [`ApiError`]: anything that went wrong talking to the account service.
//!   Its `Display` output is the exact text shown in the status banner.
//! - [`AppError`]: application-level failures (API errors, invalid state,
//!   bad configuration).
//!
//! ## Usage Pattern
//!
//! ```rust
//! use banking_terminal::core::error::{ApiError, AppError};
//!
//! let err: AppError = ApiError::Http { status: 400, message: "Withdrawal failed".to_string() }.into();
//! assert_eq!(err.to_string(), "Withdrawal failed");
//! ```
//!
//! No variant is meant to be matched on by the UI: every failure is shown to
//! the user as its message and nothing else. Whether a 400 meant "insufficient
//! funds" or "amount must be positive" is not recoverable from the type.

use thiserror::Error;

/// Failure of a single request to the account service.
///
/// Every variant renders as a human-readable message. `Clone` so results can
/// travel through the event channel.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    ///
    /// `message` is already the final user-facing text: extracted from the
    /// body for lookups, fixed for deposit and withdraw.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The request never produced a response (connection refused, DNS, TLS).
    #[error("Network error: {0}")]
    Network(String),

    /// A success response whose body was not an account record.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, when the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// The text shown to the user.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Application-wide error type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Account service failure, displayed verbatim.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Action not valid in the current state (e.g. deposit with no active
    /// account). The message is user-facing.
    #[error("{0}")]
    State(String),

    /// Invalid configuration at startup.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_message_only() {
        let err = ApiError::Http {
            status: 404,
            message: "account not found".to_string(),
        };
        assert_eq!(err.to_string(), "account not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.message(), "Network error: connection refused");
    }

    #[test]
    fn test_app_error_is_transparent_over_api() {
        let err = AppError::from(ApiError::Decode("expected value".to_string()));
        assert_eq!(err.to_string(), "Failed to parse response: expected value");
    }

    #[test]
    fn test_state_error_message() {
        let err = AppError::State("Login to an account first.".to_string());
        assert_eq!(err.to_string(), "Login to an account first.");
    }
}
