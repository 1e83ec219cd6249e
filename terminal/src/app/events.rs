//! # Application Events
//!
//! Results of background requests, sent from tokio tasks back to the UI thread.

use shared::Account;

use crate::core::error::ApiError;

/// The user action a request was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    CreateAccount,
    Deposit,
    Withdraw,
    Refresh,
}

impl Operation {
    /// Banner text on success
    pub fn success_message(&self) -> &'static str {
        match self {
            Operation::Login => "Logged in.",
            Operation::CreateAccount => "Account created.",
            Operation::Deposit => "Deposit successful.",
            Operation::Withdraw => "Withdrawal successful.",
            Operation::Refresh => "Balance refreshed.",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Login => "login",
            Operation::CreateAccount => "create_account",
            Operation::Deposit => "deposit",
            Operation::Withdraw => "withdraw",
            Operation::Refresh => "refresh",
        }
    }
}

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A request finished, successfully or not
    RequestCompleted {
        session: u64,
        operation: Operation,
        result: Result<Account, ApiError>,
    },
    /// The task running a request died before producing a result
    RequestAborted {
        session: u64,
        operation: Operation,
        reason: String,
    },
}

impl AppEvent {
    /// Session the originating request was issued under
    pub fn session(&self) -> u64 {
        match self {
            AppEvent::RequestCompleted { session, .. } | AppEvent::RequestAborted { session, .. } => *session,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            AppEvent::RequestCompleted { operation, .. } | AppEvent::RequestAborted { operation, .. } => *operation,
        }
    }
}
