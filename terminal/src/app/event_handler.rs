//! # Event Handler
//!
//! Reduces request outcomes back into [`AppState`].
//!
//! Rules shared by every operation:
//!
//! - the in-flight flag is cleared whether the request succeeded or not
//! - on success the active account is replaced by the server's record as-is
//! - on failure the previous account is kept and the error message becomes
//!   the banner
//! - results tagged with an older session are dropped untouched

use shared::Account;

use crate::app::events::{AppEvent, Operation};
use crate::app::state::AppState;
use crate::app::App;
use crate::core::error::ApiError;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Acquires the write lock once per event.
    fn handle_event_impl(&mut self, event: AppEvent) {
        let mut state = self.state.write();
        state.apply_event(event);
    }
}

impl AppState {
    /// Apply one event. Returns `false` if it was stale and ignored.
    pub fn apply_event(&mut self, event: AppEvent) -> bool {
        if event.session() != self.session {
            tracing::info!(
                operation = event.operation().name(),
                event_session = event.session(),
                current_session = self.session,
                "Discarding result from previous session"
            );
            return false;
        }

        self.finish_request();

        match event {
            AppEvent::RequestCompleted {
                operation, result, ..
            } => match result {
                Ok(account) => self.apply_success(operation, account),
                Err(err) => self.apply_failure(operation, &err),
            },
            AppEvent::RequestAborted {
                operation, reason, ..
            } => {
                self.set_error(format!("Request failed: {}", reason));
                tracing::error!(operation = operation.name(), %reason, "Request aborted");
            }
        }
        true
    }

    fn apply_success(&mut self, operation: Operation, account: Account) {
        tracing::info!(
            operation = operation.name(),
            account_number = account.account_number,
            "Request succeeded"
        );

        match operation {
            Operation::Login | Operation::CreateAccount => self.enter_dashboard(account),
            Operation::Deposit => {
                self.active_account = Some(account);
                self.deposit_amount.clear();
            }
            Operation::Withdraw => {
                self.active_account = Some(account);
                self.withdraw_amount.clear();
            }
            Operation::Refresh => self.active_account = Some(account),
        }

        self.set_success(operation.success_message());
    }

    fn apply_failure(&mut self, operation: Operation, err: &ApiError) {
        tracing::warn!(
            operation = operation.name(),
            status = ?err.status(),
            error = %err,
            "Request failed"
        );
        self.set_error(err.message());
    }
}
