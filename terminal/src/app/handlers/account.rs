//! # Account Handlers
//!
//! Dashboard actions against the active account.

use crate::app::events::{AppEvent, Operation};
use crate::app::state::AppState;
use crate::app::tasks::spawn_request;
use crate::core::error::{AppError, Result};
use crate::core::service::AccountService;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::FormNumber;
use std::sync::Arc;

pub const NO_ACTIVE_ACCOUNT: &str = "Login to an account first.";
pub const NOTHING_TO_REFRESH: &str = "No account selected to refresh.";

/// Which funds movement a dashboard form submits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Deposit,
    Withdraw,
}

impl Movement {
    fn operation(self) -> Operation {
        match self {
            Movement::Deposit => Operation::Deposit,
            Movement::Withdraw => Operation::Withdraw,
        }
    }

    fn buffer(self, state: &AppState) -> &str {
        match self {
            Movement::Deposit => &state.deposit_amount,
            Movement::Withdraw => &state.withdraw_amount,
        }
    }
}

/// Handle deposit or withdraw form submit
///
/// Internal handler function - use [`crate::app::App::submit_deposit`] or
/// [`crate::app::App::submit_withdraw`] instead.
pub(crate) fn handle_movement_submit(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    service: Arc<dyn AccountService>,
    movement: Movement,
) {
    let prepared = {
        let mut state = state.write();
        if !state.can_submit() {
            tracing::debug!(?movement, "Submit ignored - request already in flight");
            return;
        }
        match active_account_number(&state, NO_ACTIVE_ACCOUNT) {
            Ok(account_number) => {
                let amount = FormNumber::parse(movement.buffer(&state));
                state.begin_request();
                Ok((account_number, amount, state.session))
            }
            Err(err) => {
                state.set_error(err.to_string());
                Err(err)
            }
        }
    };

    let (account_number, amount, session) = match prepared {
        Ok(values) => values,
        Err(err) => {
            tracing::warn!(?movement, error = %err, "Funds movement without active account");
            return;
        }
    };

    if amount.is_nan() {
        tracing::warn!(?movement, "Amount is not a number, sending it anyway");
    }
    tracing::info!(?movement, %account_number, %amount, "Submitting funds movement");
    spawn_request(event_tx, session, movement.operation(), async move {
        match movement {
            Movement::Deposit => service.deposit(account_number, amount).await,
            Movement::Withdraw => service.withdraw(account_number, amount).await,
        }
    });
}

/// Handle refresh button click
///
/// Internal handler function - use [`crate::app::App::refresh`] instead.
pub(crate) fn handle_refresh_click(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    service: Arc<dyn AccountService>,
) {
    let prepared = {
        let mut state = state.write();
        if !state.can_submit() {
            tracing::debug!("Refresh ignored - request already in flight");
            return;
        }
        match active_account_number(&state, NOTHING_TO_REFRESH) {
            Ok(account_number) => {
                state.begin_request();
                Some((account_number, state.session))
            }
            Err(err) => {
                state.set_error(err.to_string());
                None
            }
        }
    };

    let Some((account_number, session)) = prepared else {
        return;
    };

    spawn_request(event_tx, session, Operation::Refresh, async move {
        service.get_balance(account_number).await
    });
}

/// Handle logout ("Switch account") click. No network call.
///
/// Internal handler function - use [`crate::app::App::logout`] instead.
pub(crate) fn handle_logout_click(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let previous = state.active_account.as_ref().map(|a| a.account_number);
    state.logout();
    tracing::info!(?previous, session = state.session, "Logged out");
}

fn active_account_number(state: &AppState, missing: &str) -> Result<FormNumber> {
    state
        .active_account
        .as_ref()
        .map(|account| FormNumber::from(account.account_number))
        .ok_or_else(|| AppError::State(missing.to_string()))
}
