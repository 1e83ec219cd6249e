//! # Authentication Handlers
//!
//! Handlers for the login and create-account forms.
//!
//! "Login" here is an account lookup: the account number is the only
//! credential.

use crate::app::events::{AppEvent, Operation};
use crate::app::state::AppState;
use crate::app::tasks::spawn_request;
use crate::core::service::AccountService;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::FormNumber;
use std::sync::Arc;

/// Handle login form submit
///
/// Internal handler function - use [`crate::app::App::submit_login`] instead.
pub(crate) fn handle_login_submit(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    service: Arc<dyn AccountService>,
) {
    let (account_number, session) = {
        let mut state = state.write();
        if !state.can_submit() {
            tracing::debug!("Login ignored - request already in flight");
            return;
        }
        let account_number = FormNumber::parse(&state.login_account_number);
        state.begin_request();
        (account_number, state.session)
    };

    if account_number.is_nan() {
        tracing::warn!("Account number is not a number, sending it anyway");
    }
    tracing::info!(%account_number, "Looking up account");
    spawn_request(event_tx, session, Operation::Login, async move {
        service.get_balance(account_number).await
    });
}

/// Handle create-account form submit
///
/// Internal handler function - use [`crate::app::App::submit_create`] instead.
pub(crate) fn handle_create_submit(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    service: Arc<dyn AccountService>,
) {
    let (account_number, customer_name, balance, session) = {
        let mut state = state.write();
        if !state.can_submit() {
            tracing::debug!("Create ignored - request already in flight");
            return;
        }
        let form = &state.create_form;
        let account_number = FormNumber::parse(&form.account_number);
        let customer_name = form.customer_name.trim().to_string();
        let balance = FormNumber::parse(&form.balance);
        state.begin_request();
        (account_number, customer_name, balance, state.session)
    };

    if account_number.is_nan() || balance.is_nan() {
        tracing::warn!(%account_number, %balance, "Create form has a non-numeric field, sending it anyway");
    }
    tracing::info!(%account_number, "Creating account");
    spawn_request(event_tx, session, Operation::CreateAccount, async move {
        service
            .create_account(account_number, &customer_name, balance)
            .await
    });
}

/// Switch to the create-account form
///
/// Internal handler function - use [`crate::app::App::show_create`] instead.
pub(crate) fn handle_switch_to_create(state: Arc<RwLock<AppState>>) {
    state.write().show_create();
}

/// Switch to the login form
///
/// Internal handler function - use [`crate::app::App::show_login`] instead.
pub(crate) fn handle_switch_to_login(state: Arc<RwLock<AppState>>) {
    state.write().show_login();
}
