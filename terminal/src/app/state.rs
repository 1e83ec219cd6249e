//! # Application State Types
//!
//! The single state struct the view controller owns: which screen is showing,
//! the active account, the status banner, the in-flight flag and every form
//! buffer.

use shared::{format_currency, Account};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Account number lookup (initial screen)
    #[default]
    Login,
    /// New account form
    Create,
    /// Active account details, deposit and withdraw
    Dashboard,
}

impl View {
    /// Page heading shown above the status banner
    pub fn title(&self) -> &'static str {
        match self {
            View::Login => "Access your account",
            View::Create => "Open a new account",
            View::Dashboard => "Manage your account",
        }
    }
}

/// Banner colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Message shown after the most recent operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

/// Text buffers of the create-account form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub account_number: String,
    pub customer_name: String,
    pub balance: String,
}

/// Everything the UI renders from.
///
/// Created empty at startup and never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Current screen
    pub view: View,
    /// Account shown on the dashboard; `Some` whenever `view` is `Dashboard`
    pub active_account: Option<Account>,
    /// Banner text, replaced by every operation
    pub status: Option<Status>,
    /// True exactly while one request is outstanding
    pub loading: bool,
    /// Login form buffer
    pub login_account_number: String,
    /// Create form buffers
    pub create_form: CreateForm,
    /// Deposit form buffer
    pub deposit_amount: String,
    /// Withdraw form buffer
    pub withdraw_amount: String,
    /// Session generation, bumped on logout. Results of requests issued under
    /// an older session are discarded.
    pub session: u64,
}

impl AppState {
    /// Mark a request as in flight and clear the previous banner.
    pub fn begin_request(&mut self) {
        self.loading = true;
        self.status = None;
    }

    /// Clear the in-flight flag. Runs for every completed request.
    pub fn finish_request(&mut self) {
        self.loading = false;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.status = Some(Status::success(message));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(Status::error(message));
    }

    /// Clear the deposit and withdraw buffers.
    pub fn clear_money_buffers(&mut self) {
        self.deposit_amount.clear();
        self.withdraw_amount.clear();
    }

    /// Make `account` the active account and show the dashboard.
    pub fn enter_dashboard(&mut self, account: Account) {
        self.active_account = Some(account);
        self.view = View::Dashboard;
        self.clear_money_buffers();
    }

    /// Switch to the create form (no network call).
    pub fn show_create(&mut self) {
        self.view = View::Create;
        self.status = None;
    }

    /// Switch back to the login form (no network call).
    pub fn show_login(&mut self) {
        self.view = View::Login;
        self.status = None;
    }

    /// Drop the active account and reset to a fresh login screen.
    ///
    /// Starts a new session so a response still in flight cannot land in it.
    pub fn logout(&mut self) {
        self.view = View::Login;
        self.active_account = None;
        self.status = None;
        self.loading = false;
        self.login_account_number.clear();
        self.create_form = CreateForm::default();
        self.clear_money_buffers();
        self.session = self.session.wrapping_add(1);
    }

    /// Active account balance formatted for display, e.g. `$100.00`
    pub fn balance_display(&self) -> Option<String> {
        self.active_account
            .as_ref()
            .map(|account| format_currency(account.balance))
    }

    /// Form submissions are ignored while a request is in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading
    }
}
