//! # Application Orchestrator
//!
//! The [`App`] struct is the view controller: it owns the one [`AppState`],
//! turns user actions into account service requests, and folds their results
//! back into state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (view controller)                               │   │
//! │  │  - on_tick() - drains request results every frame    │   │
//! │  │  - submit_*() / refresh() / logout() - user actions  │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                              │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                       │   │
//! │  │  view, active_account, status, loading, buffers     │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  one task per request → AccountService → AppEvent           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Machine
//!
//! ```text
//!            show_create()                 submit_create() ok
//!   Login ─────────────────▶ Create ──────────────────────────┐
//!     ▲ ◀───────────────────   │                              │
//!     │      show_login()      │ error: stay, banner          ▼
//!     │                                                   Dashboard
//!     │ submit_login() ok ─────────────────────────────────▶  │
//!     │                                                       │
//!     └──────────────────────── logout() ◀────────────────────┘
//! ```
//!
//! Dashboard actions (deposit, withdraw, refresh) stay on the dashboard and
//! replace the active account with whatever the server returns.
//!
//! ## Concurrency
//!
//! At most one request is in flight: `loading` is set when a request starts,
//! every submit is ignored while it is set, and the request's completion event
//! always clears it. There is no cancellation; a result that arrives after
//! logout carries an old session number and is dropped.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use banking_terminal::app::App;
//! use banking_terminal::core::ClientConfig;
//! use banking_terminal::services::api::ApiClient;
//!
//! # async fn run() {
//! let config = ClientConfig::from_env().unwrap();
//! let mut app = App::new(Arc::new(ApiClient::new(&config)));
//!
//! app.state.write().login_account_number = "42".to_string();
//! app.submit_login();
//!
//! // In the egui update loop:
//! app.on_tick();
//! # }
//! ```

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::{AppEvent, Operation};
pub use handlers::account::{Movement, NOTHING_TO_REFRESH, NO_ACTIVE_ACCOUNT};
pub use state::*;

use crate::core::service::AccountService;
use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;

/// View controller coordinating UI, background requests and state.
///
/// Handlers spawn tokio tasks, so every action method must be called from a
/// thread that has entered a tokio runtime.
pub struct App {
    /// Shared application state.
    ///
    /// Hold locks briefly; the UI clones a snapshot per frame.
    pub state: Arc<RwLock<AppState>>,

    /// Request results, polled in `on_tick()` with `try_recv()`.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every request task.
    event_tx: Sender<AppEvent>,

    /// Account service (HTTP client in production, a double in tests).
    service: Arc<dyn AccountService>,
}

impl App {
    /// Create a view controller on the login screen with empty state.
    pub fn new(service: Arc<dyn AccountService>) -> Self {
        let (event_tx, event_rx) = unbounded();

        tracing::info!("App state initialized");

        App {
            state: Arc::new(RwLock::new(AppState::default())),
            event_rx,
            event_tx,
            service,
        }
    }

    /// Called every frame: applies every pending request result.
    ///
    /// Returns the number of events processed.
    pub fn on_tick(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }

        if processed > 0 {
            tracing::debug!(events_processed = processed, "on_tick: processed request results");
        }
        processed
    }

    /// Apply a single request result to state.
    pub fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Copy of the current state for rendering.
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Submit the login form (account lookup)
    pub fn submit_login(&mut self) {
        handlers::auth::handle_login_submit(self.state.clone(), self.event_tx.clone(), self.service.clone());
    }

    /// Submit the create-account form
    pub fn submit_create(&mut self) {
        handlers::auth::handle_create_submit(self.state.clone(), self.event_tx.clone(), self.service.clone());
    }

    /// Switch to the create-account form
    pub fn show_create(&mut self) {
        handlers::auth::handle_switch_to_create(self.state.clone());
    }

    /// Switch back to the login form
    pub fn show_login(&mut self) {
        handlers::auth::handle_switch_to_login(self.state.clone());
    }

    /// Submit the deposit form
    pub fn submit_deposit(&mut self) {
        handlers::account::handle_movement_submit(
            self.state.clone(),
            self.event_tx.clone(),
            self.service.clone(),
            Movement::Deposit,
        );
    }

    /// Submit the withdraw form
    pub fn submit_withdraw(&mut self) {
        handlers::account::handle_movement_submit(
            self.state.clone(),
            self.event_tx.clone(),
            self.service.clone(),
            Movement::Withdraw,
        );
    }

    /// Re-fetch the active account
    pub fn refresh(&mut self) {
        handlers::account::handle_refresh_click(self.state.clone(), self.event_tx.clone(), self.service.clone());
    }

    /// Leave the dashboard and reset to a fresh login screen
    pub fn logout(&mut self) {
        handlers::account::handle_logout_click(self.state.clone());
    }
}
