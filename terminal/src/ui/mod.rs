//! # GUI Rendering Framework
//!
//! Renders the current view with egui and forwards user intent to the
//! [`App`] view controller.
//!
//! Each frame:
//! 1. apply pending request results (`App::on_tick`)
//! 2. clone a state snapshot and render it, letting text inputs edit the
//!    snapshot's form buffers
//! 3. write edited buffers back and dispatch the collected [`UiAction`]s

pub mod screens;
pub mod theme;
pub mod widgets;

use egui;
use std::time::Duration;

use crate::app::{App, AppState, View};
use theme::Theme;

/// User intent collected while rendering one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    SubmitLogin,
    ShowCreate,
    SubmitCreate,
    ShowLogin,
    SubmitDeposit,
    SubmitWithdraw,
    Refresh,
    Logout,
}

/// Apply one action to the controller.
pub fn dispatch(app: &mut App, action: UiAction) {
    match action {
        UiAction::SubmitLogin => app.submit_login(),
        UiAction::ShowCreate => app.show_create(),
        UiAction::SubmitCreate => app.submit_create(),
        UiAction::ShowLogin => app.show_login(),
        UiAction::SubmitDeposit => app.submit_deposit(),
        UiAction::SubmitWithdraw => app.submit_withdraw(),
        UiAction::Refresh => app.refresh(),
        UiAction::Logout => app.logout(),
    }
}

/// Copy the text buffers edited in `edited` into the live state.
fn sync_buffers(live: &mut AppState, edited: &AppState) {
    live.login_account_number.clone_from(&edited.login_account_number);
    live.create_form.clone_from(&edited.create_form);
    live.deposit_amount.clone_from(&edited.deposit_amount);
    live.withdraw_amount.clone_from(&edited.withdraw_amount);
}

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App, theme: &Theme) {
    let mut snapshot = app.snapshot();
    let mut actions = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(24.0);
        ui.label(egui::RichText::new("BANKING").small().color(theme.dim));
        ui.heading(snapshot.view.title());
        ui.label(
            egui::RichText::new(
                "Log in with an account number or open a new account, then manage deposits and withdrawals.",
            )
            .color(theme.dim),
        );
        ui.add_space(16.0);

        widgets::status_banner::render_status_banner(ui, snapshot.status.as_ref(), theme);

        match snapshot.view {
            View::Login => screens::login::render(ui, &mut snapshot, theme, &mut actions),
            View::Create => screens::create::render(ui, &mut snapshot, theme, &mut actions),
            View::Dashboard => screens::dashboard::render(ui, &mut snapshot, theme, &mut actions),
        }
    });

    sync_buffers(&mut app.state.write(), &snapshot);

    for action in actions {
        tracing::debug!(?action, "UI action");
        dispatch(app, action);
    }
}

/// eframe application wrapping the view controller
pub struct BankingWindow {
    app: App,
    theme: Theme,
}

impl BankingWindow {
    pub fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);
        Self { app, theme }
    }
}

impl eframe::App for BankingWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        render(ctx, &mut self.app, &self.theme);

        // Keep polling for the result while a request is outstanding
        if self.app.state.read().loading {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
