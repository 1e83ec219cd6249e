//! # Create Account Screen

use egui;
use crate::app::AppState;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::ui::UiAction;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, theme: &Theme, actions: &mut Vec<UiAction>) {
    forms::render_card(ui, "Create account", "Open a new account to start banking.", theme, |ui| {
        let form = &mut state.create_form;
        forms::render_text_input(ui, "Account number", &mut form.account_number, "e.g. 1001", theme);
        forms::render_text_input(ui, "Customer name", &mut form.customer_name, "Full name", theme);
        let mut submit =
            forms::render_text_input(ui, "Initial balance", &mut form.balance, "0.00", theme);

        ui.horizontal(|ui| {
            submit |= forms::render_submit_button(ui, "Create and continue", "Working...", state.loading);
            if forms::render_ghost_button(ui, "Back to login", theme) {
                actions.push(UiAction::ShowLogin);
            }
        });

        if submit && state.can_submit() {
            actions.push(UiAction::SubmitCreate);
        }
    });
}
