//! # Login Screen
//!
//! Account number lookup, with a link to the create form.

use egui;
use crate::app::AppState;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::ui::UiAction;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, theme: &Theme, actions: &mut Vec<UiAction>) {
    forms::render_card(ui, "Login", "Enter your account number to continue.", theme, |ui| {
        let mut submit = forms::render_text_input(
            ui,
            "Account number",
            &mut state.login_account_number,
            "e.g. 1001",
            theme,
        );

        ui.horizontal(|ui| {
            submit |= forms::render_submit_button(ui, "Login", "Working...", state.loading);
            if forms::render_ghost_button(ui, "Create account", theme) {
                actions.push(UiAction::ShowCreate);
            }
        });

        if submit && state.can_submit() {
            actions.push(UiAction::SubmitLogin);
        }
    });
}
