//! # Dashboard Screen
//!
//! Active account details with refresh/switch actions, plus deposit and
//! withdraw forms.

use egui;
use shared::{display_name, format_currency};
use crate::app::AppState;
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use crate::ui::UiAction;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, theme: &Theme, actions: &mut Vec<UiAction>) {
    // Only reachable with an active account
    let Some(account) = state.active_account.clone() else {
        return;
    };
    let loading = state.loading;

    ui.columns(3, |columns| {
        forms::render_card(
            &mut columns[0],
            "Account details",
            "You are signed in. Refresh or switch accounts anytime.",
            theme,
            |ui| {
                ui.label(egui::RichText::new(format!("#{}", account.account_number)).monospace());
                ui.label(egui::RichText::new(display_name(&account.customer_name)).strong().size(18.0));
                ui.label(egui::RichText::new(format_currency(account.balance)).color(theme.success).size(20.0));
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if forms::render_submit_button(ui, "Refresh balance", "Refreshing...", loading) {
                        actions.push(UiAction::Refresh);
                    }
                    if forms::render_ghost_button(ui, "Switch account", theme) {
                        actions.push(UiAction::Logout);
                    }
                });
            },
        );

        forms::render_card(&mut columns[1], "Deposit", "Add funds to this account.", theme, |ui| {
            let mut submit = forms::render_text_input(ui, "Amount", &mut state.deposit_amount, "0.00", theme);
            submit |= forms::render_submit_button(ui, "Deposit", "Working...", loading);
            if submit && !loading {
                actions.push(UiAction::SubmitDeposit);
            }
        });

        forms::render_card(&mut columns[2], "Withdraw", "Remove funds from this account.", theme, |ui| {
            let mut submit = forms::render_text_input(ui, "Amount", &mut state.withdraw_amount, "0.00", theme);
            submit |= forms::render_submit_button(ui, "Withdraw", "Working...", loading);
            if submit && !loading {
                actions.push(UiAction::SubmitWithdraw);
            }
        });
    });
}
