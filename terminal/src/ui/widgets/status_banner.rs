//! # Status Banner Widget
//!
//! Shows the outcome of the most recent operation.

use egui;
use crate::app::Status;
use crate::ui::theme::Theme;

/// Render the banner, or nothing when there is no status.
pub fn render_status_banner(ui: &mut egui::Ui, status: Option<&Status>, theme: &Theme) {
    let Some(status) = status else {
        return;
    };

    let color = if status.is_error() { theme.error } else { theme.success };

    egui::Frame::group(ui.style())
        .fill(color.gamma_multiply(0.12))
        .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.5)))
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&status.message).color(color));
        });
    ui.add_space(12.0);
}
