//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use egui;
use crate::ui::theme::Theme;

/// Render a labelled single-line text input.
///
/// Returns `true` when the user pressed Enter in this field.
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    theme: &Theme,
) -> bool {
    ui.label(egui::RichText::new(label.to_uppercase()).small().color(theme.dim));
    let response = ui.add_sized(
        [280.0, 28.0],
        egui::TextEdit::singleline(value).hint_text(hint),
    );
    ui.add_space(8.0);
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

/// Render a submit button that is disabled while a request is in flight.
///
/// Shows `busy_text` instead of `text` while `loading`.
pub fn render_submit_button(
    ui: &mut egui::Ui,
    text: &str,
    busy_text: &str,
    loading: bool,
) -> bool {
    let label = if loading { busy_text } else { text };
    ui.add_enabled(
        !loading,
        egui::Button::new(egui::RichText::new(label).strong()).min_size(egui::vec2(140.0, 30.0)),
    )
    .clicked()
}

/// Render a secondary (ghost) button.
pub fn render_ghost_button(ui: &mut egui::Ui, text: &str, theme: &Theme) -> bool {
    ui.add(
        egui::Button::new(text)
            .fill(egui::Color32::TRANSPARENT)
            .stroke(egui::Stroke::new(1.0, theme.colors.accent))
            .min_size(egui::vec2(140.0, 30.0)),
    )
    .clicked()
}

/// Render a titled card with a short description.
pub fn render_card(
    ui: &mut egui::Ui,
    title: &str,
    description: &str,
    theme: &Theme,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    egui::Frame::group(ui.style())
        .fill(theme.colors.panel)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.label(egui::RichText::new(title).heading().strong());
            ui.label(egui::RichText::new(description).small().color(theme.dim));
            ui.add_space(12.0);
            add_contents(ui);
        });
}
