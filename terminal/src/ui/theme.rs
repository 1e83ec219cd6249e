//! # GUI Theme
//!
//! Dark violet theme for egui with teal success and orange error accents.

use egui::{Color32, Context, Stroke, Visuals};

/// Banking color palette
#[derive(Debug, Clone)]
pub struct BankingColors {
    /// Slate background
    pub background: Color32,
    /// Card background
    pub panel: Color32,
    /// Primary text
    pub text: Color32,
    /// Violet accent (buttons, headings)
    pub accent: Color32,
    /// Muted violet for labels and descriptions
    pub accent_dim: Color32,
    /// Card borders
    pub border: Color32,
    /// Success banner and balance
    pub teal: Color32,
    /// Error banner
    pub orange: Color32,
}

impl Default for BankingColors {
    fn default() -> Self {
        BankingColors {
            background: Color32::from_rgb(15, 23, 42),      // #0F172A
            panel: Color32::from_rgb(30, 41, 59),           // #1E293B
            text: Color32::from_rgb(241, 245, 249),         // #F1F5F9
            accent: Color32::from_rgb(139, 92, 246),        // #8B5CF6
            accent_dim: Color32::from_rgb(196, 181, 253),   // #C4B5FD
            border: Color32::from_rgb(76, 29, 149),         // #4C1D95
            teal: Color32::from_rgb(45, 212, 191),          // #2DD4BF
            orange: Color32::from_rgb(251, 146, 60),        // #FB923C
        }
    }
}

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: BankingColors,
    /// Normal text color
    pub normal: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub border: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = BankingColors::default();
        Theme {
            normal: colors.text,
            dim: colors.accent_dim,
            success: colors.teal,
            error: colors.orange,
            border: colors.border,
            colors,
        }
    }
}

impl Theme {
    /// egui visuals for this palette
    pub fn visuals(&self) -> Visuals {
        let colors = &self.colors;
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.panel;
        visuals.extreme_bg_color = colors.background;
        visuals.selection.bg_fill = colors.accent;
        visuals.selection.stroke = Stroke::new(1.0, colors.text);

        visuals.widgets.inactive.weak_bg_fill = colors.accent;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.hovered.weak_bg_fill = colors.accent_dim;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.accent);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);

        visuals
    }

    /// Install the theme on an egui context
    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }
}
