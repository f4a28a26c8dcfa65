// BayLog - ui/theme.rs
//
// Colour scheme, visuals, and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Bay badge accent.
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235); // Blue 600

/// Destructive actions (Clear, Delete).
pub const DANGER: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Placeholder text for empty views.
pub const MUTED: Color32 = Color32::from_rgb(156, 163, 175); // Gray 400

/// Layout constants.
pub const DEFAULTS_PANEL_WIDTH: f32 = 280.0;
pub const SEARCH_WIDTH: f32 = 260.0;
pub const PASSWORD_WIDTH: f32 = 90.0;
pub const FIELD_WIDTH: f32 = 130.0;
pub const EDIT_FIELD_WIDTH: f32 = 110.0;

/// Apply the dark/light visuals and body font size.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        if let Some(body) = style.text_styles.get_mut(&egui::TextStyle::Body) {
            body.size = font_size;
        }
        if let Some(button) = style.text_styles.get_mut(&egui::TextStyle::Button) {
            button.size = font_size;
        }
    });
}
