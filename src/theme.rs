//! Dark "vapor" style palette for the dashboard.

use eframe::egui::{self, Color32};

pub const BG_BASE: Color32 = Color32::from_rgb(0x1a, 0x09, 0x33); // deep violet
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x26, 0x0f, 0x47);
pub const BG_CARD: Color32 = Color32::from_rgb(0x30, 0x15, 0x5a);

pub const ACCENT: Color32 = Color32::from_rgb(0x6f, 0x42, 0xc1); // purple
pub const LINK: Color32 = Color32::from_rgb(0xea, 0x39, 0xb7); // pink

pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xc8, 0xb8, 0xe8);

pub const CARD_MARGIN: f32 = 8.0;
pub const VALUE_BOX_HEIGHT: f32 = 84.0;

/// Install the dashboard visuals on the context.
pub fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_BASE;
    visuals.window_fill = BG_ELEVATED;
    visuals.extreme_bg_color = BG_ELEVATED;
    visuals.faint_bg_color = BG_CARD;
    visuals.hyperlink_color = LINK;
    visuals.selection.bg_fill = ACCENT;
    visuals.override_text_color = Some(TEXT_PRIMARY);
    ctx.set_visuals(visuals);
}
