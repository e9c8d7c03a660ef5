// Demo palette and the skin -> stroke mapping

use eframe::egui::{self, Color32, Stroke};
use padnav::{Color, Skin};

pub const BG_DARK: Color32 = Color32::from_rgb(18, 20, 26);
pub const BG_MID: Color32 = Color32::from_rgb(28, 31, 40);
pub const BG_LIGHT: Color32 = Color32::from_rgb(48, 52, 64);
pub const ACCENT: Color32 = Color32::from_rgb(80, 180, 255);
pub const ACCENT_GLOW: Color32 = Color32::from_rgb(100, 200, 255);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 238);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(130, 136, 150);

pub fn apply_theme(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BG_DARK;
    visuals.window_fill = BG_MID;
    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.4);
    visuals.selection.stroke = Stroke::new(2.0, ACCENT);
    ctx.set_visuals(visuals);
}

pub fn color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Outline stroke for the focus ring around hovered content
pub fn focus_stroke() -> Stroke {
    Stroke::new(2.5, ACCENT_GLOW)
}

pub fn skin_stroke(skin: Skin) -> Option<Stroke> {
    match skin {
        Skin::None => None,
        Skin::Simple => Some(Stroke::new(1.0, BG_LIGHT)),
        Skin::Fancy => Some(Stroke::new(2.0, ACCENT)),
        Skin::ListBackground => Some(Stroke::new(1.0, TEXT_MUTED)),
    }
}
