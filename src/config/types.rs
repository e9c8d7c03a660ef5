use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 8-bit RGBA color, kept renderer-agnostic so the core never depends on egui.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const LIGHT_PINK: Color = Color::rgb(255, 182, 193);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Visual treatment a renderer applies to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Skin {
    None,
    #[default]
    Simple,
    Fancy,
    ListBackground,
}

/// Per-axis stick deadzone in normalized units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deadzone {
    pub x: f32,
    pub y: f32,
}

impl Default for Deadzone {
    fn default() -> Self {
        Self { x: 0.3, y: 0.3 }
    }
}

/// Navigation settings (colors, skins, timings, deadzones)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    #[serde(default = "default_color")]
    pub default_color: Color,
    #[serde(default = "selected_color")]
    pub selected_color: Color,
    #[serde(default)]
    pub default_skin: Skin,
    #[serde(default = "selected_skin")]
    pub selected_skin: Skin,
    /// Delay between Confirm on focused content and the click being delivered
    #[serde(default = "content_click_timeout_ms")]
    pub content_click_timeout_ms: u64,
    /// Debounce window after a modal opens before it accepts Confirm/Cancel
    #[serde(default = "message_box_timeout_ms")]
    pub message_box_timeout_ms: u64,
    #[serde(default)]
    pub left_deadzone: Deadzone,
    #[serde(default)]
    pub right_deadzone: Deadzone,
}

fn default_color() -> Color {
    Color::WHITE
}

fn selected_color() -> Color {
    Color::LIGHT_PINK
}

fn selected_skin() -> Skin {
    Skin::Fancy
}

fn content_click_timeout_ms() -> u64 {
    100
}

fn message_box_timeout_ms() -> u64 {
    500
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            selected_color: selected_color(),
            default_skin: Skin::default(),
            selected_skin: selected_skin(),
            content_click_timeout_ms: content_click_timeout_ms(),
            message_box_timeout_ms: message_box_timeout_ms(),
            left_deadzone: Deadzone::default(),
            right_deadzone: Deadzone::default(),
        }
    }
}

impl NavConfig {
    pub fn content_click_timeout(&self) -> Duration {
        Duration::from_millis(self.content_click_timeout_ms)
    }

    pub fn message_box_timeout(&self) -> Duration {
        Duration::from_millis(self.message_box_timeout_ms)
    }
}
