//! UI theme definitions.

use egui::{Color32, Visuals};

pub use crate::storage::config::Theme;

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(15, 52, 96);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(22, 33, 62);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(38, 48, 80);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(221, 221, 221);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(60, 72, 104);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 252);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(240, 242, 248);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(26, 26, 46);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(80, 80, 100);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(218, 218, 224);
}

/// Accent colors shared by both themes.
pub mod accents {
    use egui::Color32;

    /// Title and primary call to action
    pub const PUMP_RED: Color32 = Color32::from_rgb(255, 107, 107);
    /// Stat numbers
    pub const GOLD: Color32 = Color32::from_rgb(254, 202, 87);
    /// Subtitle and submit button
    pub const SKY: Color32 = Color32::from_rgb(72, 219, 251);
    /// Unselected intensity button
    pub const SLATE: Color32 = Color32::from_rgb(55, 65, 81);
    /// Delete button
    pub const DELETE: Color32 = Color32::from_rgba_premultiplied(77, 32, 32, 77);
}

/// Create dark theme visuals.
fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::PANEL_BG;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(52, 64, 100);
    visuals.widgets.active.bg_fill = accents::PUMP_RED;

    visuals.selection.bg_fill = accents::SKY.linear_multiply(0.4);
    visuals.selection.stroke.color = accents::SKY;

    visuals.widgets.noninteractive.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = DarkTheme::TEXT_PRIMARY;

    visuals.widgets.noninteractive.bg_stroke.color = DarkTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = DarkTheme::BORDER;

    visuals
}

/// Create light theme visuals.
fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightTheme::PANEL_BG;
    visuals.panel_fill = LightTheme::PANEL_BG;
    visuals.faint_bg_color = LightTheme::CARD_BG;
    visuals.extreme_bg_color = LightTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(228, 230, 238);
    visuals.widgets.active.bg_fill = accents::PUMP_RED;

    visuals.selection.bg_fill = accents::SKY.linear_multiply(0.2);
    visuals.selection.stroke.color = accents::SKY;

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = LightTheme::BORDER;

    visuals
}

/// Intensity colors for badges and the intensity picker.
pub mod intensity_colors {
    use crate::workouts::Intensity;
    use egui::Color32;

    pub const LIGHT: Color32 = Color32::from_rgb(74, 222, 128);
    pub const MEDIUM: Color32 = Color32::from_rgb(251, 191, 36);
    pub const HARD: Color32 = Color32::from_rgb(248, 113, 113);
    pub const BEAST: Color32 = Color32::from_rgb(220, 38, 38);

    /// Get the color for an intensity level.
    pub fn color(intensity: Intensity) -> Color32 {
        match intensity {
            Intensity::Light => LIGHT,
            Intensity::Medium => MEDIUM,
            Intensity::Hard => HARD,
            Intensity::Beast => BEAST,
        }
    }
}
