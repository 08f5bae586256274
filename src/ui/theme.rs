//! UI theme definitions.
//!
//! T052: Implement dark theme colors
//! T053: Implement light theme colors

use egui::{Color32, Visuals};

use crate::storage::ThemePreference;

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl From<ThemePreference> for Theme {
    fn from(pref: ThemePreference) -> Self {
        match pref {
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::Light => Theme::Light,
        }
    }
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }

    /// Accent color for charts and highlights.
    pub fn accent(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::ACCENT,
            Theme::Light => LightTheme::ACCENT,
        }
    }

    /// Color for completed/success states.
    pub fn success(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::SUCCESS,
            Theme::Light => LightTheme::SUCCESS,
        }
    }

    /// Background for cards.
    pub fn card_bg(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::CARD_BG,
            Theme::Light => LightTheme::CARD_BG,
        }
    }

    /// Secondary text color.
    pub fn text_secondary(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::TEXT_SECONDARY,
            Theme::Light => LightTheme::TEXT_SECONDARY,
        }
    }
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(14, 16, 20);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(22, 24, 30);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(32, 35, 43);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 162, 172);
    /// Accent color (energetic orange)
    pub const ACCENT: Color32 = Color32::from_rgb(249, 115, 22);
    /// Success color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(55, 58, 68);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 252);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(245, 245, 248);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(24, 24, 32);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(96, 96, 104);
    /// Accent color (energetic orange)
    pub const ACCENT: Color32 = Color32::from_rgb(234, 88, 12);
    /// Success color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(22, 163, 74);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(218, 218, 224);
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
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(46, 50, 60);
    visuals.widgets.active.bg_fill = DarkTheme::ACCENT;

    visuals.selection.bg_fill = DarkTheme::ACCENT.linear_multiply(0.4);
    visuals.selection.stroke.color = DarkTheme::ACCENT;

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
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(230, 230, 235);
    visuals.widgets.active.bg_fill = LightTheme::ACCENT;

    visuals.selection.bg_fill = LightTheme::ACCENT.linear_multiply(0.2);
    visuals.selection.stroke.color = LightTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = LightTheme::BORDER;

    visuals
}
