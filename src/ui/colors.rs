//! Color theme definitions for the UI.
//!
//! Accent colors are shared by both themes. Surfaces and body text come from
//! the [`Scheme`] of the active theme.

use ratatui::style::Color;

use crate::theme::Theme;

/// Primary accent color (used for titles, highlights)
pub const PRIMARY: Color = Color::Rgb(56, 189, 248); // Bright cyan
/// Secondary accent color (used for active elements)
pub const SECONDARY: Color = Color::Rgb(52, 211, 153); // Bright emerald
/// Background for selected items
pub const SELECTION: Color = Color::Rgb(99, 102, 241); // Indigo
/// Text on selection
pub const SELECTION_TEXT: Color = Color::White;
/// Error/danger color
pub const ERROR: Color = Color::Rgb(251, 113, 133); // Bright rose
/// Success color
pub const SUCCESS: Color = Color::Rgb(74, 222, 128); // Bright green
/// Border color
pub const BORDER: Color = Color::Rgb(129, 140, 248); // Light indigo
/// Key highlight color (for keyboard shortcuts, focus)
pub const KEY: Color = Color::Rgb(244, 114, 182); // Bright pink
/// Accent color for icons and decorations
pub const ACCENT: Color = Color::Rgb(192, 132, 252); // Bright purple

/// Label color on light swatches.
pub const SWATCH_DARK_TEXT: Color = Color::Rgb(17, 24, 39);
/// Label color on dark swatches.
pub const SWATCH_LIGHT_TEXT: Color = Color::White;

/// Theme-dependent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheme {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
}

const DARK: Scheme = Scheme {
    background: Color::Rgb(15, 23, 42),
    text: Color::Rgb(226, 232, 240),
    muted: Color::Rgb(148, 163, 184),
};

const LIGHT: Scheme = Scheme {
    background: Color::Rgb(248, 250, 252),
    text: Color::Rgb(15, 23, 42),
    muted: Color::Rgb(100, 116, 139),
};

pub fn scheme(theme: Theme) -> Scheme {
    match theme {
        Theme::Dark => DARK,
        Theme::Light => LIGHT,
    }
}
