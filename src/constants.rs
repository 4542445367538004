//! Application-wide constants.
//!
//! Centralizes magic numbers and configuration values for maintainability.

use std::time::Duration;

/// Event polling timeout - balances responsiveness with CPU usage.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Preference key holding the theme.
pub const THEME_KEY: &str = "theme";

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Header height: title line plus format and section tabs.
    pub const HEADER_HEIGHT: u16 = 4;
    /// Search bar height when a query is active or being typed.
    pub const SEARCH_BAR_HEIGHT: u16 = 3;
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 2;
    /// Status bar height.
    pub const STATUS_BAR_HEIGHT: u16 = 1;
    /// Width of one swatch cell in the grid.
    pub const SWATCH_WIDTH: u16 = 18;
    /// Height of one swatch cell: shade, value, badge.
    pub const SWATCH_HEIGHT: u16 = 4;
    /// Lines scrolled per mouse wheel notch.
    pub const WHEEL_STEP: usize = 3;
}

/// Dialog dimensions (percentages of screen size).
pub mod dialog {
    /// Help overlay width percentage.
    pub const HELP_WIDTH: u16 = 60;
    /// Help overlay height percentage.
    pub const HELP_HEIGHT: u16 = 80;
    /// Export menu width percentage.
    pub const EXPORT_WIDTH: u16 = 50;
    /// Export menu height percentage.
    pub const EXPORT_HEIGHT: u16 = 40;
    /// Toast width in columns.
    pub const TOAST_WIDTH: u16 = 44;
    /// Toast height in rows.
    pub const TOAST_HEIGHT: u16 = 3;
}

/// Notification timing.
pub mod toast {
    use std::time::Duration;

    /// How long a toast stays fully visible.
    pub const VISIBLE_DURATION: Duration = Duration::from_millis(2000);
    /// Length of the exit phase after the visible window.
    pub const EXIT_DURATION: Duration = Duration::from_millis(400);
}

/// WCAG thresholds.
pub mod contrast {
    /// Swatches brighter than this get dark labels.
    pub const DARK_TEXT_LUMINANCE: f64 = 0.35;
    /// Enhanced contrast (AAA) for normal text.
    pub const AAA_RATIO: f64 = 7.0;
    /// Minimum contrast (AA) for normal text.
    pub const AA_RATIO: f64 = 4.5;
    /// Minimum contrast (AA) for large text.
    pub const AA_LARGE_RATIO: f64 = 3.0;
}
