//! WCAG contrast badges.
//!
//! Every swatch gets a badge once, when the palette is loaded: the better of
//! white or black text on the swatch, the resulting ratio, and its WCAG level.

use std::fmt;

use crate::color;
use crate::constants::contrast::{AAA_RATIO, AA_LARGE_RATIO, AA_RATIO, DARK_TEXT_LUMINANCE};

const WHITE: &str = "#FFFFFF";
const BLACK: &str = "#000000";

/// WCAG conformance level reached by a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastLevel {
    /// At least 7:1.
    Aaa,
    /// At least 4.5:1.
    Aa,
    /// At least 3:1, enough for large text.
    AaLarge,
    Fail,
}

impl ContrastLevel {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_RATIO {
            ContrastLevel::Aaa
        } else if ratio >= AA_RATIO {
            ContrastLevel::Aa
        } else if ratio >= AA_LARGE_RATIO {
            ContrastLevel::AaLarge
        } else {
            ContrastLevel::Fail
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ContrastLevel::Aaa => "AAA",
            ContrastLevel::Aa => "AA",
            ContrastLevel::AaLarge => "AA+",
            ContrastLevel::Fail => "✗",
        }
    }
}

/// Which plain text color reads better on a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestText {
    White,
    Black,
}

impl fmt::Display for BestText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BestText::White => f.write_str("white"),
            BestText::Black => f.write_str("black"),
        }
    }
}

/// Tone of the labels drawn on top of a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    Dark,
    Light,
}

/// Contrast facts for one swatch.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastBadge {
    pub luminance: f64,
    pub ratio: f64,
    pub level: ContrastLevel,
    pub best_text: BestText,
    pub tone: TextTone,
}

impl ContrastBadge {
    pub fn for_hex(hex: &str) -> Self {
        let luminance = color::luminance(hex);
        let tone = if luminance > DARK_TEXT_LUMINANCE {
            TextTone::Dark
        } else {
            TextTone::Light
        };

        let on_white = color::contrast_ratio(hex, WHITE);
        let on_black = color::contrast_ratio(hex, BLACK);
        let ratio = if on_white.is_nan() || on_black.is_nan() {
            f64::NAN
        } else {
            on_white.max(on_black)
        };
        let best_text = if on_white > on_black {
            BestText::White
        } else {
            BestText::Black
        };

        Self {
            luminance,
            ratio,
            level: ContrastLevel::from_ratio(ratio),
            best_text,
            tone,
        }
    }

    /// Short badge text, e.g. `5.7:1 AA`.
    pub fn label(&self) -> String {
        format!("{:.1}:1 {}", self.ratio, self.level.tag())
    }

    /// Longer explanation shown for the focused swatch.
    pub fn tooltip(&self) -> String {
        format!(
            "Best text: {} ({:.1}:1 contrast ratio)",
            self.best_text, self.ratio
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(ContrastLevel::from_ratio(21.0), ContrastLevel::Aaa);
        assert_eq!(ContrastLevel::from_ratio(7.0), ContrastLevel::Aaa);
        assert_eq!(ContrastLevel::from_ratio(6.99), ContrastLevel::Aa);
        assert_eq!(ContrastLevel::from_ratio(4.5), ContrastLevel::Aa);
        assert_eq!(ContrastLevel::from_ratio(4.49), ContrastLevel::AaLarge);
        assert_eq!(ContrastLevel::from_ratio(3.0), ContrastLevel::AaLarge);
        assert_eq!(ContrastLevel::from_ratio(2.99), ContrastLevel::Fail);
        assert_eq!(ContrastLevel::from_ratio(f64::NAN), ContrastLevel::Fail);
    }

    #[test]
    fn test_white_swatch_wants_black_text() {
        let badge = ContrastBadge::for_hex("#FFFFFF");
        assert_eq!(badge.best_text, BestText::Black);
        assert_eq!(badge.level, ContrastLevel::Aaa);
        assert_eq!(badge.tone, TextTone::Dark);
        assert_eq!(badge.label(), "21.0:1 AAA");
    }

    #[test]
    fn test_black_swatch_wants_white_text() {
        let badge = ContrastBadge::for_hex("#000000");
        assert_eq!(badge.best_text, BestText::White);
        assert_eq!(badge.tone, TextTone::Light);
        assert_eq!(badge.tooltip(), "Best text: white (21.0:1 contrast ratio)");
    }

    #[test]
    fn test_mid_blue_badge() {
        let badge = ContrastBadge::for_hex("#3B82F6");
        assert_eq!(badge.label(), "5.7:1 AA");
        assert_eq!(badge.best_text, BestText::Black);
        // Luminance ~0.235 is below the dark-text threshold.
        assert_eq!(badge.tone, TextTone::Light);
    }

    #[test]
    fn test_malformed_hex_fails_quietly() {
        let badge = ContrastBadge::for_hex("#12");
        assert!(badge.ratio.is_nan());
        assert_eq!(badge.level, ContrastLevel::Fail);
        assert_eq!(badge.tone, TextTone::Light);
        assert_eq!(badge.label(), "NaN:1 ✗");
    }
}
