//! Color math.
//!
//! Conversions from `#RRGGBB` strings into the display forms used across the
//! app, plus the WCAG relative luminance and contrast ratio.
//!
//! The string functions never fail. Each byte pair is read leniently: leading
//! whitespace, an optional sign and an optional `0x` are skipped, then the
//! longest run of hex digits is taken, so `#FFF` reads as `255, 15` and a
//! missing blue. A pair with no digits turns into a `NaN` component, which
//! then flows through the arithmetic like any other degenerate input.
//! [`Rgb::parse`] is the strict entry point for callers that need a real color.

use std::fmt;
use std::ops::Range;

use thiserror::Error;

/// Byte offsets of the red, green and blue pairs in `#RRGGBB`.
const CHANNEL_OFFSETS: [Range<usize>; 3] = [1..3, 3..5, 5..7];

/// sRGB transfer function breakpoint (WCAG 2.x).
const LINEAR_THRESHOLD: f64 = 0.03928;

/// ITU-R BT.709 luminance weights for red, green and blue.
const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Errors from strict color parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The value is not a `#RRGGBB` string.
    #[error("invalid hex color '{0}': expected #RRGGBB")]
    InvalidHex(String),
}

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a well-formed `#RRGGBB` string.
    pub fn parse(hex: &str) -> Result<Self, ColorError> {
        let well_formed = hex.len() == 7
            && hex.starts_with('#')
            && hex[1..].bytes().all(|b| b.is_ascii_hexdigit());
        if !well_formed {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }
        match channels(hex).map(|c| c.and_then(|v| u8::try_from(v).ok())) {
            [Some(r), Some(g), Some(b)] => Ok(Self::new(r, g, b)),
            _ => Err(ColorError::InvalidHex(hex.to_string())),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// HSL coordinates: hue in degrees `[0, 360)`, saturation and lightness in
/// `[0, 1]`.
///
/// `Display` rounds to whole degrees and percents, which is the form shown to
/// users and copied to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({},{}%,{}%)",
            self.hue.round(),
            (self.saturation * 100.0).round(),
            (self.lightness * 100.0).round()
        )
    }
}

/// Reads the three byte pairs of a `#RRGGBB` string. Pairs past the end of a
/// short string are empty.
fn channels(hex: &str) -> [Option<i16>; 3] {
    let bytes = hex.as_bytes();
    CHANNEL_OFFSETS.map(|range| {
        let start = range.start.min(bytes.len());
        let end = range.end.min(bytes.len());
        parse_pair(&bytes[start..end])
    })
}

/// Lenient read of one pair. `None` when no hex digit follows the prefix.
fn parse_pair(pair: &[u8]) -> Option<i16> {
    let skip = pair.iter().take_while(|b| b.is_ascii_whitespace()).count();
    let rest = &pair[skip..];
    let (negative, rest) = match rest.split_first() {
        Some((b'-', tail)) => (true, tail),
        Some((b'+', tail)) => (false, tail),
        _ => (false, rest),
    };
    let rest = rest
        .strip_prefix(b"0x")
        .or_else(|| rest.strip_prefix(b"0X"))
        .unwrap_or(rest);

    let mut digits = rest
        .iter()
        .map_while(|b| char::from(*b).to_digit(16))
        .peekable();
    digits.peek()?;
    // At most two digits, so the value fits.
    let value = digits.fold(0i16, |acc, d| acc * 16 + d as i16);
    Some(if negative { -value } else { value })
}

/// Channels divided by 255, `NaN` where a pair had no digits.
fn unit_channels(hex: &str) -> [f64; 3] {
    channels(hex).map(|c| c.map_or(f64::NAN, |v| f64::from(v) / 255.0))
}

fn hsl_from_unit([r, g, b]: [f64; 3]) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return Hsl {
            hue: 0.0,
            saturation: 0.0,
            lightness,
        };
    }

    let d = max - min;
    let saturation = if lightness > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let hue = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        hue: hue / 6.0 * 360.0,
        saturation,
        lightness,
    }
}

fn luminance_from_unit(unit: [f64; 3]) -> f64 {
    let linear = unit.map(|c| {
        if c <= LINEAR_THRESHOLD {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    });
    linear
        .iter()
        .zip(LUMINANCE_WEIGHTS)
        .map(|(c, w)| c * w)
        .sum()
}

/// Formats a hex color as `rgb(R,G,B)`.
pub fn hex_to_rgb(hex: &str) -> String {
    let [r, g, b] = channels(hex).map(|c| c.map_or_else(|| "NaN".to_string(), |v| v.to_string()));
    format!("rgb({r},{g},{b})")
}

/// Formats a hex color as `hsl(H,S%,L%)`.
pub fn hex_to_hsl(hex: &str) -> String {
    let unit = unit_channels(hex);
    if unit.iter().any(|c| c.is_nan()) {
        return "hsl(NaN,NaN%,NaN%)".to_string();
    }
    hsl_from_unit(unit).to_string()
}

/// WCAG relative luminance of a hex color. `NaN` for malformed input.
pub fn luminance(hex: &str) -> f64 {
    luminance_from_unit(unit_channels(hex))
}

/// WCAG contrast ratio between two hex colors, in `[1, 21]`.
///
/// Symmetric in its arguments. `NaN` if either color is malformed.
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    ratio_from_luminance(luminance(a), luminance(b))
}

fn ratio_from_luminance(l1: f64, l2: f64) -> f64 {
    // f64::max/min drop NaN operands, so check explicitly.
    if l1.is_nan() || l2.is_nan() {
        return f64::NAN;
    }
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + 0.05) / (darker + 0.05)
}
