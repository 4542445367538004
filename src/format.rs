//! Display formats and the format registry.

use std::fmt;

use tokio::sync::watch;

use crate::color;
use crate::register::Register;

/// How a color is shown and copied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
    /// The swatch's framework utility class, when it has one.
    Class,
}

impl DisplayFormat {
    /// All formats in tab order.
    pub const ALL: [DisplayFormat; 4] = [
        DisplayFormat::Hex,
        DisplayFormat::Rgb,
        DisplayFormat::Hsl,
        DisplayFormat::Class,
    ];

    /// Parses a format token. Unknown tokens fall back to hex.
    pub fn parse(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "hex" => DisplayFormat::Hex,
            "rgb" => DisplayFormat::Rgb,
            "hsl" => DisplayFormat::Hsl,
            "class" | "tw" => DisplayFormat::Class,
            other => {
                tracing::debug!(format = other, "unknown display format, using hex");
                DisplayFormat::Hex
            }
        }
    }

    /// The next format in tab order, wrapping around.
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Position in [`DisplayFormat::ALL`].
    pub fn index(self) -> usize {
        match self {
            DisplayFormat::Hex => 0,
            DisplayFormat::Rgb => 1,
            DisplayFormat::Hsl => 2,
            DisplayFormat::Class => 3,
        }
    }

    /// Short label for tabs.
    pub fn label(self) -> &'static str {
        match self {
            DisplayFormat::Hex => "HEX",
            DisplayFormat::Rgb => "RGB",
            DisplayFormat::Hsl => "HSL",
            DisplayFormat::Class => "CLASS",
        }
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            DisplayFormat::Hex => "hex",
            DisplayFormat::Rgb => "rgb",
            DisplayFormat::Hsl => "hsl",
            DisplayFormat::Class => "class",
        };
        f.write_str(token)
    }
}

/// Holds the active display format and renders colors with it.
#[derive(Debug, Default)]
pub struct FormatRegistry {
    current: Register<DisplayFormat>,
}

impl FormatRegistry {
    pub fn new(format: DisplayFormat) -> Self {
        Self {
            current: Register::new(format),
        }
    }

    pub fn format(&self) -> DisplayFormat {
        self.current.get()
    }

    pub fn set_format(&self, format: DisplayFormat) {
        let previous = self.current.set(format);
        tracing::debug!(from = %previous, to = %format, "display format changed");
    }

    /// Observes format changes.
    pub fn subscribe(&self) -> watch::Receiver<DisplayFormat> {
        self.current.subscribe()
    }

    /// Renders a color in the active format.
    ///
    /// Under [`DisplayFormat::Class`] a color without a class label renders as
    /// its hex value, never as an empty string.
    pub fn render(&self, hex: &str, class_label: Option<&str>) -> String {
        render_as(self.format(), hex, class_label)
    }
}

/// Renders a color in an explicit format.
pub fn render_as(format: DisplayFormat, hex: &str, class_label: Option<&str>) -> String {
    match format {
        DisplayFormat::Hex => hex.to_string(),
        DisplayFormat::Rgb => color::hex_to_rgb(hex),
        DisplayFormat::Hsl => color::hex_to_hsl(hex),
        DisplayFormat::Class => match class_label {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => hex.to_string(),
        },
    }
}
