//! Palette export as CSS variables, JSON or a Tailwind config module.

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use crate::palette::Palette;

/// Shade key used when a swatch has none.
const FALLBACK_SHADE: &str = "500";

/// Family key used when a group has no title.
const FALLBACK_FAMILY: &str = "unknown";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode palette as JSON")]
    Json(#[from] serde_json::Error),
}

/// Output flavours offered by the export menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Css,
    Json,
    Tailwind,
}

impl ExportFormat {
    /// Menu order.
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Css, ExportFormat::Json, ExportFormat::Tailwind];

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Css => "CSS",
            ExportFormat::Json => "JSON",
            ExportFormat::Tailwind => "TAILWIND",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ExportFormat::Css => "Custom properties on :root",
            ExportFormat::Json => "Nested family/shade object",
            ExportFormat::Tailwind => "tailwind.config.js theme extension",
        }
    }

    /// Notification shown once the export reached the clipboard.
    pub fn copied_message(self) -> String {
        format!("Exported as {} — copied!", self.label())
    }
}

/// Family to shade to hex mapping, in palette order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportColors {
    families: Vec<Family>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Family {
    name: String,
    shades: Vec<(String, String)>,
}

impl Family {
    fn insert(&mut self, shade: String, hex: String) {
        match self.shades.iter_mut().find(|(s, _)| *s == shade) {
            Some(entry) => entry.1 = hex,
            None => self.shades.push((shade, hex)),
        }
    }
}

impl ExportColors {
    /// Collects every swatch of the palette, ignoring any search filter.
    ///
    /// Groups that share a family key replace each other's shades, keeping
    /// the position of the first.
    pub fn collect(palette: &Palette) -> Self {
        let mut families: Vec<Family> = Vec::new();

        for group in &palette.groups {
            let name = family_key(&group.title);
            let idx = match families.iter().position(|f| f.name == name) {
                Some(idx) => {
                    families[idx].shades.clear();
                    idx
                }
                None => {
                    families.push(Family {
                        name,
                        shades: Vec::new(),
                    });
                    families.len() - 1
                }
            };

            for swatch in &group.swatches {
                if swatch.hex.is_empty() {
                    continue;
                }
                let shade = if swatch.shade.is_empty() {
                    FALLBACK_SHADE.to_string()
                } else {
                    swatch.shade.clone()
                };
                families[idx].insert(shade, swatch.hex.clone());
            }
        }

        Self { families }
    }

    pub fn render(&self, format: ExportFormat) -> Result<String, ExportError> {
        let text = match format {
            ExportFormat::Css => self.to_css(),
            ExportFormat::Json => serde_json::to_string_pretty(self)?,
            ExportFormat::Tailwind => self.to_tailwind(),
        };
        Ok(text)
    }

    fn to_css(&self) -> String {
        let mut out = String::from(":root {\n");
        for family in &self.families {
            for (shade, hex) in &family.shades {
                out.push_str(&format!("  --color-{}-{}: {};\n", family.name, shade, hex));
            }
            out.push('\n');
        }
        out.push('}');
        out
    }

    fn to_tailwind(&self) -> String {
        let mut out = String::from("module.exports = {\n  theme: {\n    extend: {\n      colors: {\n");
        for family in &self.families {
            out.push_str(&format!("        '{}': {{\n", family.name));
            for (shade, hex) in &family.shades {
                out.push_str(&format!("          '{shade}': '{hex}',\n"));
            }
            out.push_str("        },\n");
        }
        out.push_str("      },\n    },\n  },\n};");
        out
    }
}

impl Serialize for ExportColors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.families.len()))?;
        for family in &self.families {
            map.serialize_entry(&family.name, &ShadeMap(&family.shades))?;
        }
        map.end()
    }
}

struct ShadeMap<'a>(&'a [(String, String)]);

impl Serialize for ShadeMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (shade, hex) in self.0 {
            map.serialize_entry(shade, hex)?;
        }
        map.end()
    }
}

/// Lowercased, hyphenated family key for a group title.
fn family_key(title: &str) -> String {
    let key = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    if key.is_empty() {
        FALLBACK_FAMILY.to_string()
    } else {
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::from_toml_str(
            r##"
[[groups]]
title = "  Brand   Blue "
swatches = [
    { shade = "50", hex = "#EFF6FF" },
    { shade = "500", hex = "#3B82F6" },
]

[[groups]]
swatches = [
    { hex = "#F43F5E" },
]
"##,
        )
        .unwrap()
    }

    #[test]
    fn test_family_key_normalization() {
        assert_eq!(family_key("Brand Blue"), "brand-blue");
        assert_eq!(family_key("  Surface\tGray  "), "surface-gray");
        assert_eq!(family_key("   "), "unknown");
    }

    #[test]
    fn test_css_export() {
        let css = ExportColors::collect(&palette()).render(ExportFormat::Css).unwrap();
        assert_eq!(
            css,
            ":root {\n  --color-brand-blue-50: #EFF6FF;\n  --color-brand-blue-500: #3B82F6;\n\n  --color-unknown-500: #F43F5E;\n\n}"
        );
    }

    #[test]
    fn test_json_export_keeps_palette_order() {
        let json = ExportColors::collect(&palette()).render(ExportFormat::Json).unwrap();
        assert_eq!(
            json,
            "{\n  \"brand-blue\": {\n    \"50\": \"#EFF6FF\",\n    \"500\": \"#3B82F6\"\n  },\n  \"unknown\": {\n    \"500\": \"#F43F5E\"\n  }\n}"
        );
    }

    #[test]
    fn test_tailwind_export() {
        let js = ExportColors::collect(&palette()).render(ExportFormat::Tailwind).unwrap();
        let expected = "module.exports = {\n  theme: {\n    extend: {\n      colors: {\n        'brand-blue': {\n          '50': '#EFF6FF',\n          '500': '#3B82F6',\n        },\n        'unknown': {\n          '500': '#F43F5E',\n        },\n      },\n    },\n  },\n};";
        assert_eq!(js, expected);
    }

    #[test]
    fn test_empty_palette_exports() {
        let colors = ExportColors::collect(&Palette::from_toml_str("").unwrap());
        assert_eq!(colors.render(ExportFormat::Css).unwrap(), ":root {\n}");
        assert_eq!(colors.render(ExportFormat::Json).unwrap(), "{}");
    }

    #[test]
    fn test_duplicate_family_replaces_shades() {
        let palette = Palette::from_toml_str(
            r##"
[[groups]]
title = "Blue"
swatches = [{ shade = "100", hex = "#111111" }]

[[groups]]
title = "Red"
swatches = [{ shade = "100", hex = "#FF0000" }]

[[groups]]
title = "blue"
swatches = [{ shade = "200", hex = "#222222" }, { shade = "200", hex = "#333333" }]
"##,
        )
        .unwrap();
        let css = ExportColors::collect(&palette).render(ExportFormat::Css).unwrap();
        assert_eq!(
            css,
            ":root {\n  --color-blue-200: #333333;\n\n  --color-red-100: #FF0000;\n\n}"
        );
    }

    #[test]
    fn test_copied_message() {
        assert_eq!(ExportFormat::Json.copied_message(), "Exported as JSON — copied!");
    }
}
