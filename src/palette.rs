//! Palette model and loading.
//!
//! A palette is a list of named groups, each holding swatches ordered by
//! shade. Swatches get a dense numeric id in load order, which every other
//! module uses to index per-swatch state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::color::Rgb;

/// Built-in palette shown when no palette file is given.
const BUILTIN_PALETTE: &str = include_str!("../assets/palette.toml");

/// Shade used when a palette entry omits one.
const DEFAULT_SHADE: &str = "500";

/// Errors loading a palette file.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("failed to read palette file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse palette")]
    Parse(#[from] toml::de::Error),
}

/// Index of a swatch in load order.
pub type SwatchId = usize;

/// One color record.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub id: SwatchId,
    /// Index of the owning group.
    pub group: usize,
    pub shade: String,
    pub hex: String,
    /// Framework utility class, shown under the class display format.
    pub class_label: Option<String>,
}

/// A titled run of swatches.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteGroup {
    pub title: String,
    pub swatches: Vec<Swatch>,
}

/// The full palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: String,
    pub groups: Vec<PaletteGroup>,
    /// `(group, position)` of each swatch, indexed by id.
    index: Vec<(usize, usize)>,
}

#[derive(Debug, Deserialize)]
struct PaletteFile {
    #[serde(default)]
    name: String,
    #[serde(default)]
    groups: Vec<GroupEntry>,
}

#[derive(Debug, Deserialize)]
struct GroupEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    swatches: Vec<SwatchEntry>,
}

#[derive(Debug, Deserialize)]
struct SwatchEntry {
    shade: Option<String>,
    hex: String,
    class: Option<String>,
}

impl Palette {
    /// The palette bundled with the binary.
    pub fn builtin() -> Result<Self, PaletteError> {
        Self::from_toml_str(BUILTIN_PALETTE)
    }

    /// Loads a palette from a TOML file.
    pub fn load(path: &Path) -> Result<Self, PaletteError> {
        let content = fs::read_to_string(path).map_err(|source| PaletteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let palette = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), swatches = palette.len(), "loaded palette");
        Ok(palette)
    }

    /// Parses a palette from TOML text.
    ///
    /// Hex values are kept as written. Malformed ones are logged and render
    /// degenerately rather than failing the load.
    pub fn from_toml_str(content: &str) -> Result<Self, PaletteError> {
        let file: PaletteFile = toml::from_str(content)?;

        let mut next_id = 0;
        let groups: Vec<PaletteGroup> = file
            .groups
            .into_iter()
            .enumerate()
            .map(|(group_idx, group)| {
                let swatches = group
                    .swatches
                    .into_iter()
                    .map(|entry| {
                        if Rgb::parse(&entry.hex).is_err() {
                            tracing::warn!(hex = %entry.hex, group = %group.title, "malformed hex color in palette");
                        }
                        let swatch = Swatch {
                            id: next_id,
                            group: group_idx,
                            shade: entry.shade.unwrap_or_else(|| DEFAULT_SHADE.to_string()),
                            hex: entry.hex,
                            class_label: entry.class.filter(|c| !c.is_empty()),
                        };
                        next_id += 1;
                        swatch
                    })
                    .collect();
                PaletteGroup {
                    title: group.title,
                    swatches,
                }
            })
            .collect();

        let index = groups
            .iter()
            .enumerate()
            .flat_map(|(group_idx, group)| (0..group.swatches.len()).map(move |pos| (group_idx, pos)))
            .collect();

        Ok(Self {
            name: file.name,
            groups,
            index,
        })
    }

    /// Number of swatches across all groups.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All swatches in id order.
    pub fn swatches(&self) -> impl Iterator<Item = &Swatch> {
        self.groups.iter().flat_map(|g| g.swatches.iter())
    }

    /// Looks up a swatch by id.
    pub fn swatch(&self, id: SwatchId) -> Option<&Swatch> {
        let &(group, pos) = self.index.get(id)?;
        self.groups.get(group)?.swatches.get(pos)
    }
}
