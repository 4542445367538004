//! Search filtering over the palette.

use crate::palette::{Palette, Swatch, SwatchId};

/// Result of applying a search query to a palette.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    query: String,
    swatch_visible: Vec<bool>,
    group_visible: Vec<bool>,
    visible_count: usize,
}

impl Filter {
    /// A filter that shows everything.
    pub fn show_all(palette: &Palette) -> Self {
        Self::apply(palette, "")
    }

    /// Filters swatches by `query`.
    ///
    /// The query is trimmed and lowercased. A swatch matches on its hex value,
    /// class label, shade or group title. A group is hidden only when the query
    /// is non-empty and none of its swatches match.
    pub fn apply(palette: &Palette, query: &str) -> Self {
        let query = query.trim().to_lowercase();
        let mut swatch_visible = vec![false; palette.len()];
        let mut group_visible = Vec::with_capacity(palette.groups.len());
        let mut visible_count = 0;

        for group in &palette.groups {
            let title = group.title.to_lowercase();
            let mut group_count = 0;
            for swatch in &group.swatches {
                if matches(swatch, &title, &query) {
                    swatch_visible[swatch.id] = true;
                    group_count += 1;
                }
            }
            group_visible.push(group_count > 0 || query.is_empty());
            visible_count += group_count;
        }

        tracing::debug!(query = %query, visible = visible_count, "applied search filter");

        Self {
            query,
            swatch_visible,
            group_visible,
            visible_count,
        }
    }

    /// The normalized query.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn is_swatch_visible(&self, id: SwatchId) -> bool {
        self.swatch_visible.get(id).copied().unwrap_or(false)
    }

    pub fn is_group_visible(&self, group: usize) -> bool {
        self.group_visible.get(group).copied().unwrap_or(false)
    }

    /// Number of swatches that matched.
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }
}

fn matches(swatch: &Swatch, group_title: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    // Shades are compared as written, the other fields case-insensitively.
    swatch.hex.to_lowercase().contains(query)
        || swatch
            .class_label
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(query))
        || swatch.shade.contains(query)
        || group_title.contains(query)
}
