//! Swatch grid geometry.
//!
//! Lays visible swatches out on a virtual canvas as wide as the content area
//! and as tall as it needs to be. Drawing, mouse hit-testing, keyboard
//! navigation and scrolling all work from the same [`GridLayout`].

use crate::constants::layout::{SWATCH_HEIGHT, SWATCH_WIDTH};
use crate::palette::{Palette, SwatchId};
use crate::search::Filter;

/// Grid columns that fit in `width`.
pub fn columns_for(width: u16) -> usize {
    usize::from(width / SWATCH_WIDTH).max(1)
}

/// Scroll position as a percentage of the scrollable range.
pub fn scroll_progress(scroll: usize, total_height: usize, viewport_height: usize) -> f64 {
    let range = total_height.saturating_sub(viewport_height);
    if range == 0 {
        return 0.0;
    }
    (scroll.min(range) as f64 / range as f64) * 100.0
}

/// Cursor movements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}

/// Placement of one swatch on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPos {
    pub id: SwatchId,
    /// Column offset from the left of the content area.
    pub x: u16,
    /// Line offset from the top of the canvas.
    pub y: usize,
}

/// Placement of one visible group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPos {
    /// Index into `Palette::groups`.
    pub group: usize,
    /// Line of the group title.
    pub y: usize,
    /// Visible swatches in display order.
    pub ids: Vec<SwatchId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub groups: Vec<GroupPos>,
    /// Every visible swatch, in navigation order.
    pub cells: Vec<CellPos>,
    pub total_height: usize,
}

impl GridLayout {
    pub fn compute(palette: &Palette, filter: &Filter, width: u16) -> Self {
        let columns = columns_for(width);
        let cell_height = usize::from(SWATCH_HEIGHT);
        let mut groups = Vec::new();
        let mut cells = Vec::new();
        let mut y = 0;

        for (group_idx, group) in palette.groups.iter().enumerate() {
            if !filter.is_group_visible(group_idx) {
                continue;
            }
            let title_y = y;
            y += 1;

            let ids: Vec<SwatchId> = group
                .swatches
                .iter()
                .filter(|s| filter.is_swatch_visible(s.id))
                .map(|s| s.id)
                .collect();
            for (pos, id) in ids.iter().enumerate() {
                let row = pos / columns;
                let col = pos % columns;
                cells.push(CellPos {
                    id: *id,
                    // col < columns, and columns * SWATCH_WIDTH fits the width.
                    x: col as u16 * SWATCH_WIDTH,
                    y: y + row * cell_height,
                });
            }
            let rows = ids.len().div_ceil(columns);
            y += rows * cell_height + 1;

            groups.push(GroupPos {
                group: group_idx,
                y: title_y,
                ids,
            });
        }

        Self {
            columns,
            groups,
            cells,
            total_height: y,
        }
    }

    pub fn cell(&self, id: SwatchId) -> Option<&CellPos> {
        self.cells.iter().find(|c| c.id == id)
    }

    pub fn first(&self) -> Option<SwatchId> {
        self.cells.first().map(|c| c.id)
    }

    pub fn last(&self) -> Option<SwatchId> {
        self.cells.last().map(|c| c.id)
    }

    /// The swatch under a point on the canvas.
    pub fn hit_test(&self, x: u16, y: usize) -> Option<SwatchId> {
        self.cells
            .iter()
            .find(|c| {
                x >= c.x
                    && x < c.x + SWATCH_WIDTH
                    && y >= c.y
                    && y < c.y + usize::from(SWATCH_HEIGHT)
            })
            .map(|c| c.id)
    }

    /// Applies a cursor movement.
    ///
    /// Left and right walk the flat order and stop at the ends. Up and down
    /// stay inside the group and do nothing past its first or last row. With
    /// no usable cursor, every move lands on the first swatch (the last one
    /// for [`Move::Last`]).
    pub fn move_cursor(&self, cursor: Option<SwatchId>, movement: Move) -> Option<SwatchId> {
        let Some(flat_idx) = cursor.and_then(|id| self.cells.iter().position(|c| c.id == id))
        else {
            return match movement {
                Move::Last => self.last(),
                _ => self.first(),
            };
        };
        let current = self.cells[flat_idx].id;

        let next = match movement {
            Move::Right => self.cells[(flat_idx + 1).min(self.cells.len() - 1)].id,
            Move::Left => self.cells[flat_idx.saturating_sub(1)].id,
            Move::Down | Move::Up => {
                let Some(group) = self.groups.iter().find(|g| g.ids.contains(&current)) else {
                    return Some(current);
                };
                let pos = group.ids.iter().position(|id| *id == current).unwrap_or(0);
                let target = match movement {
                    Move::Down => pos.checked_add(self.columns).filter(|p| *p < group.ids.len()),
                    _ => pos.checked_sub(self.columns),
                };
                target.map_or(current, |p| group.ids[p])
            }
            Move::First => self.first().unwrap_or(current),
            Move::Last => self.last().unwrap_or(current),
        };
        Some(next)
    }

    /// Largest useful scroll offset for a viewport.
    pub fn max_scroll(&self, viewport_height: usize) -> usize {
        self.total_height.saturating_sub(viewport_height)
    }

    /// Scroll offset that brings `id` fully into view, changing `scroll` as
    /// little as possible. A swatch on its group's first row brings the group
    /// title along.
    pub fn scroll_to_show(&self, id: SwatchId, scroll: usize, viewport_height: usize) -> usize {
        let Some(cell) = self.cell(id) else {
            return scroll.min(self.max_scroll(viewport_height));
        };
        let is_first_row = self.groups.iter().any(|g| g.y + 1 == cell.y);
        let top = if is_first_row { cell.y - 1 } else { cell.y };
        let bottom = cell.y + usize::from(SWATCH_HEIGHT);

        let scroll = if top < scroll {
            top
        } else if bottom > scroll + viewport_height {
            bottom.saturating_sub(viewport_height)
        } else {
            scroll
        };
        scroll.min(self.max_scroll(viewport_height))
    }

    /// The group whose section is at the top of the viewport.
    pub fn section_at(&self, scroll: usize) -> Option<usize> {
        self.groups
            .iter()
            .rev()
            .find(|g| g.y <= scroll)
            .or_else(|| self.groups.first())
            .map(|g| g.group)
    }
}
