//! Swatch grid rendering.
//!
//! Draws the part of the [`GridLayout`](crate::layout::GridLayout) canvas that
//! falls inside the viewport. Cells cut by the viewport edge are drawn line by
//! line, so partially scrolled swatches still show.

use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::app::App;
use crate::color::Rgb;
use crate::constants::layout::{SWATCH_HEIGHT, SWATCH_WIDTH};
use crate::contrast::TextTone;
use crate::layout::{scroll_progress, CellPos};

use super::colors;

/// The bordered block around the grid. Its inner area is the viewport.
pub fn content_block(app: &App) -> Block<'static> {
    let scheme = colors::scheme(app.theme());
    let count = if app.filter.is_active() {
        format!("{} of {}", app.filter.visible_count(), app.palette.len())
    } else {
        app.palette.len().to_string()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(count, Style::default().fg(colors::SECONDARY).bold()),
            Span::styled(" colors ", Style::default().fg(scheme.text)),
        ]))
        .padding(Padding::horizontal(1))
}

/// Draws the swatch grid.
pub fn draw_grid(frame: &mut Frame, area: Rect, app: &App) {
    if app.grid.cells.is_empty() {
        draw_no_matches(frame, area, app);
        return;
    }

    let scheme = colors::scheme(app.theme());
    let viewport_height = usize::from(app.viewport.height);
    let progress = scroll_progress(app.scroll, app.grid.total_height, viewport_height);
    let block = content_block(app).title_bottom(
        Line::from(Span::styled(
            format!(" {progress:.0}% "),
            Style::default().fg(scheme.muted),
        ))
        .right_aligned(),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = app.scroll..app.scroll + usize::from(inner.height);

    for group in &app.grid.groups {
        if !visible.contains(&group.y) {
            continue;
        }
        let Some(palette_group) = app.palette.groups.get(group.group) else {
            continue;
        };
        let is_active = app.active_group() == Some(group.group);
        let marker_color = if is_active { colors::KEY } else { colors::ACCENT };
        let title = Line::from(vec![
            Span::styled("▎", Style::default().fg(marker_color)),
            Span::styled(
                palette_group.title.as_str(),
                Style::default().fg(colors::PRIMARY).bold(),
            ),
            Span::styled(
                format!("  {} shades", palette_group.swatches.len()),
                Style::default().fg(scheme.muted),
            ),
        ]);
        let row = Rect::new(inner.x, inner.y + (group.y - app.scroll) as u16, inner.width, 1);
        frame.render_widget(Paragraph::new(title), row);
    }

    for cell in &app.grid.cells {
        draw_cell(frame, inner, app, cell, &visible);
    }

    if app.grid.total_height > viewport_height {
        let mut state = ScrollbarState::new(app.grid.max_scroll(viewport_height))
            .position(app.scroll)
            .viewport_content_length(viewport_height);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .thumb_style(Style::default().fg(colors::PRIMARY))
            .track_style(Style::default().fg(scheme.muted));
        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut state,
        );
    }
}

/// Shown in place of the grid when there is nothing to draw.
fn draw_no_matches(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors::scheme(app.theme());
    let (title, action, description) = if app.palette.is_empty() {
        (
            "This palette has no colors".to_string(),
            "Load another file with --palette",
            "Palettes are TOML files with [[groups]] of swatches",
        )
    } else {
        (
            format!("No colors match \"{}\"", app.filter.query()),
            "Press Esc to clear the search",
            "Search matches hex values, class names, shades and group names",
        )
    };
    let content = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("◌", Style::default().fg(colors::ACCENT))),
        Line::from(""),
        Line::from(Span::styled(title, Style::default().fg(colors::PRIMARY).bold())),
        Line::from(""),
        Line::from(Span::styled(action, Style::default().fg(colors::SUCCESS))),
        Line::from(""),
        Line::from(Span::styled(description, Style::default().fg(scheme.muted))),
    ];

    let paragraph = Paragraph::new(content)
        .block(content_block(app))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Draws the visible lines of one swatch: shade, value, contrast badge, and a
/// focus underline in the gap below.
fn draw_cell(
    frame: &mut Frame,
    inner: Rect,
    app: &App,
    cell: &CellPos,
    visible: &std::ops::Range<usize>,
) {
    let Some(swatch) = app.palette.swatch(cell.id) else {
        return;
    };
    let Some(badge) = app.badges.get(cell.id) else {
        return;
    };
    if cell.x >= inner.width {
        return;
    }
    let width = (SWATCH_WIDTH - 1).min(inner.width - cell.x);
    let focused = app.cursor == Some(cell.id);

    let (bg, fg) = match Rgb::parse(&swatch.hex) {
        Ok(rgb) => {
            let fg = match badge.tone {
                TextTone::Dark => colors::SWATCH_DARK_TEXT,
                TextTone::Light => colors::SWATCH_LIGHT_TEXT,
            };
            (Color::Rgb(rgb.r, rgb.g, rgb.b), fg)
        }
        Err(_) => (Color::Reset, colors::ERROR),
    };
    let body = Style::default().bg(bg).fg(fg);

    let shade = if focused {
        format!(" ▶ {}", swatch.shade)
    } else {
        format!(" {}", swatch.shade)
    };
    let label = app.labels.get(cell.id).map(String::as_str).unwrap_or_default();
    let lines = [
        Line::styled(shade, body.add_modifier(Modifier::BOLD)),
        Line::styled(format!(" {label}"), body),
        Line::styled(format!(" {}", badge.label()), body.add_modifier(Modifier::DIM)),
    ];

    let last_line = usize::from(SWATCH_HEIGHT) - 1;
    for (offset, line) in lines.into_iter().enumerate() {
        draw_cell_line(frame, inner, cell, offset, width, visible, Paragraph::new(line).style(body));
    }
    if focused {
        let underline = Span::styled(
            "▀".repeat(usize::from(width)),
            Style::default().fg(colors::KEY),
        );
        draw_cell_line(frame, inner, cell, last_line, width, visible, Paragraph::new(underline));
    }
}

fn draw_cell_line(
    frame: &mut Frame,
    inner: Rect,
    cell: &CellPos,
    offset: usize,
    width: u16,
    visible: &std::ops::Range<usize>,
    widget: Paragraph<'_>,
) {
    let y = cell.y + offset;
    if !visible.contains(&y) {
        return;
    }
    let row = Rect::new(
        inner.x + cell.x,
        inner.y + (y - visible.start) as u16,
        width,
        1,
    );
    frame.render_widget(widget, row);
}
