//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Each part of the screen is rendered by a separate submodule for clarity.

mod colors;
mod dialogs;
mod grid;
mod header;
mod help;
mod status;
mod toast;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, View};
use crate::constants::layout;

use dialogs::{draw_export_menu, draw_search_bar};
use grid::{content_block, draw_grid};
use header::draw_header;
use help::draw_help_overlay;
use status::{draw_commands_bar, draw_status_bar};
use toast::draw_toast;

/// Screen regions for one frame.
struct Areas {
    header: Rect,
    search: Option<Rect>,
    content: Rect,
    commands: Rect,
    status: Rect,
}

/// Splits the screen. The search bar is shown while typing and while a query
/// is applied.
fn split(area: Rect, app: &App) -> Areas {
    let show_search = app.current_view == View::Search || app.filter.is_active();
    let search_height = if show_search {
        layout::SEARCH_BAR_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Length(search_height),
            Constraint::Min(0), // Main content
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(area);

    Areas {
        header: chunks[0],
        search: show_search.then_some(chunks[1]),
        content: chunks[2],
        commands: chunks[3],
        status: chunks[4],
    }
}

/// The screen area swatches are drawn into, for a terminal of size `area`.
pub fn grid_area(area: Rect, app: &App) -> Rect {
    content_block(app).inner(split(area, app).content)
}

/// Main draw function - dispatches to specific view renderers.
pub fn draw(frame: &mut Frame, app: &App) {
    let scheme = colors::scheme(app.theme());
    let areas = split(frame.area(), app);

    frame.render_widget(
        Block::default().style(Style::default().bg(scheme.background).fg(scheme.text)),
        frame.area(),
    );

    draw_header(frame, areas.header, app);
    if let Some(search) = areas.search {
        draw_search_bar(frame, search, app);
    }
    draw_grid(frame, areas.content, app);

    // Draw the commands bar (shows available actions)
    draw_commands_bar(frame, areas.commands, app);

    // Draw the status bar (shows messages)
    draw_status_bar(frame, areas.status, app);

    if app.current_view == View::Export {
        draw_export_menu(frame, app);
    }

    draw_toast(frame, areas.content, app);

    // Draw help overlay if enabled
    if app.show_help {
        draw_help_overlay(frame, scheme);
    }
}
