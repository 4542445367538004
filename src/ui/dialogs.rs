//! Search bar and export menu rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph},
    Frame,
};

use crate::app::{App, View};
use crate::constants::dialog;
use crate::export::ExportFormat;

use super::colors;
use super::utils::centered_rect;

/// Block cursor character for input fields.
pub(crate) const BLOCK_CURSOR: &str = "█";

/// Input field prompt indicator.
pub(crate) const INPUT_INDICATOR: &str = "› ";

/// Draws the search bar above the grid.
///
/// While typing, the bar is highlighted and shows a cursor. Afterwards it
/// keeps showing the applied query.
pub fn draw_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors::scheme(app.theme());
    let editing = app.current_view == View::Search;
    let border = if editing { colors::PRIMARY } else { colors::BORDER };
    let query = if editing {
        app.input_buffer.as_str()
    } else {
        app.filter.query()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled("Search", Style::default().fg(scheme.text).bold()),
            Span::raw(" "),
        ]));

    let mut spans = vec![
        Span::styled(INPUT_INDICATOR, Style::default().fg(scheme.muted)),
        Span::styled(query, Style::default().fg(scheme.text)),
    ];
    if editing {
        spans.push(Span::styled(
            BLOCK_CURSOR,
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draws the export format menu.
pub fn draw_export_menu(frame: &mut Frame, app: &App) {
    let scheme = colors::scheme(app.theme());
    let area = centered_rect(dialog::EXPORT_WIDTH, dialog::EXPORT_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Hint
            Constraint::Min(0),    // List
            Constraint::Length(1), // Footer with commands
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::PRIMARY))
        .border_set(symbols::border::DOUBLE)
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled("Export Palette", Style::default().fg(scheme.text).bold()),
            Span::raw(" "),
        ]))
        .style(Style::default().bg(scheme.background))
        .padding(Padding::horizontal(1));
    frame.render_widget(block, area);

    let hint = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("{} colors", app.palette.len()),
            Style::default().fg(colors::SECONDARY).bold(),
        ),
        Span::styled(" go to the clipboard", Style::default().fg(scheme.muted)),
    ]));
    frame.render_widget(hint, chunks[0]);

    let items: Vec<ListItem> = ExportFormat::ALL
        .iter()
        .enumerate()
        .map(|(idx, format)| {
            let is_selected = app.export_state.selected() == Some(idx);
            let style = if is_selected {
                Style::default()
                    .bg(colors::SELECTION)
                    .fg(colors::SELECTION_TEXT)
            } else {
                Style::default().fg(scheme.text)
            };

            let content = Line::from(vec![
                Span::styled(if is_selected { " ▸ " } else { "   " }, style.fg(colors::KEY)),
                Span::styled(format!("{:<10}", format.label()), style.add_modifier(Modifier::BOLD)),
                Span::styled(
                    format.description(),
                    if is_selected { style } else { style.fg(scheme.muted) },
                ),
            ]);

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items).highlight_symbol("");
    frame.render_stateful_widget(list, chunks[1], &mut app.export_state.clone());

    let footer = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled("j/k", Style::default().fg(colors::KEY).bold()),
        Span::styled(" navigate  ", Style::default().fg(scheme.muted)),
        Span::styled("Enter", Style::default().fg(colors::KEY).bold()),
        Span::styled(" copy  ", Style::default().fg(scheme.muted)),
        Span::styled("Esc", Style::default().fg(colors::KEY).bold()),
        Span::styled(" cancel", Style::default().fg(scheme.muted)),
    ]));
    frame.render_widget(footer, chunks[2]);
}
