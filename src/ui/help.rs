//! Help overlay rendering.

use ratatui::{
    style::{Style, Stylize},
    symbols,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::dialog;

use super::colors::{self, Scheme};
use super::utils::centered_rect;

/// Key bindings by section. An empty description starts a new section.
const BINDINGS: &[(&str, &str)] = &[
    ("NAVIGATION", ""),
    ("h j k l / arrows", "Move between swatches"),
    ("g / Home", "Jump to first swatch"),
    ("G / End", "Jump to last swatch"),
    ("Esc", "Unfocus, then clear the search"),
    ("mouse wheel", "Scroll the grid"),
    ("COPYING", ""),
    ("Enter / Space / c", "Copy the focused swatch"),
    ("click", "Focus and copy a swatch"),
    ("y", "Copy the whole row"),
    ("FORMATS", ""),
    ("f / Tab", "Cycle HEX, RGB, HSL, CLASS"),
    ("1 2 3 4", "Pick a format directly"),
    ("GENERAL", ""),
    ("/", "Search colors"),
    ("e", "Export the palette"),
    ("t", "Toggle light/dark theme"),
    ("? / F1", "Show this help"),
    ("q / Ctrl+C", "Quit application"),
];

/// Draws a help overlay popup.
pub fn draw_help_overlay(frame: &mut Frame, scheme: Scheme) {
    let area = centered_rect(dialog::HELP_WIDTH, dialog::HELP_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let help = Paragraph::new(get_help_text(scheme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::PRIMARY))
                .border_set(symbols::border::DOUBLE)
                .title(Line::from(vec![
                    Span::raw(" "),
                    Span::styled(" Help ", Style::default().fg(scheme.text).bold()),
                    Span::styled("- Press any key to close ", Style::default().fg(scheme.muted)),
                ]))
                .style(Style::default().bg(scheme.background)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
}

/// Returns the help text content.
fn get_help_text(scheme: Scheme) -> Text<'static> {
    let key_style = Style::default().fg(colors::KEY).bold();
    let desc_style = Style::default().fg(scheme.text);
    let section_style = Style::default().fg(colors::PRIMARY).bold();

    let mut lines = Vec::new();
    for (keys, desc) in BINDINGS {
        if desc.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(format!("  {keys}"), section_style)));
            lines.push(Line::from(""));
        } else {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(format!("{keys:<20}"), key_style),
                Span::styled(*desc, desc_style),
            ]));
        }
    }
    lines.push(Line::from(""));
    Text::from(lines)
}
