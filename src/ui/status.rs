//! Status bar and commands bar rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, View};

use super::colors;

/// Draws the commands bar showing available actions for current view.
pub fn draw_commands_bar(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors::scheme(app.theme());
    let commands = get_commands_for_view(&app.current_view, app.scroll > 0);

    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    for (i, (key, desc)) in commands.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors::KEY).bold()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Style::default().fg(scheme.muted)));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));

    let commands_widget = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(commands_widget, area);
}

/// Returns the list of commands available for a given view.
fn get_commands_for_view(view: &View, scrolled: bool) -> Vec<(&'static str, &'static str)> {
    match view {
        View::Palette => {
            let mut commands = vec![
                ("hjkl", "move"),
                ("Enter", "copy"),
                ("y", "copy row"),
                ("f", "format"),
                ("/", "search"),
                ("e", "export"),
                ("t", "theme"),
                ("?", "help"),
                ("q", "quit"),
            ];
            if scrolled {
                commands.insert(0, ("g", "back to top"));
            }
            commands
        }
        View::Search => vec![("type", "filter"), ("Enter", "done"), ("Esc", "clear")],
        View::Export => vec![("j/k", "navigate"), ("Enter", "copy"), ("Esc", "cancel")],
    }
}

/// Draws the status bar at the bottom.
///
/// Shows the latest status message, or else details of the focused swatch.
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors::scheme(app.theme());
    let line = if let Some(status) = &app.status {
        let style = if status.is_error {
            Style::default().fg(colors::ERROR)
        } else {
            Style::default().fg(colors::SUCCESS)
        };
        Line::styled(format!(" {} ", status.text), style)
    } else if let Some(swatch) = app.focused_swatch() {
        let group = app
            .palette
            .groups
            .get(swatch.group)
            .map(|g| g.title.as_str())
            .unwrap_or_default();
        let tooltip = app
            .badges
            .get(swatch.id)
            .map(|b| format!("{} · luminance {:.2}", b.tooltip(), b.luminance))
            .unwrap_or_default();
        Line::from(vec![
            Span::styled(format!(" {group} {}", swatch.shade), Style::default().fg(scheme.text).bold()),
            Span::styled(" · ", Style::default().fg(colors::BORDER)),
            Span::styled(swatch.hex.as_str(), Style::default().fg(colors::SECONDARY)),
            Span::styled(" · ", Style::default().fg(colors::BORDER)),
            Span::styled(tooltip, Style::default().fg(scheme.muted)),
        ])
    } else {
        Line::styled(" Ready", Style::default().fg(scheme.muted))
    };

    frame.render_widget(Paragraph::new(line), area);
}
