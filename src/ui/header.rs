//! Header rendering: title, format tabs and section tabs.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

use crate::app::App;
use crate::format::DisplayFormat;
use crate::theme::Theme;

use super::colors;

/// Draws the header: title line, format selector, section tabs, divider.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors::scheme(app.theme());
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let theme_indicator = match app.theme() {
        Theme::Dark => "☾ dark",
        Theme::Light => "☀ light",
    };
    let title = Line::from(vec![
        Span::styled(" ◆ ", Style::default().fg(colors::ACCENT)),
        Span::styled("SWATCH", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled("::", Style::default().fg(scheme.muted)),
        Span::styled("TUI", Style::default().fg(colors::KEY).bold()),
        Span::styled(" ▸▸ ", Style::default().fg(scheme.muted)),
        Span::styled(app.palette.name.as_str(), Style::default().fg(scheme.text).bold()),
        Span::styled(
            format!("  {} colors", app.palette.len()),
            Style::default().fg(scheme.muted),
        ),
    ]);
    let theme_line = Line::from(vec![
        Span::styled(theme_indicator, Style::default().fg(colors::SECONDARY)),
        Span::styled(format!(" v{} ", env!("CARGO_PKG_VERSION")), Style::default().fg(scheme.muted)),
    ])
    .right_aligned();
    frame.render_widget(Paragraph::new(title), rows[0]);
    frame.render_widget(Paragraph::new(theme_line), rows[0]);

    let formats = Tabs::new(DisplayFormat::ALL.iter().map(|f| f.label()))
        .select(app.formats.format().index())
        .style(Style::default().fg(scheme.muted))
        .highlight_style(
            Style::default()
                .fg(colors::SELECTION_TEXT)
                .bg(colors::SELECTION)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(colors::BORDER)))
        .padding(" ", " ");
    let format_row = split_label(rows[1], " Format ");
    frame.render_widget(label(" Format ", scheme.muted), format_row[0]);
    frame.render_widget(formats, format_row[1]);

    let sections = Tabs::new(app.palette.groups.iter().enumerate().map(|(idx, g)| {
        let style = if app.filter.is_group_visible(idx) {
            Style::default().fg(scheme.text)
        } else {
            Style::default().fg(scheme.muted).add_modifier(Modifier::DIM)
        };
        Line::styled(g.title.as_str(), style)
    }))
    .select(app.active_group().unwrap_or(0))
    .highlight_style(
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )
    .divider(Span::styled("·", Style::default().fg(scheme.muted)));
    let section_row = split_label(rows[2], " Section ");
    frame.render_widget(label(" Section ", scheme.muted), section_row[0]);
    frame.render_widget(sections, section_row[1]);

    let divider = "━".repeat(usize::from(area.width));
    frame.render_widget(
        Paragraph::new(Span::styled(divider, Style::default().fg(colors::BORDER))),
        rows[3],
    );
}

fn split_label(area: Rect, text: &str) -> std::rc::Rc<[Rect]> {
    // Labels are ASCII.
    let width = text.len() as u16 + 1;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(width), Constraint::Min(0)])
        .split(area)
}

fn label(text: &str, color: ratatui::style::Color) -> Paragraph<'_> {
    Paragraph::new(Span::styled(text, Style::default().fg(color)))
}
