//! Toast notification overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::constants::dialog;
use crate::toast::ToastPhase;

use super::colors;
use super::utils::bottom_right_rect;

/// Draws the current toast, if any, in the bottom-right corner of `area`.
/// Dimmed while it is on its way out.
pub fn draw_toast(frame: &mut Frame, area: Rect, app: &App) {
    let Some(message) = app.toast.message() else {
        return;
    };
    let scheme = colors::scheme(app.theme());
    let rect = bottom_right_rect(dialog::TOAST_WIDTH, dialog::TOAST_HEIGHT, area);

    let mut style = Style::default().fg(scheme.text).bg(scheme.background);
    if app.toast.phase() == ToastPhase::Exiting {
        style = style.add_modifier(Modifier::DIM);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style.fg(colors::SUCCESS))
        .border_set(symbols::border::ROUNDED);
    let line = Line::from(vec![
        Span::styled(" ✓ ", style.fg(colors::SUCCESS).bold()),
        Span::styled(message, style),
    ]);

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(line).style(style).block(block), rect);
}
