//! Application state and logic.
//!
//! This module contains the core application state, view management,
//! and event handling logic.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tokio::sync::{mpsc, watch};

use crate::clipboard::{self, ClipboardSink, CopyOutcome};
use crate::constants::layout::WHEEL_STEP;
use crate::contrast::ContrastBadge;
use crate::event::Action;
use crate::export::{ExportColors, ExportFormat};
use crate::format::{self, DisplayFormat, FormatRegistry};
use crate::layout::{GridLayout, Move};
use crate::palette::{Palette, PaletteGroup, Swatch, SwatchId};
use crate::search::Filter;
use crate::theme::{Theme, ThemeController};
use crate::toast::Toast;

/// The different views/screens in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// The swatch grid
    Palette,
    /// Typing a search query (the grid filters as you type)
    Search,
    /// Export format menu
    Export,
}

/// Status message to display to the user.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Whether this is an error message
    pub is_error: bool,
}

/// Main application state.
pub struct App {
    /// The palette being browsed
    pub palette: Palette,
    /// Active display format
    pub formats: FormatRegistry,
    /// Observes format changes to keep `labels` current
    format_rx: watch::Receiver<DisplayFormat>,
    /// Each swatch rendered in the active format, indexed by swatch id
    pub labels: Vec<String>,
    /// Contrast facts per swatch, computed once at load
    pub badges: Vec<ContrastBadge>,
    /// Light/dark theme and its persistence
    theme: ThemeController,
    /// Current view/screen
    pub current_view: View,
    /// Status message to display
    pub status: Option<StatusMessage>,
    /// Transient notification
    pub toast: Toast,

    // --- Grid state ---
    /// Current search filter
    pub filter: Filter,
    /// Geometry of the visible swatches
    pub grid: GridLayout,
    /// Focused swatch
    pub cursor: Option<SwatchId>,
    /// First canvas line shown in the viewport
    pub scroll: usize,
    /// Screen area the grid is drawn into
    pub viewport: Rect,

    // --- Export menu state ---
    pub export_state: ListState,

    // --- Input state ---
    /// Current input buffer for text entry
    pub input_buffer: String,

    // --- Help visibility ---
    pub show_help: bool,

    // --- Clipboard ---
    clipboard: Arc<dyn ClipboardSink>,
    copy_tx: mpsc::UnboundedSender<CopyOutcome>,
    copy_rx: mpsc::UnboundedReceiver<CopyOutcome>,
}

impl App {
    /// Creates a new application instance for the given palette.
    pub fn new(
        palette: Palette,
        format: DisplayFormat,
        theme: ThemeController,
        clipboard: Arc<dyn ClipboardSink>,
    ) -> Self {
        let formats = FormatRegistry::new(format);
        let format_rx = formats.subscribe();
        let labels = render_labels(&palette, format);
        let badges = palette
            .swatches()
            .map(|s| ContrastBadge::for_hex(&s.hex))
            .collect();
        let filter = Filter::show_all(&palette);
        let viewport = Rect::default();
        let grid = GridLayout::compute(&palette, &filter, viewport.width);
        let cursor = grid.first();
        let (copy_tx, copy_rx) = mpsc::unbounded_channel();

        Self {
            palette,
            formats,
            format_rx,
            labels,
            badges,
            theme,
            current_view: View::Palette,
            status: None,
            toast: Toast::default(),
            filter,
            grid,
            cursor,
            scroll: 0,
            viewport,
            export_state: ListState::default(),
            input_buffer: String::new(),
            show_help: false,
            clipboard,
            copy_tx,
            copy_rx,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Updates the grid viewport after a terminal resize.
    pub fn resize(&mut self, viewport: Rect) {
        if viewport == self.viewport {
            return;
        }
        let width_changed = viewport.width != self.viewport.width;
        self.viewport = viewport;
        if width_changed {
            self.grid = GridLayout::compute(&self.palette, &self.filter, viewport.width);
        }
        self.reveal_cursor();
    }

    /// Applies time-driven updates: finished copies, toast phases, and
    /// format changes.
    pub fn tick(&mut self, now: Instant) {
        self.drain_completions(now);
        self.toast.tick(now);
        self.refresh_labels();
    }

    /// Handles an action and returns true if the app should quit.
    pub async fn handle_event(&mut self, action: Action) -> Result<bool> {
        // Handle help toggle from any view except text entry
        if action == Action::Help && self.current_view != View::Search {
            self.show_help = !self.show_help;
            return Ok(false);
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return Ok(false);
        }

        match self.current_view {
            View::Palette => self.handle_palette_action(action).await,
            View::Search => self.handle_search_action(action).await,
            View::Export => self.handle_export_action(action).await,
        }
    }

    /// Handles actions on the swatch grid.
    async fn handle_palette_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Quit => return Ok(true),
            Action::Up => self.move_cursor(Move::Up),
            Action::Down => self.move_cursor(Move::Down),
            Action::Left => self.move_cursor(Move::Left),
            Action::Right => self.move_cursor(Move::Right),
            Action::Top => self.move_cursor(Move::First),
            Action::Bottom => self.move_cursor(Move::Last),
            Action::Enter | Action::Copy => self.copy_focused(),
            Action::CopyRow => self.copy_row(),
            Action::CycleFormat => self.set_format(self.formats.format().next()),
            Action::SetFormat(format) => self.set_format(format),
            Action::Search => self.start_search(),
            Action::Export => self.open_export_menu(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::Back => self.blur(),
            Action::Click { column, row } => self.click(column, row),
            Action::ScrollUp => self.scroll_by(-(WHEEL_STEP as isize)),
            Action::ScrollDown => self.scroll_by(WHEEL_STEP as isize),
            _ => {}
        }
        Ok(false)
    }

    /// Handles actions while typing a search query.
    async fn handle_search_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Quit => return Ok(true),
            Action::Back => {
                self.input_buffer.clear();
                self.apply_filter();
                self.current_view = View::Palette;
            }
            Action::Enter => {
                self.current_view = View::Palette;
            }
            Action::Char(c) => {
                self.input_char(c);
                self.apply_filter();
            }
            Action::Backspace => {
                self.input_backspace();
                self.apply_filter();
            }
            _ => {}
        }
        Ok(false)
    }

    /// Handles actions in the export menu.
    async fn handle_export_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Up => self.select_previous_export(),
            Action::Down => self.select_next_export(),
            Action::Enter => self.export_selected(),
            Action::Back | Action::Quit => {
                self.current_view = View::Palette;
            }
            _ => {}
        }
        Ok(false)
    }

    // --- Navigation helpers ---

    fn move_cursor(&mut self, movement: Move) {
        self.cursor = self.grid.move_cursor(self.cursor, movement);
        self.reveal_cursor();
    }

    /// Scrolls just enough to show the focused swatch.
    fn reveal_cursor(&mut self) {
        let height = usize::from(self.viewport.height);
        self.scroll = match self.cursor {
            Some(id) => self.grid.scroll_to_show(id, self.scroll, height),
            None => self.scroll.min(self.grid.max_scroll(height)),
        };
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.grid.max_scroll(usize::from(self.viewport.height));
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }

    /// Unfocuses the grid. A second Esc clears an active search.
    fn blur(&mut self) {
        if self.cursor.is_some() {
            self.cursor = None;
        } else if self.filter.is_active() {
            self.input_buffer.clear();
            self.apply_filter();
        }
    }

    fn click(&mut self, column: u16, row: u16) {
        let inside = column >= self.viewport.x
            && column < self.viewport.right()
            && row >= self.viewport.y
            && row < self.viewport.bottom();
        if !inside {
            return;
        }
        let x = column - self.viewport.x;
        let y = usize::from(row - self.viewport.y) + self.scroll;
        if let Some(id) = self.grid.hit_test(x, y) {
            self.cursor = Some(id);
            self.reveal_cursor();
            self.copy_focused();
        }
    }

    /// Returns the focused swatch (if any).
    pub fn focused_swatch(&self) -> Option<&Swatch> {
        self.cursor.and_then(|id| self.palette.swatch(id))
    }

    /// The group of the focused swatch, or else the section scrolled to.
    pub fn active_group(&self) -> Option<usize> {
        self.focused_swatch()
            .map(|s| s.group)
            .or_else(|| self.grid.section_at(self.scroll))
    }

    // --- Formats ---

    fn set_format(&mut self, format: DisplayFormat) {
        self.formats.set_format(format);
        self.refresh_labels();
    }

    /// Re-renders swatch labels when the format register changed.
    fn refresh_labels(&mut self) {
        if !self.format_rx.has_changed().unwrap_or(false) {
            return;
        }
        let format = *self.format_rx.borrow_and_update();
        self.labels = render_labels(&self.palette, format);
    }

    // --- Search ---

    fn start_search(&mut self) {
        self.input_buffer = self.filter.query().to_string();
        self.current_view = View::Search;
    }

    /// Appends a character to the input buffer.
    pub fn input_char(&mut self, c: char) {
        self.input_buffer.push(c);
    }

    /// Removes the last character from the input buffer.
    pub fn input_backspace(&mut self) {
        self.input_buffer.pop();
    }

    /// Re-filters the grid from the input buffer.
    fn apply_filter(&mut self) {
        self.filter = Filter::apply(&self.palette, &self.input_buffer);
        self.grid = GridLayout::compute(&self.palette, &self.filter, self.viewport.width);

        let cursor_visible = self.cursor.is_some_and(|id| self.filter.is_swatch_visible(id));
        if !cursor_visible {
            self.cursor = self.grid.first();
        }
        self.scroll = 0;
        self.reveal_cursor();

        if self.filter.is_active() {
            let text = format!(
                "Showing {} of {} colors",
                self.filter.visible_count(),
                self.palette.len()
            );
            self.set_status(&text, false);
        } else {
            self.status = None;
        }
    }

    // --- Export menu ---

    fn open_export_menu(&mut self) {
        self.export_state.select(Some(0));
        self.current_view = View::Export;
    }

    fn select_previous_export(&mut self) {
        let len = ExportFormat::ALL.len();
        let current = self.export_state.selected().unwrap_or(0);
        let new = if current == 0 { len - 1 } else { current - 1 };
        self.export_state.select(Some(new));
    }

    fn select_next_export(&mut self) {
        let len = ExportFormat::ALL.len();
        let current = self.export_state.selected().unwrap_or(0);
        let new = if current >= len - 1 { 0 } else { current + 1 };
        self.export_state.select(Some(new));
    }

    /// Returns the highlighted export format.
    pub fn selected_export(&self) -> ExportFormat {
        let idx = self.export_state.selected().unwrap_or(0);
        ExportFormat::ALL[idx.min(ExportFormat::ALL.len() - 1)]
    }

    fn export_selected(&mut self) {
        let format = self.selected_export();
        match ExportColors::collect(&self.palette).render(format) {
            Ok(text) => {
                tracing::info!(format = format.label(), bytes = text.len(), "exporting palette");
                self.spawn_copy(text, format.copied_message(), true);
            }
            Err(e) => {
                tracing::error!(error = %e, format = format.label(), "export failed");
                self.set_status(&format!("Export failed: {e}"), true);
            }
        }
    }

    // --- Copying ---

    fn copy_focused(&mut self) {
        let Some(swatch) = self.focused_swatch() else {
            return;
        };
        let value = self.formats.render(&swatch.hex, swatch.class_label.as_deref());
        tracing::debug!(hex = %swatch.hex, format = %self.formats.format(), "copying swatch");
        let message = format!("Copied: {value}");
        self.spawn_copy(value, message, false);
    }

    /// Copies every swatch of the active group, ignoring the search filter.
    fn copy_row(&mut self) {
        let Some(group) = self.active_group().and_then(|g| self.palette.groups.get(g)) else {
            return;
        };
        let (text, message) = row_clipboard_text(group, &self.formats);
        self.spawn_copy(text, message, false);
    }

    fn spawn_copy(&self, text: String, message: String, closes_export_menu: bool) {
        clipboard::spawn_copy(
            Arc::clone(&self.clipboard),
            text,
            message,
            closes_export_menu,
            self.copy_tx.clone(),
        );
    }

    fn drain_completions(&mut self, now: Instant) {
        while let Ok(outcome) = self.copy_rx.try_recv() {
            self.apply_completion(outcome, now);
        }
    }

    /// Shows the confirmation for a finished copy. Failures stay silent.
    fn apply_completion(&mut self, outcome: CopyOutcome, now: Instant) {
        match outcome.result {
            Ok(()) => {
                self.toast.show(outcome.message, now);
                if outcome.closes_export_menu && self.current_view == View::Export {
                    self.current_view = View::Palette;
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
            }
        }
    }

    // --- Theme ---

    fn toggle_theme(&mut self) {
        let theme = self.theme.toggle();
        self.set_status(&format!("Switched to {theme} theme"), false);
    }

    // --- Status message helpers ---

    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
    }
}

/// Renders every swatch in `format`, indexed by swatch id.
fn render_labels(palette: &Palette, format: DisplayFormat) -> Vec<String> {
    palette
        .swatches()
        .map(|s| format::render_as(format, &s.hex, s.class_label.as_deref()))
        .collect()
}

/// Clipboard text and confirmation for copying a whole group.
///
/// Class names go one per line, ready to paste into markup; other formats are
/// comma separated.
fn row_clipboard_text(group: &PaletteGroup, formats: &FormatRegistry) -> (String, String) {
    let values: Vec<String> = group
        .swatches
        .iter()
        .map(|s| formats.render(&s.hex, s.class_label.as_deref()))
        .collect();
    let count = values.len();

    if formats.format() == DisplayFormat::Class {
        (values.join("\n"), format!("Copied {count} Tailwind classes"))
    } else {
        (values.join(", "), format!("Copied {count} colors"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::constants::layout::SWATCH_WIDTH;
    use crate::prefs::MemoryPreferences;

    const SAMPLE: &str = r##"
name = "Sample"

[[groups]]
title = "Blue"
swatches = [
    { shade = "100", hex = "#DBEAFE", class = "bg-blue-100" },
    { shade = "500", hex = "#3B82F6", class = "bg-blue-500" },
    { shade = "900", hex = "#1E3A8A", class = "bg-blue-900" },
]

[[groups]]
title = "Accents"
swatches = [
    { shade = "primary", hex = "#6366F1" },
]
"##;

    fn test_app_with(clipboard: Arc<dyn ClipboardSink>) -> App {
        let palette = Palette::from_toml_str(SAMPLE).unwrap();
        let theme = ThemeController::load(Box::new(MemoryPreferences::default()), false);
        let mut app = App::new(palette, DisplayFormat::Hex, theme, clipboard);
        app.resize(Rect::new(2, 6, SWATCH_WIDTH * 3, 20));
        app
    }

    fn test_app() -> (App, Arc<MemoryClipboard>) {
        let clipboard = Arc::new(MemoryClipboard::default());
        (test_app_with(clipboard.clone()), clipboard)
    }

    /// Waits for the next clipboard write to finish and applies it.
    async fn settle(app: &mut App) {
        let outcome = app.copy_rx.recv().await.unwrap();
        app.apply_completion(outcome, Instant::now());
    }

    #[tokio::test]
    async fn test_starts_focused_on_first_swatch() {
        let (app, _) = test_app();
        assert_eq!(app.cursor, Some(0));
        assert_eq!(app.current_view, View::Palette);
        assert_eq!(app.badges.len(), 4);
        assert_eq!(app.labels[1], "#3B82F6");
    }

    #[tokio::test]
    async fn test_copy_focused_swatch() {
        let (mut app, clipboard) = test_app();
        app.handle_event(Action::Right).await.unwrap();
        app.handle_event(Action::Copy).await.unwrap();
        settle(&mut app).await;

        assert_eq!(clipboard.writes(), vec!["#3B82F6"]);
        assert_eq!(app.toast.message(), Some("Copied: #3B82F6"));
    }

    #[tokio::test]
    async fn test_copy_uses_active_format() {
        let (mut app, clipboard) = test_app();
        app.handle_event(Action::SetFormat(DisplayFormat::Rgb)).await.unwrap();
        app.handle_event(Action::Enter).await.unwrap();
        settle(&mut app).await;

        assert_eq!(clipboard.writes(), vec!["rgb(219,234,254)"]);
        assert_eq!(app.labels[0], "rgb(219,234,254)");
    }

    #[tokio::test]
    async fn test_class_format_falls_back_to_hex_without_label() {
        let (mut app, clipboard) = test_app();
        app.handle_event(Action::SetFormat(DisplayFormat::Class)).await.unwrap();
        app.handle_event(Action::Bottom).await.unwrap();
        app.handle_event(Action::Copy).await.unwrap();
        settle(&mut app).await;

        assert_eq!(clipboard.writes(), vec!["#6366F1"]);
        assert_eq!(app.labels[0], "bg-blue-100");
        assert_eq!(app.labels[3], "#6366F1");
    }

    #[tokio::test]
    async fn test_cycle_format_updates_labels() {
        let (mut app, _) = test_app();
        app.handle_event(Action::CycleFormat).await.unwrap();
        app.handle_event(Action::CycleFormat).await.unwrap();
        assert_eq!(app.formats.format(), DisplayFormat::Hsl);
        assert_eq!(app.labels[1], "hsl(217,91%,60%)");
    }

    #[tokio::test]
    async fn test_copy_row_joins_with_commas() {
        let (mut app, clipboard) = test_app();
        app.handle_event(Action::CopyRow).await.unwrap();
        settle(&mut app).await;

        assert_eq!(clipboard.writes(), vec!["#DBEAFE, #3B82F6, #1E3A8A"]);
        assert_eq!(app.toast.message(), Some("Copied 3 colors"));
    }

    #[tokio::test]
    async fn test_copy_row_of_classes_uses_newlines() {
        let (mut app, clipboard) = test_app();
        app.handle_event(Action::SetFormat(DisplayFormat::Class)).await.unwrap();
        app.handle_event(Action::CopyRow).await.unwrap();
        settle(&mut app).await;

        assert_eq!(
            clipboard.writes(),
            vec!["bg-blue-100\nbg-blue-500\nbg-blue-900"]
        );
        assert_eq!(app.toast.message(), Some("Copied 3 Tailwind classes"));
    }

    #[tokio::test]
    async fn test_copy_row_ignores_search_filter() {
        let (mut app, clipboard) = test_app();
        app.handle_event(Action::Search).await.unwrap();
        for c in "3b82".chars() {
            app.handle_event(Action::Char(c)).await.unwrap();
        }
        app.handle_event(Action::Enter).await.unwrap();
        app.handle_event(Action::CopyRow).await.unwrap();
        settle(&mut app).await;

        assert_eq!(clipboard.writes(), vec!["#DBEAFE, #3B82F6, #1E3A8A"]);
    }

    #[tokio::test]
    async fn test_failed_copy_shows_nothing() {
        let mut app = test_app_with(Arc::new(MemoryClipboard::failing()));
        app.handle_event(Action::Copy).await.unwrap();
        settle(&mut app).await;

        assert_eq!(app.toast.message(), None);
        assert!(app.status.is_none());
    }

    #[tokio::test]
    async fn test_copy_without_focus_does_nothing() {
        let (mut app, _) = test_app();
        app.handle_event(Action::Back).await.unwrap();
        assert_eq!(app.cursor, None);
        app.handle_event(Action::Copy).await.unwrap();
        assert!(app.copy_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_search_filters_live_and_moves_focus() {
        let (mut app, _) = test_app();
        app.handle_event(Action::Search).await.unwrap();
        assert_eq!(app.current_view, View::Search);

        for c in "acc".chars() {
            app.handle_event(Action::Char(c)).await.unwrap();
        }
        assert_eq!(app.filter.visible_count(), 1);
        assert_eq!(app.cursor, Some(3));
        assert_eq!(app.status.as_ref().unwrap().text, "Showing 1 of 4 colors");

        app.handle_event(Action::Enter).await.unwrap();
        assert_eq!(app.current_view, View::Palette);
        assert_eq!(app.filter.query(), "acc");
    }

    #[tokio::test]
    async fn test_escape_cancels_search() {
        let (mut app, _) = test_app();
        app.handle_event(Action::Search).await.unwrap();
        app.handle_event(Action::Char('z')).await.unwrap();
        assert_eq!(app.filter.visible_count(), 0);
        assert_eq!(app.cursor, None);

        app.handle_event(Action::Back).await.unwrap();
        assert_eq!(app.current_view, View::Palette);
        assert!(!app.filter.is_active());
        assert_eq!(app.cursor, Some(0));
    }

    #[tokio::test]
    async fn test_second_escape_clears_search() {
        let (mut app, _) = test_app();
        app.handle_event(Action::Search).await.unwrap();
        app.handle_event(Action::Char('b')).await.unwrap();
        app.handle_event(Action::Enter).await.unwrap();
        assert!(app.filter.is_active());

        app.handle_event(Action::Back).await.unwrap();
        assert!(app.filter.is_active());
        app.handle_event(Action::Back).await.unwrap();
        assert!(!app.filter.is_active());
    }

    #[tokio::test]
    async fn test_search_keys_are_text() {
        let (mut app, _) = test_app();
        app.handle_event(Action::Search).await.unwrap();
        app.handle_event(Action::Help).await.unwrap();
        assert!(!app.show_help);
        assert_eq!(app.current_view, View::Search);
    }

    #[tokio::test]
    async fn test_export_copies_and_closes_menu() {
        let (mut app, clipboard) = test_app();
        app.handle_event(Action::Export).await.unwrap();
        assert_eq!(app.current_view, View::Export);
        app.handle_event(Action::Down).await.unwrap();
        assert_eq!(app.selected_export(), ExportFormat::Json);

        app.handle_event(Action::Enter).await.unwrap();
        settle(&mut app).await;

        let writes = clipboard.writes();
        assert!(writes[0].starts_with("{\n  \"blue\": {\n    \"100\": \"#DBEAFE\""));
        assert_eq!(app.current_view, View::Palette);
        assert_eq!(app.toast.message(), Some("Exported as JSON — copied!"));
    }

    #[tokio::test]
    async fn test_failed_export_keeps_menu_open() {
        let mut app = test_app_with(Arc::new(MemoryClipboard::failing()));
        app.handle_event(Action::Export).await.unwrap();
        app.handle_event(Action::Enter).await.unwrap();
        settle(&mut app).await;

        assert_eq!(app.current_view, View::Export);
        assert_eq!(app.toast.message(), None);
    }

    #[tokio::test]
    async fn test_export_menu_wraps_and_closes() {
        let (mut app, _) = test_app();
        app.handle_event(Action::Export).await.unwrap();
        app.handle_event(Action::Up).await.unwrap();
        assert_eq!(app.selected_export(), ExportFormat::Tailwind);
        app.handle_event(Action::Back).await.unwrap();
        assert_eq!(app.current_view, View::Palette);
    }

    #[tokio::test]
    async fn test_toggle_theme() {
        let (mut app, _) = test_app();
        assert_eq!(app.theme(), Theme::Light);
        app.handle_event(Action::ToggleTheme).await.unwrap();
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(app.status.as_ref().unwrap().text, "Switched to dark theme");
    }

    #[tokio::test]
    async fn test_click_focuses_and_copies() {
        let (mut app, clipboard) = test_app();
        // Second swatch of Blue: canvas (18..36, 1..5), viewport origin (2, 6).
        app.handle_event(Action::Click { column: 22, row: 8 }).await.unwrap();
        settle(&mut app).await;

        assert_eq!(app.cursor, Some(1));
        assert_eq!(clipboard.writes(), vec!["#3B82F6"]);
    }

    #[tokio::test]
    async fn test_click_outside_grid_is_ignored() {
        let (mut app, _) = test_app();
        app.handle_event(Action::Click { column: 0, row: 0 }).await.unwrap();
        // Title line of the first group.
        app.handle_event(Action::Click { column: 3, row: 6 }).await.unwrap();
        assert_eq!(app.cursor, Some(0));
        assert!(app.copy_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_navigation_and_active_group() {
        let (mut app, _) = test_app();
        app.handle_event(Action::Right).await.unwrap();
        app.handle_event(Action::Right).await.unwrap();
        app.handle_event(Action::Right).await.unwrap();
        assert_eq!(app.cursor, Some(3));
        assert_eq!(app.active_group(), Some(1));

        app.handle_event(Action::Top).await.unwrap();
        assert_eq!(app.cursor, Some(0));
        assert_eq!(app.active_group(), Some(0));
    }

    #[tokio::test]
    async fn test_resize_keeps_focus_in_view() {
        let (mut app, _) = test_app();
        app.handle_event(Action::Bottom).await.unwrap();
        app.resize(Rect::new(2, 6, SWATCH_WIDTH, 5));
        assert_eq!(app.grid.columns, 1);

        let cell = *app.grid.cell(3).unwrap();
        assert!(cell.y >= app.scroll);
        assert!(cell.y + 4 <= app.scroll + 5);
    }

    #[tokio::test]
    async fn test_help_toggles_and_any_key_closes() {
        let (mut app, _) = test_app();
        app.handle_event(Action::Help).await.unwrap();
        assert!(app.show_help);
        assert!(!app.handle_event(Action::Quit).await.unwrap());
        assert!(!app.show_help);
    }

    #[tokio::test]
    async fn test_quit() {
        let (mut app, _) = test_app();
        assert!(app.handle_event(Action::Quit).await.unwrap());
    }

    #[tokio::test]
    async fn test_tick_expires_toast() {
        let (mut app, _) = test_app();
        let start = Instant::now();
        app.toast.show("hello", start);
        app.tick(start + std::time::Duration::from_secs(5));
        assert_eq!(app.toast.message(), None);
    }
}
