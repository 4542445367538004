//! Event handling module.
//!
//! This module handles keyboard, mouse and terminal events using crossterm.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::constants::POLL_TIMEOUT;
use crate::format::DisplayFormat;

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Move focus up one row
    Up,
    /// Move focus down one row
    Down,
    /// Move focus to the previous swatch
    Left,
    /// Move focus to the next swatch
    Right,
    /// Jump to the first swatch (back to top)
    Top,
    /// Jump to the last swatch
    Bottom,
    /// Copy the focused swatch / select / submit
    Enter,
    /// Copy the focused swatch
    Copy,
    /// Copy every swatch in the focused swatch's group
    CopyRow,
    /// Switch to the next display format
    CycleFormat,
    /// Switch to a specific display format
    SetFormat(DisplayFormat),
    /// Start typing a search query
    Search,
    /// Open the export menu
    Export,
    /// Switch between light and dark
    ToggleTheme,
    /// Show help
    Help,
    /// Unfocus / close / cancel
    Back,
    /// Character input (for text entry mode)
    Char(char),
    /// Backspace key (for text entry mode)
    Backspace,
    /// Left mouse button pressed at a screen position
    Click { column: u16, row: u16 },
    /// Mouse wheel up
    ScrollUp,
    /// Mouse wheel down
    ScrollDown,
}

/// Handles terminal events and converts them to application actions.
pub struct EventHandler {
    /// Timeout for polling events
    poll_timeout: Duration,
}

impl EventHandler {
    /// Creates a new event handler with default settings.
    pub fn new() -> Self {
        Self {
            poll_timeout: POLL_TIMEOUT,
        }
    }

    /// Polls for the next event and converts it to an Action.
    ///
    /// Returns Ok(None) if no event is available within the timeout.
    pub fn next(&self) -> io::Result<Option<Action>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                // Only process key press events (not releases)
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    return Ok(self.key_to_action(key_event));
                }
                Event::Mouse(mouse_event) => return Ok(self.mouse_to_action(mouse_event)),
                _ => {}
            }
        }
        Ok(None)
    }

    /// Polls for input-mode events (for text entry).
    ///
    /// This captures character input and special keys for text editing.
    pub fn next_input(&self) -> io::Result<Option<Action>> {
        if event::poll(self.poll_timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    return Ok(self.key_to_input_action(key_event));
                }
            }
        }
        Ok(None)
    }

    /// Converts a key event to an input-mode action.
    pub(crate) fn key_to_input_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Char(c)),
            _ => None,
        }
    }

    /// Converts a key event to an application action.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            // Navigation
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::Left),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::Right),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::Top),
            KeyCode::End | KeyCode::Char('G') => Some(Action::Bottom),
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Esc => Some(Action::Back),

            // Copying
            KeyCode::Char(' ') | KeyCode::Char('c') => Some(Action::Copy),
            KeyCode::Char('y') => Some(Action::CopyRow),

            // Formats
            KeyCode::Char('f') | KeyCode::Tab => Some(Action::CycleFormat),
            KeyCode::Char('1') => Some(Action::SetFormat(DisplayFormat::Hex)),
            KeyCode::Char('2') => Some(Action::SetFormat(DisplayFormat::Rgb)),
            KeyCode::Char('3') => Some(Action::SetFormat(DisplayFormat::Hsl)),
            KeyCode::Char('4') => Some(Action::SetFormat(DisplayFormat::Class)),

            // Everything else
            KeyCode::Char('/') => Some(Action::Search),
            KeyCode::Char('e') => Some(Action::Export),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Action::Help),

            // No matching action
            _ => None,
        }
    }

    /// Converts a mouse event to an application action.
    pub(crate) fn mouse_to_action(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn make_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_ctrl_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_mouse_event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_vim_navigation_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('h'))),
            Some(Action::Left)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('j'))),
            Some(Action::Down)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('k'))),
            Some(Action::Up)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('l'))),
            Some(Action::Right)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('g'))),
            Some(Action::Top)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('G'))),
            Some(Action::Bottom)
        );
    }

    #[test]
    fn test_arrow_navigation_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Up)),
            Some(Action::Up)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Down)),
            Some(Action::Down)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Left)),
            Some(Action::Left)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Right)),
            Some(Action::Right)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Home)),
            Some(Action::Top)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::End)),
            Some(Action::Bottom)
        );
    }

    #[test]
    fn test_quit_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            handler.key_to_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_copy_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Enter)),
            Some(Action::Enter)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char(' '))),
            Some(Action::Copy)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('c'))),
            Some(Action::Copy)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('y'))),
            Some(Action::CopyRow)
        );
    }

    #[test]
    fn test_format_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('f'))),
            Some(Action::CycleFormat)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Tab)),
            Some(Action::CycleFormat)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('3'))),
            Some(Action::SetFormat(DisplayFormat::Hsl))
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('4'))),
            Some(Action::SetFormat(DisplayFormat::Class))
        );
    }

    #[test]
    fn test_feature_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('/'))),
            Some(Action::Search)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('e'))),
            Some(Action::Export)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('t'))),
            Some(Action::ToggleTheme)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Esc)),
            Some(Action::Back)
        );
    }

    #[test]
    fn test_help_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('?'))),
            Some(Action::Help)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::F(1))),
            Some(Action::Help)
        );
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('z'))),
            None
        );
        assert_eq!(handler.key_to_action(make_key_event(KeyCode::F(12))), None);
    }

    #[test]
    fn test_input_mode_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Enter)),
            Some(Action::Enter)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Esc)),
            Some(Action::Back)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Backspace)),
            Some(Action::Backspace)
        );
        // Keys bound to commands are plain characters while typing
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Char('q'))
        );
    }

    #[test]
    fn test_input_mode_ctrl_c_quits() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_input_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_mouse_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.mouse_to_action(make_mouse_event(
                MouseEventKind::Down(MouseButton::Left),
                12,
                7
            )),
            Some(Action::Click { column: 12, row: 7 })
        );
        assert_eq!(
            handler.mouse_to_action(make_mouse_event(MouseEventKind::ScrollDown, 0, 0)),
            Some(Action::ScrollDown)
        );
        assert_eq!(
            handler.mouse_to_action(make_mouse_event(
                MouseEventKind::Down(MouseButton::Right),
                0,
                0
            )),
            None
        );
        assert_eq!(
            handler.mouse_to_action(make_mouse_event(MouseEventKind::Moved, 3, 3)),
            None
        );
    }
}
