//! Transient notifications.
//!
//! A toast is visible for a fixed window, then plays a short exit phase before
//! it disappears. Showing a new toast replaces the current one and restarts
//! the clock.

use std::time::{Duration, Instant};

use crate::constants::toast::{EXIT_DURATION, VISIBLE_DURATION};

/// Visible and exit durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    pub visible: Duration,
    pub exit: Duration,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            visible: VISIBLE_DURATION,
            exit: EXIT_DURATION,
        }
    }
}

/// Display phase of the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Hidden,
    Visible,
    Exiting,
}

#[derive(Debug, Clone)]
pub struct Toast {
    timings: ToastTimings,
    phase: ToastPhase,
    message: String,
    /// When the current phase started.
    since: Option<Instant>,
}

impl Toast {
    pub fn new(timings: ToastTimings) -> Self {
        Self {
            timings,
            phase: ToastPhase::Hidden,
            message: String::new(),
            since: None,
        }
    }

    /// Shows `message`, replacing any pending toast.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = message.into();
        self.phase = ToastPhase::Visible;
        self.since = Some(now);
    }

    /// Advances the phase according to elapsed time.
    pub fn tick(&mut self, now: Instant) {
        let Some(since) = self.since else {
            return;
        };
        let elapsed = now.saturating_duration_since(since);

        match self.phase {
            ToastPhase::Visible if elapsed >= self.timings.visible => {
                let exit_start = since + self.timings.visible;
                self.phase = ToastPhase::Exiting;
                self.since = Some(exit_start);
                // A long stall can skip the exit phase entirely.
                self.tick(now);
            }
            ToastPhase::Exiting if elapsed >= self.timings.exit => {
                self.phase = ToastPhase::Hidden;
                self.since = None;
                self.message.clear();
            }
            _ => {}
        }
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// The message while the toast is on screen.
    pub fn message(&self) -> Option<&str> {
        match self.phase {
            ToastPhase::Hidden => None,
            _ => Some(&self.message),
        }
    }
}

impl Default for Toast {
    fn default() -> Self {
        Self::new(ToastTimings::default())
    }
}
