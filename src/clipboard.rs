//! Clipboard access.
//!
//! Copies are fire-and-continue: each one runs on the blocking pool and
//! reports back over a channel, so the UI loop never waits on the clipboard.

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard not available: {0}")]
    Unavailable(String),
    #[error("failed to write to clipboard: {0}")]
    Write(String),
}

/// Something that can receive copied text.
pub trait ClipboardSink: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard.
///
/// A fresh `arboard::Clipboard` is opened per write. Holding one open for the
/// whole session is not reliable on every platform.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Keeps copied text in memory. Used when no system clipboard is wanted.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
    fail: bool,
}

impl MemoryClipboard {
    /// A clipboard whose writes always fail.
    pub fn failing() -> Self {
        Self {
            writes: Mutex::default(),
            fail: true,
        }
    }

    /// Everything written so far, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .map(|w| w.clone())
            .unwrap_or_default()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write("write refused".to_string()));
        }
        self.writes
            .lock()
            .map_err(|e| ClipboardError::Write(e.to_string()))?
            .push(text.to_string());
        Ok(())
    }
}

/// Result of one copy, delivered back to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    /// What to tell the user if the copy succeeded.
    pub message: String,
    /// Whether the export menu should close on success.
    pub closes_export_menu: bool,
    pub result: Result<(), ClipboardError>,
}

/// Spawns a clipboard write and reports the outcome on `tx`.
///
/// Must be called from within a tokio runtime.
pub fn spawn_copy(
    sink: Arc<dyn ClipboardSink>,
    text: String,
    message: String,
    closes_export_menu: bool,
    tx: mpsc::UnboundedSender<CopyOutcome>,
) {
    tokio::spawn(async move {
        let len = text.len();
        let result = match tokio::task::spawn_blocking(move || sink.write_text(&text)).await {
            Ok(result) => result,
            Err(e) => Err(ClipboardError::Write(e.to_string())),
        };
        tracing::debug!(bytes = len, ok = result.is_ok(), "clipboard write finished");
        // The receiver is gone only while the app shuts down.
        let _ = tx.send(CopyOutcome {
            message,
            closes_export_menu,
            result,
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_records_writes() {
        let clipboard = MemoryClipboard::default();
        clipboard.write_text("#3B82F6").unwrap();
        clipboard.write_text("rgb(59,130,246)").unwrap();
        assert_eq!(clipboard.writes(), vec!["#3B82F6", "rgb(59,130,246)"]);
    }

    #[test]
    fn test_failing_clipboard_rejects_writes() {
        let clipboard = MemoryClipboard::failing();
        assert!(clipboard.write_text("#000000").is_err());
        assert!(clipboard.writes().is_empty());
    }

    #[tokio::test]
    async fn test_spawn_copy_reports_success() {
        let sink = Arc::new(MemoryClipboard::default());
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_copy(sink.clone(), "#FFFFFF".into(), "Copied: #FFFFFF".into(), false, tx);

        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome.result, Ok(()));
        assert_eq!(outcome.message, "Copied: #FFFFFF");
        assert_eq!(sink.writes(), vec!["#FFFFFF"]);
    }

    #[tokio::test]
    async fn test_spawn_copy_reports_failure() {
        let sink = Arc::new(MemoryClipboard::failing());
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_copy(sink, "#FFFFFF".into(), "Copied: #FFFFFF".into(), true, tx);

        let outcome = rx.recv().await.unwrap();
        assert!(outcome.result.is_err());
        assert!(outcome.closes_export_menu);
    }
}
