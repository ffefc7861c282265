use crate::domain::AppError;

/// Port for writing to the system clipboard.
pub trait ClipboardWriter {
    /// Write text to the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;
}

/// Clipboard that accepts writes without touching the system clipboard.
///
/// Keeps the last written value so tests can assert the exact copied text.
#[derive(Debug, Default)]
pub struct NoopClipboard {
    last: Option<String>,
}

impl NoopClipboard {
    /// The most recently written text, if any.
    pub fn last_written(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl ClipboardWriter for NoopClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.last = Some(text.to_string());
        Ok(())
    }
}
