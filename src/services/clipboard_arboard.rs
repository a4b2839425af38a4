use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Arboard-based clipboard implementation.
///
/// The system clipboard is opened on first write, so a headless session only
/// fails when the user actually asks to copy.
#[derive(Default)]
pub struct ArboardClipboard {
    clipboard: Option<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?,
        };
        self.clipboard
            .insert(clipboard)
            .set_text(text)
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }
}
