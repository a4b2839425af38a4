use crate::domain::AppError;

/// Destination of the "copy enhanced prompt" action.
pub trait ClipboardWriter {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;
}
