use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// In-memory clipboard that records every copy, or refuses all of them.
#[derive(Default)]
pub struct MockClipboard {
    writes: Vec<String>,
    failure: Option<String>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails with `message`.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self { writes: vec![], failure: Some(message.into()) }
    }

    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    pub fn last_write(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if let Some(message) = &self.failure {
            return Err(AppError::Clipboard(message.clone()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
