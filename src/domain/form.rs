//! Session-scoped form state and the events that change it.

use std::fmt;

use crate::domain::{AppError, EnhancementRequest, ModelName};

pub const EXAMPLE_ROLE: &str = "Financial Advisor";
pub const EXAMPLE_CONTEXT: &str =
    "I'm planning for retirement in 15 years and want to optimize my investments.";
pub const EXAMPLE_TASK: &str =
    "Suggest an investment strategy based on my risk tolerance and timeline.";

pub const MISSING_API_KEY_MESSAGE: &str =
    "Please enter your OpenAI API key (choose 'Enter API key' from the menu).";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in at least the Role and Task fields.";

/// Values held by the form for the lifetime of one interactive session.
///
/// The whole state travels through the controller by value; nothing here is
/// written anywhere.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormSession {
    pub role: String,
    pub context: String,
    pub task: String,
    pub api_key: String,
    pub model: ModelName,
    /// Text of the last successful enhancement, available for copying.
    pub last_result: Option<String>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a field-editing event. Returns `false` for events that are not
    /// plain edits (submit, copy).
    pub fn apply_edit(&mut self, event: &FormEvent) -> bool {
        match event {
            FormEvent::EditRole(value) => self.role = value.clone(),
            FormEvent::EditContext(value) => self.context = value.clone(),
            FormEvent::EditTask(value) => self.task = value.clone(),
            FormEvent::EditApiKey(value) => self.api_key = value.clone(),
            FormEvent::SelectModel(model) => self.model = *model,
            FormEvent::LoadExample => {
                self.role = EXAMPLE_ROLE.to_string();
                self.context = EXAMPLE_CONTEXT.to_string();
                self.task = EXAMPLE_TASK.to_string();
            }
            FormEvent::Submit | FormEvent::CopyResult => return false,
        }
        true
    }

    /// Presence checks performed before any network call.
    ///
    /// A missing key is reported ahead of missing fields.
    pub fn validate(&self) -> Result<EnhancementRequest, AppError> {
        if is_blank(&self.api_key) {
            return Err(AppError::Configuration(MISSING_API_KEY_MESSAGE.to_string()));
        }
        if is_blank(&self.role) || is_blank(&self.task) {
            return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }
        Ok(EnhancementRequest::new(
            self.role.clone(),
            self.context.clone(),
            self.task.clone(),
            self.api_key.clone(),
            self.model,
        ))
    }

    pub fn has_api_key(&self) -> bool {
        !is_blank(&self.api_key)
    }
}

impl fmt::Debug for FormSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormSession")
            .field("role", &self.role)
            .field("context", &self.context)
            .field("task", &self.task)
            .field("api_key", &if self.has_api_key() { "[REDACTED]" } else { "" })
            .field("model", &self.model)
            .field("last_result", &self.last_result)
            .finish()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// User actions on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    EditRole(String),
    EditContext(String),
    EditTask(String),
    EditApiKey(String),
    SelectModel(ModelName),
    /// Pre-fill role, context, and task with the fixed sample values.
    LoadExample,
    Submit,
    /// Copy the last enhanced prompt to the clipboard.
    CopyResult,
}

/// Result area of a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    /// Recoverable input problem.
    Warning(String),
    /// Missing credential or failed call.
    Error(String),
    /// Enhanced prompt ready to copy.
    Success(String),
    /// Short confirmation, e.g. after copying.
    Notice(String),
}

impl Panel {
    pub fn is_warning(&self) -> bool {
        matches!(self, Panel::Warning(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Panel::Error(_))
    }
}

/// Everything one render cycle shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Form values after the event was applied.
    pub session: FormSession,
    pub panel: Option<Panel>,
}
