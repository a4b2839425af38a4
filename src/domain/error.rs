use thiserror::Error;

/// Classification of completion endpoint failures.
///
/// The display text of every kind collapses to the same `Error: <message>`
/// shape; the kind is kept for logging and for callers that want to branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionErrorKind {
    /// The request never produced an HTTP response.
    Transport,
    /// The endpoint rejected the credential (401/403).
    Authentication,
    /// The endpoint throttled the request (429).
    RateLimited,
    /// A success status with a body we could not use.
    MalformedResponse,
    /// Any other non-success status.
    Api,
}

impl CompletionErrorKind {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => CompletionErrorKind::Authentication,
            429 => CompletionErrorKind::RateLimited,
            _ => CompletionErrorKind::Api,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionErrorKind::Transport => "transport",
            CompletionErrorKind::Authentication => "authentication",
            CompletionErrorKind::RateLimited => "rate_limited",
            CompletionErrorKind::MalformedResponse => "malformed_response",
            CompletionErrorKind::Api => "api",
        }
    }
}

/// Library-wide error type for prompt-enhancer operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required form field is missing.
    #[error("{0}")]
    Validation(String),

    /// Configuration or credential issue.
    #[error("{0}")]
    Configuration(String),

    /// The completion endpoint call failed.
    #[error("{message}")]
    CompletionApi { kind: CompletionErrorKind, message: String, status: Option<u16> },

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn completion<S: Into<String>>(
        kind: CompletionErrorKind,
        message: S,
        status: Option<u16>,
    ) -> Self {
        AppError::CompletionApi { kind, message: message.into(), status }
    }

    /// Kind of a completion failure, if this is one.
    pub fn completion_kind(&self) -> Option<CompletionErrorKind> {
        match self {
            AppError::CompletionApi { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
