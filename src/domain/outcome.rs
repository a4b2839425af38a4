use crate::domain::{AppError, CompletionErrorKind};

/// Marker that opens every failed enhancement rendered as plain text.
pub const ERROR_PREFIX: &str = "Error: ";

/// Result of one enhancement round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnhancementOutcome {
    /// Text returned by the completion endpoint.
    Enhanced(String),
    /// The call failed; `message` is the underlying failure text.
    Failed { kind: CompletionErrorKind, message: String },
}

impl EnhancementOutcome {
    /// Render as a single string, prefixing failures with [`ERROR_PREFIX`].
    pub fn into_text(self) -> String {
        match self {
            EnhancementOutcome::Enhanced(text) => text,
            EnhancementOutcome::Failed { message, .. } => format!("{}{}", ERROR_PREFIX, message),
        }
    }
}

impl From<Result<String, AppError>> for EnhancementOutcome {
    fn from(result: Result<String, AppError>) -> Self {
        match result {
            Ok(text) => EnhancementOutcome::Enhanced(text),
            Err(err) => EnhancementOutcome::Failed {
                // Client construction failures happen before any response exists.
                kind: err.completion_kind().unwrap_or(CompletionErrorKind::Transport),
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_text_carries_prefix() {
        let outcome = EnhancementOutcome::Failed {
            kind: CompletionErrorKind::Authentication,
            message: "Incorrect API key provided".into(),
        };
        assert_eq!(outcome.into_text(), "Error: Incorrect API key provided");
    }

    #[test]
    fn success_text_is_untouched() {
        let outcome = EnhancementOutcome::Enhanced("Better prompt".into());
        assert_eq!(outcome.into_text(), "Better prompt");
    }

    #[test]
    fn completion_errors_keep_kind_and_bare_message() {
        let outcome: EnhancementOutcome = Err::<String, _>(AppError::completion(
            CompletionErrorKind::RateLimited,
            "Rate limited",
            Some(429),
        ))
        .into();
        assert_eq!(
            outcome,
            EnhancementOutcome::Failed {
                kind: CompletionErrorKind::RateLimited,
                message: "Rate limited".into()
            }
        );
    }

    #[test]
    fn non_api_errors_become_transport_failures() {
        let outcome: EnhancementOutcome =
            Err::<String, _>(AppError::config_error("bad client")).into();
        assert_eq!(
            outcome,
            EnhancementOutcome::Failed {
                kind: CompletionErrorKind::Transport,
                message: "bad client".into()
            }
        );
    }
}
