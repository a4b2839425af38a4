use std::fmt;

use crate::domain::ModelName;

/// Inputs of a single enhancement, created at submission time.
#[derive(Clone, PartialEq, Eq)]
pub struct EnhancementRequest {
    pub role: String,
    pub context: String,
    pub task: String,
    pub api_key: String,
    pub model: ModelName,
}

impl EnhancementRequest {
    pub fn new(
        role: impl Into<String>,
        context: impl Into<String>,
        task: impl Into<String>,
        api_key: impl Into<String>,
        model: ModelName,
    ) -> Self {
        Self {
            role: role.into(),
            context: context.into(),
            task: task.into(),
            api_key: api_key.into(),
            model,
        }
    }
}

impl fmt::Debug for EnhancementRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnhancementRequest")
            .field("role", &self.role)
            .field("context", &self.context)
            .field("task", &self.task)
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_key() {
        let request = EnhancementRequest::new("r", "c", "t", "sk-secret", ModelName::Gpt4);
        let rendered = format!("{:?}", request);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(rendered.contains("Gpt4"));
    }
}
