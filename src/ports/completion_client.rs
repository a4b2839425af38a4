//! Chat-completion client port definition.

use crate::domain::prompt::{MAX_TOKENS, SYSTEM_PERSONA, TEMPERATURE};
use crate::domain::{AppError, EnhancementRequest, ModelName, build_prompt};

/// A single chat-completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Target model identifier.
    pub model: ModelName,
    /// System message content.
    pub system: String,
    /// User message content.
    pub user: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Response length cap in tokens.
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Build the enhancement call for the given inputs.
    pub fn for_enhancement(request: &EnhancementRequest) -> Self {
        Self {
            model: request.model,
            system: SYSTEM_PERSONA.to_string(),
            user: build_prompt(&request.role, &request.context, &request.task),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

/// Port for chat-completion operations.
pub trait CompletionClient {
    /// Send one request and return the first choice's text.
    fn complete(&self, request: CompletionRequest) -> Result<String, AppError>;
}

/// Factory for creating a client bound to one credential.
pub trait CompletionClientFactory {
    fn create(&self, api_key: &str) -> Result<Box<dyn CompletionClient>, AppError>;
}
