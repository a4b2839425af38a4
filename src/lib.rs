//! prompt-enhancer: turn a role, context, and task into a more effective AI prompt.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::commands::enhance as enhance_command;
use services::HttpCompletionClientFactory;

pub use app::form::handle as handle_form_event;
pub use domain::{
    AppConfig, AppError, CompletionApiConfig, CompletionErrorKind, ERROR_PREFIX,
    EnhancementOutcome, EnhancementRequest, FormEvent, FormSession, ModelName, Page, Panel,
};

/// Enhance a prompt against the default OpenAI endpoint.
///
/// Failures come back as text starting with [`ERROR_PREFIX`]; this function
/// never returns an error or panics on a failed call.
pub fn enhance(role: &str, context: &str, task: &str, api_key: &str, model: ModelName) -> String {
    enhance_with_config(role, context, task, api_key, model, &CompletionApiConfig::default())
}

/// Same as [`enhance`] against a custom endpoint configuration.
pub fn enhance_with_config(
    role: &str,
    context: &str,
    task: &str,
    api_key: &str,
    model: ModelName,
    config: &CompletionApiConfig,
) -> String {
    let request = EnhancementRequest::new(role, context, task, api_key, model);
    enhance_request(&request, config).into_text()
}

/// Enhance a prompt and return the typed outcome.
pub fn enhance_request(
    request: &EnhancementRequest,
    config: &CompletionApiConfig,
) -> EnhancementOutcome {
    let factory = HttpCompletionClientFactory::new(config.clone());
    enhance_command::execute(request, &factory)
}
