//! Enhance a role/context/task prompt through the completion endpoint.

use crate::domain::{EnhancementOutcome, EnhancementRequest};
use crate::ports::{CompletionClientFactory, CompletionRequest};

/// Run one enhancement round trip.
///
/// Never fails: every error, including client construction, is folded into
/// [`EnhancementOutcome::Failed`].
pub fn execute<F>(request: &EnhancementRequest, factory: &F) -> EnhancementOutcome
where
    F: CompletionClientFactory + ?Sized,
{
    let result = factory
        .create(&request.api_key)
        .and_then(|client| client.complete(CompletionRequest::for_enhancement(request)));
    let outcome = EnhancementOutcome::from(result);

    match &outcome {
        EnhancementOutcome::Enhanced(text) => {
            tracing::info!(model = %request.model, chars = text.len(), "prompt enhanced");
        }
        EnhancementOutcome::Failed { kind, message } => {
            tracing::warn!(
                model = %request.model,
                kind = kind.as_str(),
                %message,
                "enhancement failed"
            );
        }
    }

    outcome
}
