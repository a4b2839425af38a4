//! Chat-completion client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, CompletionApiConfig, CompletionErrorKind};
use crate::ports::{CompletionClient, CompletionClientFactory, CompletionRequest};

const DEFAULT_STATUS_MESSAGE: &str = "Completion request failed";

/// HTTP transport for the chat-completion endpoint.
///
/// One request per call, no retries.
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &CompletionApiConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| {
            AppError::completion(
                CompletionErrorKind::Transport,
                format!("Failed to create HTTP client: {}", e),
                None,
            )
        })?;

        Ok(Self { api_key, api_url: config.api_url.clone(), client })
    }

    fn send_request(&self, request: &ApiRequest) -> Result<String, AppError> {
        tracing::debug!(url = %self.api_url, model = %request.model, "sending completion request");

        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| {
                AppError::completion(
                    CompletionErrorKind::Transport,
                    format!("HTTP request failed: {}", e),
                    None,
                )
            })?;

        let status = response.status();
        let body_text = response.text().map_err(|e| {
            AppError::completion(
                CompletionErrorKind::Transport,
                format!("Failed to read response: {}", e),
                Some(status.as_u16()),
            )
        })?;
        tracing::debug!(status = status.as_u16(), bytes = body_text.len(), "completion response");

        if status.is_success() {
            let api_response: ApiResponse = serde_json::from_str(&body_text).map_err(|e| {
                AppError::completion(
                    CompletionErrorKind::MalformedResponse,
                    format!("Failed to parse response: {}", e),
                    Some(status.as_u16()),
                )
            })?;

            let choice = api_response.choices.into_iter().next().ok_or_else(|| {
                AppError::completion(
                    CompletionErrorKind::MalformedResponse,
                    "No completion choices in response",
                    Some(status.as_u16()),
                )
            })?;

            return choice.message.content.ok_or_else(|| {
                AppError::completion(
                    CompletionErrorKind::MalformedResponse,
                    "Completion choice has no content",
                    Some(status.as_u16()),
                )
            });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::completion(
            CompletionErrorKind::from_status(status.as_u16()),
            message,
            Some(status.as_u16()),
        ))
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    messages: Vec<ApiMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, request: CompletionRequest) -> Result<String, AppError> {
        let api_request = ApiRequest {
            model: request.model.as_str().to_string(),
            messages: vec![
                ApiMessage { role: "system", content: request.system },
                ApiMessage { role: "user", content: request.user },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        self.send_request(&api_request)
    }
}

/// Builds a fresh [`HttpCompletionClient`] for every credential.
#[derive(Debug, Clone, Default)]
pub struct HttpCompletionClientFactory {
    config: CompletionApiConfig,
}

impl HttpCompletionClientFactory {
    pub fn new(config: CompletionApiConfig) -> Self {
        Self { config }
    }
}

impl CompletionClientFactory for HttpCompletionClientFactory {
    fn create(&self, api_key: &str) -> Result<Box<dyn CompletionClient>, AppError> {
        Ok(Box::new(HttpCompletionClient::new(api_key.to_string(), &self.config)?))
    }
}
