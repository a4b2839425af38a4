use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Top-level layout of the optional configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Completion endpoint settings.
    #[serde(default)]
    pub api: CompletionApiConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.api.validate()
    }
}

/// Completion endpoint configuration.
///
/// Holds no API key; the key is entered per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionApiConfig {
    /// Chat-completion endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds. `None` keeps the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for CompletionApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: None }
    }
}

impl CompletionApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == Some(0) {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if !matches!(self.api_url.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "api_url must use http or https, got '{}'",
                self.api_url.scheme()
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions").expect("Default API URL must be valid")
}
