//! Loading of the optional API configuration file.

use std::fs;
use std::path::Path;

use crate::domain::{AppConfig, AppError};

/// Load configuration from `path`, or defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let Some(path) = path else {
        return Ok(AppConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|e| {
        AppError::config_error(format!("Failed to read config {}: {}", path.display(), e))
    })?;
    let config = parse_config_content(&content)?;
    tracing::debug!(path = %path.display(), api_url = %config.api.api_url, "loaded configuration");
    Ok(config)
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
