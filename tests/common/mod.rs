//! Shared testing utilities for prompt-enhancer integration tests.

#![allow(dead_code)]

use prompt_enhancer::AppError;
use prompt_enhancer::CompletionApiConfig;
use prompt_enhancer::ports::ClipboardWriter;
use url::Url;

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Configuration pointing at a mock completion server.
pub fn config_for(server: &mockito::Server) -> CompletionApiConfig {
    CompletionApiConfig {
        api_url: Url::parse(&format!("{}{}", server.url(), COMPLETIONS_PATH))
            .expect("mock server URL must be valid"),
        timeout_secs: Some(5),
    }
}

/// JSON body of a successful completion with one choice.
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ]
    })
    .to_string()
}

/// Clipboard that keeps the last written text in memory.
#[derive(Default)]
pub struct RecordingClipboard {
    pub text: Option<String>,
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.text = Some(text.to_string());
        Ok(())
    }
}
