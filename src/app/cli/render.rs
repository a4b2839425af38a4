//! Terminal rendering of form pages.

use crate::domain::{FormSession, ModelName, Panel};

const RULE: &str = "---";

pub(super) fn intro() -> String {
    [
        "AI Prompt Enhancer",
        "",
        "This app takes your basic prompt elements and enhances them into a more effective prompt",
        "for AI models. Fill in the fields below and choose 'Enhance prompt' to generate an",
        "optimized version.",
        "",
        "Note: Your API key is not stored and is only used for this session.",
    ]
    .join("\n")
}

pub(super) fn form(session: &FormSession) -> String {
    let key_state = if session.has_api_key() { "set" } else { "not set" };
    let mut lines = vec![
        RULE.to_string(),
        format!("API key : {}", key_state),
        format!("Model   : {}", model_label(session.model)),
        RULE.to_string(),
        format!("Role    : {}", display_field(&session.role)),
        format!("Context : {}", display_field(&session.context)),
        format!("Task    : {}", display_field(&session.task)),
    ];
    if session.last_result.is_some() {
        lines.push("(an enhanced prompt is ready to copy)".to_string());
    }
    lines.join("\n")
}

pub(super) fn panel(panel: &Panel) -> String {
    match panel {
        Panel::Warning(message) => format!("⚠️  {}", message),
        Panel::Error(message) => format!("❌ {}", message),
        Panel::Notice(message) => format!("📋 {}", message),
        Panel::Success(text) => format!(
            "✅ Prompt enhancement complete!\n\nEnhanced Prompt\n{}\n{}\n{}",
            RULE, text, RULE
        ),
    }
}

pub(super) fn usage() -> String {
    [
        "How to use this app:",
        "1. Enter your OpenAI API key",
        "2. Select an appropriate model (gpt-3.5-turbo is recommended for most users)",
        "3. Fill in the Role, Context, and Task fields",
        "4. Choose 'Enhance prompt' to generate an improved version",
        "5. Copy the enhanced prompt to use with your preferred AI model",
    ]
    .join("\n")
}

pub(super) fn model_label(model: ModelName) -> String {
    if model.requires_special_access() {
        format!("{} (requires special access)", model)
    } else {
        model.to_string()
    }
}

fn display_field(value: &str) -> &str {
    if value.trim().is_empty() { "(empty)" } else { value }
}
