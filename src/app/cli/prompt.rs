//! Interactive prompts that turn keystrokes into form events.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Password, Select};

use super::render::model_label;
use crate::domain::{AppError, FormEvent, FormSession, ModelName};

const ROLE_LABEL: &str = "Role (Who should the AI be?)";
const CONTEXT_LABEL: &str = "Context (Background information)";
const TASK_LABEL: &str = "Task (What should the AI do?)";

/// Entries of the action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MenuAction {
    EditRole,
    EditContext,
    EditTask,
    EnterApiKey,
    SelectModel,
    LoadExample,
    Submit,
    CopyResult,
    Quit,
}

impl MenuAction {
    fn label(&self) -> &'static str {
        match self {
            MenuAction::EditRole => "Edit role",
            MenuAction::EditContext => "Edit context",
            MenuAction::EditTask => "Edit task",
            MenuAction::EnterApiKey => "Enter API key",
            MenuAction::SelectModel => "Select model",
            MenuAction::LoadExample => "Load example",
            MenuAction::Submit => "Enhance prompt",
            MenuAction::CopyResult => "Copy enhanced prompt",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Actions offered for the current session, in menu order.
pub(super) fn menu_actions(session: &FormSession) -> Vec<MenuAction> {
    let mut actions = vec![
        MenuAction::EditRole,
        MenuAction::EditContext,
        MenuAction::EditTask,
        MenuAction::EnterApiKey,
        MenuAction::SelectModel,
        MenuAction::LoadExample,
        MenuAction::Submit,
    ];
    if session.last_result.is_some() {
        actions.push(MenuAction::CopyResult);
    }
    actions.push(MenuAction::Quit);
    actions
}

/// Ask for the next event. `None` means the user left the form.
pub(super) fn next_event(session: &FormSession) -> Result<Option<FormEvent>, AppError> {
    loop {
        let actions = menu_actions(session);
        let default = actions.iter().position(|action| *action == MenuAction::Submit).unwrap_or(0);
        let labels: Vec<&str> = actions.iter().map(MenuAction::label).collect();

        let result =
            Select::new().with_prompt("Action").items(&labels).default(default).interact_opt();
        let selection = cancellable(result, "action")?.flatten();

        let Some(action) = selection.map(|index| actions[index]) else {
            return Ok(None);
        };

        // A cancelled field prompt returns to the menu.
        let event = match action {
            MenuAction::EditRole => {
                prompt_text(ROLE_LABEL, &session.role)?.map(FormEvent::EditRole)
            }
            MenuAction::EditContext => {
                prompt_text(CONTEXT_LABEL, &session.context)?.map(FormEvent::EditContext)
            }
            MenuAction::EditTask => {
                prompt_text(TASK_LABEL, &session.task)?.map(FormEvent::EditTask)
            }
            MenuAction::EnterApiKey => prompt_api_key()?.map(FormEvent::EditApiKey),
            MenuAction::SelectModel => prompt_model(session.model)?.map(FormEvent::SelectModel),
            MenuAction::LoadExample => Some(FormEvent::LoadExample),
            MenuAction::Submit => Some(FormEvent::Submit),
            MenuAction::CopyResult => Some(FormEvent::CopyResult),
            MenuAction::Quit => return Ok(None),
        };

        if event.is_some() {
            return Ok(event);
        }
    }
}

fn prompt_text(label: &str, current: &str) -> Result<Option<String>, AppError> {
    let result = Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text();
    cancellable(result, label)
}

fn prompt_api_key() -> Result<Option<String>, AppError> {
    let result = Password::new()
        .with_prompt("Enter your OpenAI API Key")
        .allow_empty_password(true)
        .interact();
    cancellable(result, "API key")
}

fn prompt_model(current: ModelName) -> Result<Option<ModelName>, AppError> {
    let labels: Vec<String> = ModelName::ALL.iter().map(|model| model_label(*model)).collect();
    let default = ModelName::ALL.iter().position(|model| *model == current).unwrap_or(0);
    let result = Select::new()
        .with_prompt("Select OpenAI Model")
        .items(&labels)
        .default(default)
        .interact_opt();
    let selection = cancellable(result, "model")?.flatten();
    Ok(selection.map(|index| ModelName::ALL[index]))
}

fn cancellable<T>(result: Result<T, DialoguerError>, what: &str) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to read {}: {}", what, err))),
    }
}
