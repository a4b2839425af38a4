//! Form controller: one event in, one page out.

use crate::app::commands::enhance;
use crate::domain::{AppError, EnhancementOutcome, FormEvent, FormSession, Page, Panel};
use crate::ports::{ClipboardWriter, CompletionClientFactory};

pub const COPIED_MESSAGE: &str = "Prompt copied to clipboard!";
pub const NOTHING_TO_COPY_MESSAGE: &str = "Nothing to copy yet. Enhance a prompt first.";

/// Apply `event` to `session` and produce the next page.
///
/// The session is taken and handed back inside the page; the controller keeps
/// nothing between calls.
pub fn handle<F, C>(
    mut session: FormSession,
    event: FormEvent,
    factory: &F,
    clipboard: &mut C,
) -> Page
where
    F: CompletionClientFactory + ?Sized,
    C: ClipboardWriter + ?Sized,
{
    if session.apply_edit(&event) {
        return Page { session, panel: None };
    }

    let panel = match event {
        FormEvent::Submit => submit(&mut session, factory),
        FormEvent::CopyResult => copy_result(&session, clipboard),
        _ => None,
    };

    Page { session, panel }
}

fn submit<F>(session: &mut FormSession, factory: &F) -> Option<Panel>
where
    F: CompletionClientFactory + ?Sized,
{
    let request = match session.validate() {
        Ok(request) => request,
        Err(AppError::Validation(message)) => return Some(Panel::Warning(message)),
        Err(err) => return Some(Panel::Error(err.to_string())),
    };

    session.last_result = None;
    match enhance::execute(&request, factory) {
        EnhancementOutcome::Enhanced(text) => {
            session.last_result = Some(text.clone());
            Some(Panel::Success(text))
        }
        failed => Some(Panel::Error(failed.into_text())),
    }
}

fn copy_result<C>(session: &FormSession, clipboard: &mut C) -> Option<Panel>
where
    C: ClipboardWriter + ?Sized,
{
    let Some(text) = session.last_result.as_deref() else {
        return Some(Panel::Warning(NOTHING_TO_COPY_MESSAGE.to_string()));
    };

    match clipboard.write_text(text) {
        Ok(()) => Some(Panel::Notice(COPIED_MESSAGE.to_string())),
        Err(err) => Some(Panel::Error(err.to_string())),
    }
}
