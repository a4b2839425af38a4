mod clipboard_writer;
mod completion_client;

pub use clipboard_writer::ClipboardWriter;
pub use completion_client::{CompletionClient, CompletionClientFactory, CompletionRequest};
