pub mod clipboard_arboard;
pub mod completion_client_http;

pub use clipboard_arboard::ArboardClipboard;
pub use completion_client_http::{HttpCompletionClient, HttpCompletionClientFactory};
