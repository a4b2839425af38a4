pub mod configuration;
pub mod error;
pub mod form;
pub mod model;
pub mod outcome;
pub mod prompt;
pub mod request;

pub use configuration::{AppConfig, CompletionApiConfig};
pub use error::{AppError, CompletionErrorKind};
pub use form::{FormEvent, FormSession, Page, Panel};
pub use model::ModelName;
pub use outcome::{ERROR_PREFIX, EnhancementOutcome};
pub use prompt::build_prompt;
pub use request::EnhancementRequest;
