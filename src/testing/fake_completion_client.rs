use std::sync::{Arc, Mutex};

use crate::domain::{AppError, CompletionErrorKind};
use crate::ports::{CompletionClient, CompletionClientFactory, CompletionRequest};

#[derive(Clone)]
enum FakeReply {
    Text(String),
    Failure(CompletionErrorKind, String),
}

/// Completion client that records requests and answers with a canned reply.
#[derive(Clone)]
pub struct FakeCompletionClient {
    pub sent_requests: Arc<Mutex<Vec<CompletionRequest>>>,
    pub api_keys: Arc<Mutex<Vec<String>>>,
    reply: FakeReply,
}

impl FakeCompletionClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(FakeReply::Text(text.into()))
    }

    pub fn failing(kind: CompletionErrorKind, message: impl Into<String>) -> Self {
        Self::with_reply(FakeReply::Failure(kind, message.into()))
    }

    fn with_reply(reply: FakeReply) -> Self {
        Self {
            sent_requests: Arc::new(Mutex::new(vec![])),
            api_keys: Arc::new(Mutex::new(vec![])),
            reply,
        }
    }

    pub fn get_sent_requests(&self) -> Vec<CompletionRequest> {
        self.sent_requests.lock().unwrap().clone()
    }

    pub fn get_api_keys(&self) -> Vec<String> {
        self.api_keys.lock().unwrap().clone()
    }
}

impl CompletionClient for FakeCompletionClient {
    fn complete(&self, request: CompletionRequest) -> Result<String, AppError> {
        self.sent_requests.lock().unwrap().push(request);
        match &self.reply {
            FakeReply::Text(text) => Ok(text.clone()),
            FakeReply::Failure(kind, message) => {
                Err(AppError::completion(*kind, message.clone(), None))
            }
        }
    }
}

impl CompletionClientFactory for FakeCompletionClient {
    fn create(&self, api_key: &str) -> Result<Box<dyn CompletionClient>, AppError> {
        self.api_keys.lock().unwrap().push(api_key.to_string());
        Ok(Box::new(self.clone()))
    }
}
