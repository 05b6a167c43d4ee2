use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{CompletionClient, CompletionRequest};

type FailureFactory = Arc<dyn Fn() -> AppError + Send + Sync>;

#[derive(Clone)]
enum Reply {
    Text(String),
    Failure(FailureFactory),
}

/// Completion client that records requests and answers with a canned reply.
#[derive(Clone)]
pub struct FakeCompletionClient {
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
    reply: Reply,
}

impl FakeCompletionClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), reply: Reply::Text(text.into()) }
    }

    /// Fail every call with a transport error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::failing_with(move || AppError::Transport(message.clone()))
    }

    pub fn failing_with(factory: impl Fn() -> AppError + Send + Sync + 'static) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), reply: Reply::Failure(Arc::new(factory)) }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl CompletionClient for FakeCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Failure(factory) => Err(factory()),
        }
    }
}
