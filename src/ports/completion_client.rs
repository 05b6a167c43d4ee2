//! Chat-completion client port definition.

use serde::Serialize;

use crate::domain::AppError;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    /// Convert to API string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One entry of the conversation sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }
}

/// Request for a single chat completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    /// Ordered conversation.
    pub messages: Vec<ChatMessage>,
    /// Hosted model identifier.
    pub model: String,
}

/// Port for chat-completion operations.
pub trait CompletionClient {
    /// Return the text of the first completion choice.
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError>;
}

impl<C: CompletionClient + ?Sized> CompletionClient for &C {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        (**self).complete(request)
    }
}

impl<C: CompletionClient + ?Sized> CompletionClient for Box<C> {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        (**self).complete(request)
    }
}
