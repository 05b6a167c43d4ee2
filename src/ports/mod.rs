mod completion_client;

pub use completion_client::{ChatMessage, ChatRole, CompletionClient, CompletionRequest};
