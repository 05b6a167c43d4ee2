use std::io;

use thiserror::Error;

use crate::domain::prompt::PromptError;

/// Library-wide error type for projexbuzz operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// A required post field was empty.
    #[error("Please fill in all fields: '{field}' is empty")]
    MissingField { field: String },

    /// Prompt rendering failed.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Interactive input failed.
    #[error("Input error: {0}")]
    Input(String),

    /// The completion service could not be reached.
    #[error("{0}")]
    Transport(String),

    /// The completion service rejected the credential.
    #[error("Authentication failed ({status}): {message}")]
    Authentication { status: u16, message: String },

    /// The completion service rejected the request for quota reasons.
    #[error("Rate limited (429): {0}")]
    RateLimited(String),

    /// Any other non-success response.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A success response that did not carry a completion.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether the error came from the outbound completion call.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            AppError::Transport(_)
                | AppError::Authentication { .. }
                | AppError::RateLimited(_)
                | AppError::Api { .. }
                | AppError::MalformedResponse(_)
        )
    }
}
