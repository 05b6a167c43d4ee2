//! Chat-completion API client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, CompletionConfig};
use crate::ports::{CompletionClient, CompletionRequest};

/// HTTP client for an OpenAI-compatible chat-completion endpoint.
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &CompletionConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_key, api_url: config.api_url.clone(), client })
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    #[serde(default)]
    message: Option<ApiMessage>,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "completion endpoint responded");

        if status.is_success() {
            let api_response: ApiResponse = response
                .json()
                .map_err(|e| AppError::MalformedResponse(format!("Failed to parse response: {}", e)))?;
            return first_choice_content(api_response);
        }

        let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
        Err(status_error(status, &body))
    }
}

fn first_choice_content(response: ApiResponse) -> Result<String, AppError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AppError::MalformedResponse("No choices in response".into()))?;

    choice
        .message
        .and_then(|message| message.content)
        .ok_or_else(|| AppError::MalformedResponse("No message content in first choice".into()))
}

fn status_error(status: StatusCode, body: &str) -> AppError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AppError::Authentication { status: status.as_u16(), message }
        }
        StatusCode::TOO_MANY_REQUESTS => AppError::RateLimited(message),
        _ => AppError::Api { status: status.as_u16(), message },
    }
}
