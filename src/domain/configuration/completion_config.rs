//! Completion configuration domain models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Environment variable carrying the API credential.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";
/// Environment override for [`CompletionConfig::model`].
pub const MODEL_ENV: &str = "PROJEXBUZZ_MODEL";
/// Environment override for [`CompletionConfig::api_url`].
pub const API_URL_ENV: &str = "PROJEXBUZZ_API_URL";

/// Configuration loaded from `projexbuzz.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Completion API configuration.
    #[serde(default)]
    pub completion: CompletionConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.completion.validate()
    }
}

/// Completion API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionConfig {
    /// Chat-completion endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Hosted model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: default_timeout() }
    }
}

impl CompletionConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Apply `PROJEXBUZZ_*` overrides found through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.trim().is_empty()) {
            self.model = model;
        }
        if let Some(raw) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api_url = Url::parse(raw.trim()).map_err(|e| {
                AppError::InvalidConfig(format!("{} is not a valid URL: {}", API_URL_ENV, e))
            })?;
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.groq.com/openai/v1/chat/completions")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "llama3-8b-8192".to_string()
}

fn default_timeout() -> u64 {
    60
}

/// Read the API credential through `lookup`.
pub fn read_api_key<F>(lookup: F) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(API_KEY_ENV)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            AppError::Configuration(format!("{} environment variable not set", API_KEY_ENV))
        })
}
