//! Configuration file discovery and parsing.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{AppConfig, AppError};

/// File picked up from the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "projexbuzz.toml";

/// Load configuration from `explicit`, or from `projexbuzz.toml` in `work_dir`.
///
/// An explicit path must exist; the implicit file is optional and falls back
/// to defaults.
pub fn load_config(explicit: Option<&Path>, work_dir: &Path) -> Result<AppConfig, AppError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = work_dir.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                tracing::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, work_dir.display());
                return Ok(AppConfig::default());
            }
            candidate
        }
    };

    let content = fs::read_to_string(&path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            AppError::Configuration(format!("Config file not found: {}", path.display()))
        } else {
            AppError::Io(err)
        }
    })?;
    tracing::debug!("loaded configuration from {}", path.display());
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
