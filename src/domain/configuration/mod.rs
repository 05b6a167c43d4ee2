pub mod completion_config;
pub mod loader;

pub use completion_config::{
    API_KEY_ENV, API_URL_ENV, AppConfig, CompletionConfig, MODEL_ENV, read_api_key,
};
pub use loader::{CONFIG_FILE_NAME, load_config, parse_config_content};
