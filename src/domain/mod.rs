pub mod configuration;
pub mod error;
pub mod post_request;
pub mod post_result;
pub mod prompt;

pub use configuration::{
    API_KEY_ENV, AppConfig, CONFIG_FILE_NAME, CompletionConfig, load_config,
    parse_config_content, read_api_key,
};
pub use error::AppError;
pub use post_request::{PostField, PostRequest};
pub use post_result::{ERROR_PREFIX, PostResult};
pub use prompt::{PROMPT_TEMPLATE, PromptContext, PromptError, TemplateRenderer, build_prompt};
