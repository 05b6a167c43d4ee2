pub mod completion_client_http;
pub mod template_minijinja;

pub use completion_client_http::HttpCompletionClient;
pub use template_minijinja::MinijinjaTemplateRenderer;
