//! projexbuzz: generate LinkedIn announcement posts for software projects.
//!
//! The core is two steps: [`build_prompt`] fills a fixed instruction
//! template with four project fields, and [`request_completion`] sends the
//! prompt to a chat-completion service through a [`CompletionClient`].

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::MinijinjaTemplateRenderer;
use app::AppContext;

pub use adapters::HttpCompletionClient;
pub use app::commands::generate::request_completion;
pub use domain::{
    AppConfig, AppError, CompletionConfig, ERROR_PREFIX, PROMPT_TEMPLATE, PostField, PostRequest,
    PostResult,
};
pub use ports::{ChatMessage, ChatRole, CompletionClient, CompletionRequest};

/// Render the post prompt for `request`.
///
/// Fields are substituted verbatim and are not validated here.
pub fn build_prompt(request: &PostRequest) -> Result<String, AppError> {
    Ok(domain::build_prompt(request, &MinijinjaTemplateRenderer::new())?)
}

/// Validate `request`, build its prompt and ask `client` for a post.
///
/// Returns `Err` only for blank fields; completion failures come back as
/// [`PostResult::Failed`].
pub fn generate_post<C>(
    request: &PostRequest,
    client: C,
    config: &CompletionConfig,
) -> Result<PostResult, AppError>
where
    C: CompletionClient,
{
    let ctx = AppContext::new(client, MinijinjaTemplateRenderer::new(), config.model.as_str());
    app::commands::generate::execute(&ctx, request)
}
