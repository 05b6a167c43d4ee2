//! Post generation: prompt building followed by one completion call.

use crate::app::AppContext;
use crate::domain::{AppError, PostRequest, PostResult, TemplateRenderer, build_prompt};
use crate::ports::{ChatMessage, CompletionClient, CompletionRequest};

/// Generate a post for `request`.
///
/// Only validation and prompt errors are returned as `Err`; every failure of
/// the completion call is folded into [`PostResult::Failed`].
pub fn execute<C, R>(ctx: &AppContext<C, R>, request: &PostRequest) -> Result<PostResult, AppError>
where
    C: CompletionClient,
    R: TemplateRenderer,
{
    request.validate()?;
    let prompt = build_prompt(request, ctx.renderer())?;
    Ok(request_completion(ctx.client(), ctx.model(), &prompt))
}

/// Send `prompt` as a single user message and return the first choice.
pub fn request_completion<C>(client: &C, model: &str, prompt: &str) -> PostResult
where
    C: CompletionClient + ?Sized,
{
    let request =
        CompletionRequest { messages: vec![ChatMessage::user(prompt)], model: model.to_string() };
    tracing::debug!(model, prompt_chars = prompt.chars().count(), "requesting completion");

    match client.complete(&request) {
        Ok(text) => {
            tracing::info!(model, content_chars = text.chars().count(), "completion received");
            PostResult::Generated(text)
        }
        Err(err) => {
            tracing::warn!(model, error = %err, "completion failed");
            PostResult::Failed { reason: err.to_string() }
        }
    }
}
