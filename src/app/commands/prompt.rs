use crate::domain::{AppError, PostRequest, TemplateRenderer, build_prompt};

/// Build the prompt for `request` without contacting the completion service.
pub fn execute(renderer: &impl TemplateRenderer, request: &PostRequest) -> Result<String, AppError> {
    request.validate()?;
    Ok(build_prompt(request, renderer)?)
}
