//! Prompt construction for post generation.
//!
//! The prompt is a fixed instruction template with the four project fields
//! substituted verbatim. Rendering goes through [`TemplateRenderer`] so the
//! template engine stays outside the domain layer.

use std::collections::HashMap;

use crate::domain::PostRequest;

/// Name used for the prompt template in render errors.
pub const PROMPT_TEMPLATE_NAME: &str = "linkedin_post_prompt";

/// Instruction template sent to the completion model.
pub const PROMPT_TEMPLATE: &str = "\
You are a professional LinkedIn content writer specializing in tech project announcements.
Create an engaging LinkedIn post announcing my project with the following details:
Project Name: {{ project_name }}
Project Description: {{ project_description }}
Key Features: {{ key_features }}
Technologies Used: {{ tech_stack }}
Guidelines for the post:
1. Start with an exciting hook about the project launch
2. Briefly explain what problem the project solves
3. Highlight 2-3 key features or capabilities
4. Mention the tech stack naturally
5. Include a clear call-to-action (like checking out the project, providing feedback, or connecting)
6. Add 3-4 relevant hashtags
7. Use appropriate emojis to make the post engaging
8. Keep it under 1300 characters
9. Use line breaks for better readability
Generate a professional yet enthusiastic LinkedIn post following these guidelines.";

/// Variables substituted into a template.
#[derive(Debug, Clone, Default)]
pub struct PromptContext {
    /// Variable name to value mapping.
    pub variables: HashMap<String, String>,
}

impl PromptContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the context.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(|s| s.as_str())
    }
}

impl From<&PostRequest> for PromptContext {
    fn from(request: &PostRequest) -> Self {
        PromptContext::new()
            .with_var("project_name", &request.project_name)
            .with_var("project_description", &request.project_description)
            .with_var("key_features", &request.key_features)
            .with_var("tech_stack", &request.tech_stack)
    }
}

/// Error during prompt rendering.
#[derive(Debug, Clone)]
pub enum PromptError {
    /// Failed to render a template with the provided context.
    TemplateRenderError { template: String, reason: String },
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TemplateRenderError { template, reason } => {
                write!(f, "Failed to render template {}: {}", template, reason)
            }
        }
    }
}

impl std::error::Error for PromptError {}

/// Renders a template string against a [`PromptContext`].
pub trait TemplateRenderer {
    /// `template_name` only appears in error reports.
    fn render(
        &self,
        template: &str,
        context: &PromptContext,
        template_name: &str,
    ) -> Result<String, PromptError>;
}

/// Render the post prompt for `request`.
///
/// Fields are inserted as-is; emptiness is the caller's concern.
pub fn build_prompt(
    request: &PostRequest,
    renderer: &impl TemplateRenderer,
) -> Result<String, PromptError> {
    renderer.render(PROMPT_TEMPLATE, &PromptContext::from(request), PROMPT_TEMPLATE_NAME)
}
