use crate::domain::TemplateRenderer;
use crate::ports::CompletionClient;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CompletionClient, R: TemplateRenderer> {
    client: C,
    renderer: R,
    model: String,
}

impl<C: CompletionClient, R: TemplateRenderer> AppContext<C, R> {
    /// Create a new application context.
    pub fn new(client: C, renderer: R, model: impl Into<String>) -> Self {
        Self { client, renderer, model: model.into() }
    }

    /// Get a reference to the completion client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Model identifier used for completions.
    pub fn model(&self) -> &str {
        &self.model
    }
}
