use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::{PromptContext, PromptError, TemplateRenderer};

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Template renderer using Minijinja.
///
/// Undefined variables are an error so a misspelled placeholder never
/// renders as an empty string. Values are inserted without escaping.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: &str,
        context: &PromptContext,
        template_name: &str,
    ) -> Result<String, PromptError> {
        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env
        });

        env.render_str(template, &context.variables).map_err(|err| {
            PromptError::TemplateRenderError {
                template: template_name.to_string(),
                reason: err.to_string(),
            }
        })
    }
}
