//! Field collection for the post form.

use std::io::{ErrorKind, IsTerminal};

use clap::Args;
use dialoguer::{Error as DialoguerError, Input};

use crate::domain::{AppError, PostField, PostRequest};

/// Project fields accepted as flags; missing ones are asked for interactively.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Project name
    #[arg(short = 'n', long = "name")]
    pub name: Option<String>,
    /// What the project does and its main purpose
    #[arg(short = 'd', long = "description")]
    pub description: Option<String>,
    /// Main features (comma-separated)
    #[arg(short = 'f', long = "features")]
    pub features: Option<String>,
    /// Technologies used (comma-separated)
    #[arg(short = 't', long = "tech")]
    pub tech: Option<String>,
    /// Fail on missing fields instead of prompting
    #[arg(long)]
    pub no_input: bool,
}

impl FieldArgs {
    fn value(&self, field: PostField) -> Option<&str> {
        let value = match field {
            PostField::ProjectName => &self.name,
            PostField::ProjectDescription => &self.description,
            PostField::KeyFeatures => &self.features,
            PostField::TechStack => &self.tech,
        };
        value.as_deref().filter(|v| !v.trim().is_empty())
    }
}

/// Build a request from flags, prompting for whatever is missing.
///
/// Returns `None` when the user interrupts the prompt.
pub fn collect_request(fields: &FieldArgs) -> Result<Option<PostRequest>, AppError> {
    let interactive = !fields.no_input && std::io::stdin().is_terminal();
    let mut request = PostRequest::default();

    for field in PostField::ALL {
        let value = match fields.value(field) {
            Some(value) => value.to_string(),
            None if interactive => match prompt_field(field)? {
                Some(value) => value,
                None => return Ok(None),
            },
            None => return Err(AppError::MissingField { field: field.label().to_string() }),
        };
        request.set_field(field, value);
    }

    Ok(Some(request))
}

fn prompt_field(field: PostField) -> Result<Option<String>, AppError> {
    eprintln!("  {}", field.placeholder());
    let input = Input::<String>::new().with_prompt(field.label()).validate_with(
        |value: &String| -> Result<(), &'static str> {
            if value.trim().is_empty() { Err("This field is required") } else { Ok(()) }
        },
    );

    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Input(format!("Failed to read {}: {}", field.label(), err))),
    }
}
