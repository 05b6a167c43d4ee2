//! Post request domain model.

use crate::domain::AppError;

/// The four project fields a post is generated from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostRequest {
    pub project_name: String,
    pub project_description: String,
    pub key_features: String,
    pub tech_stack: String,
}

/// Identifies one of the [`PostRequest`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    ProjectName,
    ProjectDescription,
    KeyFeatures,
    TechStack,
}

impl PostField {
    pub const ALL: [PostField; 4] = [
        PostField::ProjectName,
        PostField::ProjectDescription,
        PostField::KeyFeatures,
        PostField::TechStack,
    ];

    /// Human-facing label, as shown in forms and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            PostField::ProjectName => "Project Name",
            PostField::ProjectDescription => "Project Description",
            PostField::KeyFeatures => "Key Features",
            PostField::TechStack => "Technologies Used",
        }
    }

    /// Input hint for interactive collection.
    pub fn placeholder(&self) -> &'static str {
        match self {
            PostField::ProjectName => "Enter your project name",
            PostField::ProjectDescription => {
                "Briefly describe what your project does and its main purpose"
            }
            PostField::KeyFeatures => "List the main features of your project (comma-separated)",
            PostField::TechStack => {
                "List the technologies used in your project (comma-separated)"
            }
        }
    }
}

impl PostRequest {
    pub fn new(
        project_name: impl Into<String>,
        project_description: impl Into<String>,
        key_features: impl Into<String>,
        tech_stack: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            project_description: project_description.into(),
            key_features: key_features.into(),
            tech_stack: tech_stack.into(),
        }
    }

    pub fn field(&self, field: PostField) -> &str {
        match field {
            PostField::ProjectName => &self.project_name,
            PostField::ProjectDescription => &self.project_description,
            PostField::KeyFeatures => &self.key_features,
            PostField::TechStack => &self.tech_stack,
        }
    }

    pub fn set_field(&mut self, field: PostField, value: String) {
        match field {
            PostField::ProjectName => self.project_name = value,
            PostField::ProjectDescription => self.project_description = value,
            PostField::KeyFeatures => self.key_features = value,
            PostField::TechStack => self.tech_stack = value,
        }
    }

    /// Reject the request if any field is blank.
    pub fn validate(&self) -> Result<(), AppError> {
        match PostField::ALL.into_iter().find(|f| self.field(*f).trim().is_empty()) {
            Some(field) => Err(AppError::MissingField { field: field.label().to_string() }),
            None => Ok(()),
        }
    }
}
