use std::fmt;

/// Prefix shown in front of every failed generation.
pub const ERROR_PREFIX: &str = "Error generating caption: ";

/// Outcome of a single generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostResult {
    /// The completion text, unmodified.
    Generated(String),
    /// The completion call failed; `reason` describes why.
    Failed { reason: String },
}

impl PostResult {
    pub fn is_generated(&self) -> bool {
        matches!(self, PostResult::Generated(_))
    }

    /// The generated post, if any.
    pub fn post(&self) -> Option<&str> {
        match self {
            PostResult::Generated(text) => Some(text),
            PostResult::Failed { .. } => None,
        }
    }
}

impl fmt::Display for PostResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostResult::Generated(text) => f.write_str(text),
            PostResult::Failed { reason } => write!(f, "{}{}", ERROR_PREFIX, reason),
        }
    }
}
