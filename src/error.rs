//! Error types for sqaull.

use thiserror::Error;

/// The main error type for sqaull operations.
///
/// Tagging itself never fails; these errors come from building custom
/// pattern categories, looking things up by name, and reading preferences.
#[derive(Debug, Error)]
pub enum SqaullError {
    /// A pattern category regex failed to compile.
    #[error("Invalid pattern for category '{category}': {source}")]
    InvalidPattern {
        category: String,
        #[source]
        source: regex::Error,
    },

    /// A pattern category regex has no group to tag.
    #[error("Pattern for category '{0}' needs exactly one capturing group")]
    MissingCaptureGroup(String),

    /// No catalog example with this name.
    #[error("Unknown example: '{0}'")]
    UnknownExample(String),

    /// Mode name not recognised.
    #[error("Unknown mode: '{0}'. Expected: dsl, sql, template, or terminal-sql")]
    UnknownMode(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SqaullError {
    /// Create an invalid pattern error for the named category.
    pub fn invalid_pattern(category: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            category: category.into(),
            source,
        }
    }
}

/// Result type alias for sqaull operations.
pub type SqaullResult<T> = Result<T, SqaullError>;
