use thiserror::Error;

/// Errors that can occur while generating a recipe
#[derive(Error, Debug)]
pub enum RecipeError {
    /// The request violates one or more domain constraints
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The upstream model could not produce a reply
    #[error("Failed to generate recipe: {0}")]
    Generation(String),

    /// A provider could not be constructed from its configuration
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to read a request file or bind the server socket
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to decode a request document
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl RecipeError {
    /// Violation messages when this is a validation failure, empty otherwise
    pub fn violations(&self) -> &[String] {
        match self {
            RecipeError::Validation(violations) => violations,
            _ => &[],
        }
    }
}
