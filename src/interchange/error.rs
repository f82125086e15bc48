//! Error types for interchange operations.

use thiserror::Error;

/// Errors that can occur while exporting a document.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// IO error during write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InterchangeError {
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }
}

impl From<serde_json::Error> for InterchangeError {
    fn from(err: serde_json::Error) -> Self {
        Self::json(err.to_string())
    }
}

impl From<serde_yaml::Error> for InterchangeError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::yaml(err.to_string())
    }
}
