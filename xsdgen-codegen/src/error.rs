//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] xsdgen_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] xsdgen_schema::SchemaError),

    /// Writing a generated artifact failed.
    #[error("cannot write '{}': {source}", path.display())]
    Write {
        /// Artifact path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("invalid configuration: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a write error for `path`.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Creates a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
