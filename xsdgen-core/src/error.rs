//! Error types for xsdgen core operations.

use thiserror::Error;

/// Core error type for xsdgen operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The language name does not match any supported target.
    #[error("unknown target language '{name}'")]
    UnknownLanguage {
        /// Name that failed to parse.
        name: String,
    },
}

/// Result type alias for xsdgen core operations.
pub type Result<T> = std::result::Result<T, Error>;
