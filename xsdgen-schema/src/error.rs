//! Error types for schema reading, retrieval and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}' on element '{element}'")]
    InvalidAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// Invalid schema structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// The schema document could not be retrieved.
    #[error("schema retrieval failed: {0}")]
    Source(#[from] SourceError),

    /// UTF-8 decoding error in a tag or attribute name.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for schema retrieval.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading a local schema file failed.
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Fetching a remote schema failed.
    #[error("cannot fetch '{url}': {source}")]
    Fetch {
        /// Requested URL.
        url: String,
        /// Underlying HTTP error.
        #[source]
        source: Box<ureq::Error>,
    },

    /// Reading the body of a remote schema failed.
    #[error("cannot read response body of '{url}': {source}")]
    Body {
        /// Requested URL.
        url: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Walking a schema directory failed.
    #[error("cannot list schema files: {0}")]
    Walk(#[from] walkdir::Error),

    /// The schema is not valid UTF-8.
    #[error("schema '{location}' is not valid UTF-8")]
    NotUtf8 {
        /// Path or URL of the schema.
        location: String,
    },
}

/// Error type for proto tree validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two constructs of the same kind share a name.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (simpleType, element, ...).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attr(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_error_converts() {
        let bytes = [0x66, 0x6f, 0xff];
        let err: ParseError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert!(matches!(err, ParseError::Utf8(_)));
        assert!(err.to_string().starts_with("UTF-8 error"));
    }

    #[test]
    fn test_helper_constructors() {
        let err = ParseError::missing_attr("complexType", "name");
        assert_eq!(
            err.to_string(),
            "missing required attribute 'name' on element 'complexType'"
        );
        let err = SchemaError::duplicate("element", "order");
        assert_eq!(err.to_string(), "duplicate element definition: 'order'");
    }
}
