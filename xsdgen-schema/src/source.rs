//! Schema retrieval from files, directories and URLs.

use crate::error::SourceError;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extension of schema documents picked up from directories.
const SCHEMA_EXTENSION: &str = "xsd";

/// Location of a schema document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// A file on the local filesystem.
    Path(PathBuf),
    /// A document served over HTTP(S).
    Url(String),
}

impl SchemaSource {
    /// Classifies a location string as a URL or a filesystem path.
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        if is_valid_url(location) {
            Self::Url(location.to_string())
        } else {
            Self::Path(PathBuf::from(location))
        }
    }

    /// Returns the location as a display string.
    #[must_use]
    pub fn location(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Url(url) => url.clone(),
        }
    }

    /// Loads the raw document bytes.
    ///
    /// # Errors
    /// Returns `SourceError` if the file cannot be read or the request fails.
    pub fn load(&self) -> Result<Vec<u8>, SourceError> {
        match self {
            Self::Path(path) => std::fs::read(path).map_err(|source| SourceError::Read {
                path: path.clone(),
                source,
            }),
            Self::Url(url) => fetch(url),
        }
    }

    /// Loads the document as UTF-8 text.
    ///
    /// # Errors
    /// Returns `SourceError` if loading fails or the document is not UTF-8.
    pub fn load_to_string(&self) -> Result<String, SourceError> {
        let bytes = self.load()?;
        String::from_utf8(bytes).map_err(|_| SourceError::NotUtf8 {
            location: self.location(),
        })
    }
}

fn fetch(url: &str) -> Result<Vec<u8>, SourceError> {
    tracing::debug!(url, "fetching schema");
    let response = ureq::get(url).call().map_err(|source| SourceError::Fetch {
        url: url.to_string(),
        source: Box::new(source),
    })?;

    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|source| SourceError::Body {
            url: url.to_string(),
            source,
        })?;
    Ok(body)
}

/// Returns true if `location` looks like an absolute URL with a scheme and
/// a host, such as `https://example.com/schema.xsd`.
#[must_use]
pub fn is_valid_url(location: &str) -> bool {
    let Some((scheme, rest)) = location.split_once("://") else {
        return false;
    };
    let scheme_ok = scheme
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    scheme_ok && !host.is_empty()
}

/// Lists the schema files under `path`.
///
/// A file path is returned as is. A directory is walked recursively and
/// every `.xsd` file below it is returned in sorted order.
///
/// # Errors
/// Returns `SourceError::Walk` if the directory cannot be read.
pub fn collect_schema_files(path: &Path) -> Result<Vec<PathBuf>, SourceError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path) {
        let entry = entry?;
        let is_schema = entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(SCHEMA_EXTENSION));
        if entry.file_type().is_file() && is_schema {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}
