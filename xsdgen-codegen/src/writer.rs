//! Artifact sinks.
//!
//! A sink persists one generated file per language, keyed by a base name
//! and the language's file extension.

use crate::error::CodegenError;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Destination of generated artifacts.
pub trait ArtifactSink {
    /// Creates or truncates `<base>.<extension>` and writes `contents` to it,
    /// returning the artifact path.
    ///
    /// # Errors
    /// Returns `CodegenError` if the artifact cannot be written. No partial
    /// artifact is left behind.
    fn write(
        &mut self,
        base: &str,
        extension: &str,
        contents: &str,
    ) -> Result<PathBuf, CodegenError>;
}

fn file_name(base: &str, extension: &str) -> String {
    format!("{base}.{extension}")
}

/// Writes artifacts into an existing directory.
///
/// Contents go to a temporary file in the same directory that is renamed
/// over the target once fully written. On failure the temporary file is
/// removed and the previous artifact, if any, is left untouched.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Creates a sink writing into `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for FileSink {
    fn write(
        &mut self,
        base: &str,
        extension: &str,
        contents: &str,
    ) -> Result<PathBuf, CodegenError> {
        let path = self.dir.join(file_name(base, extension));

        let mut tmp =
            NamedTempFile::new_in(&self.dir).map_err(|e| CodegenError::write(&path, e))?;
        tmp.write_all(contents.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| CodegenError::write(&path, e))?;
        tmp.persist(&path)
            .map_err(|e| CodegenError::write(&path, e.error))?;

        tracing::debug!("persisted {} bytes to {}", contents.len(), path.display());
        Ok(path)
    }
}

/// Keeps artifacts in memory, keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<String, String>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the contents written under `file_name`.
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.files.get(file_name).map(String::as_str)
    }

    /// Iterates written artifacts in file name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of artifacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ArtifactSink for MemorySink {
    fn write(
        &mut self,
        base: &str,
        extension: &str,
        contents: &str,
    ) -> Result<PathBuf, CodegenError> {
        let name = file_name(base, extension);
        self.files.insert(name.clone(), contents.to_string());
        Ok(PathBuf::from(name))
    }
}
