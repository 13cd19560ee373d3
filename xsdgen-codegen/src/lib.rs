//! # xsdgen Codegen
//!
//! Code generation from XSD proto trees.
//!
//! This crate provides:
//! - One generation pass per language with an emit-once cache
//! - Go, TypeScript, C, Java, Rust and Ruby targets
//! - Artifact sinks writing generated files
//! - Convenience entry points from XSD text, files and URLs

pub mod config;
pub mod decl;
pub mod error;
pub mod generator;
pub mod lang;
pub mod state;
pub mod writer;

pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use error::CodegenError;
pub use generator::{Generated, Generator};
pub use state::{Feature, Features, GenerationState};
pub use writer::{ArtifactSink, FileSink, MemorySink};

use std::path::Path;
use xsdgen_schema::{ParseError, SchemaSource};

/// Generates every configured language from an XSD schema string.
///
/// # Arguments
/// * `xml` - XSD schema content
/// * `config` - Package, base name, languages and strictness
///
/// # Returns
/// One generated artifact per configured language, in configuration order.
///
/// # Errors
/// Returns `CodegenError` if parsing fails or, in strict mode, the schema
/// does not validate.
pub fn generate_from_xml(
    xml: &str,
    config: GeneratorConfig,
) -> Result<Vec<Generated>, CodegenError> {
    let tree = xsdgen_schema::parse_schema(xml)?;
    let generator = Generator::new(&tree, config)?;
    Ok(generator.generate_all())
}

/// Generates every configured language from an XSD schema file.
///
/// # Arguments
/// * `path` - Path to the XSD schema file
/// * `config` - Package, base name, languages and strictness
///
/// # Returns
/// One generated artifact per configured language.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or validation fails.
pub fn generate_from_file(
    path: &Path,
    config: GeneratorConfig,
) -> Result<Vec<Generated>, CodegenError> {
    let xml = SchemaSource::Path(path.to_path_buf())
        .load_to_string()
        .map_err(ParseError::from)?;
    generate_from_xml(&xml, config)
}

/// Generates every configured language from a schema path or URL.
///
/// # Arguments
/// * `location` - File path, or an `http`/`https` URL
/// * `config` - Package, base name, languages and strictness
///
/// # Returns
/// One generated artifact per configured language.
///
/// # Errors
/// Returns `CodegenError` if retrieval, parsing, or validation fails.
pub fn generate_from_location(
    location: &str,
    config: GeneratorConfig,
) -> Result<Vec<Generated>, CodegenError> {
    let source = SchemaSource::from_location(location);
    tracing::info!("loading schema from {}", source.location());
    let xml = source.load_to_string().map_err(ParseError::from)?;
    generate_from_xml(&xml, config)
}
