//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use xsdgen::prelude::*;
//! ```

// Core types
pub use xsdgen_core::Language;
pub use xsdgen_core::error::{Error as CoreError, Result as CoreResult};

// Schema types
pub use xsdgen_schema::{
    Node, NodeKind, ParseError, ProtoTree, SchemaError, SchemaSource, SourceError, TypeResolver,
    parse_schema, validate_tree,
};

// Codegen types
pub use xsdgen_codegen::{
    ArtifactSink, CodegenError, FileSink, Generated, Generator, GeneratorConfig, MemorySink,
    generate_from_file, generate_from_location, generate_from_xml,
};
