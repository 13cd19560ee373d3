//! # xsdgen
//!
//! Translates XML Schema Definition (XSD) documents into source-code
//! declarations for Go, TypeScript, C, Java, Rust and Ruby.
//!
//! ## Features
//!
//! - **Proto tree** - An ordered intermediate representation of schema constructs
//! - **Type resolution** - Built-in XSD types, namespace prefixes and user types
//! - **Emit-once generation** - Every schema name is declared exactly once per language
//! - **Round-trip names** - Normalized identifiers keep their schema name as a tag
//! - **All-or-nothing writes** - Artifacts are renamed into place when complete
//!
//! ## Quick Start
//!
//! ```ignore
//! use xsdgen::prelude::*;
//!
//! let tree = parse_schema(&std::fs::read_to_string("order.xsd")?)?;
//! let config = GeneratorConfig::builder().package("orders").build()?;
//! let generator = Generator::new(&tree, config)?;
//!
//! let mut sink = FileSink::new("generated");
//! generator.write_all(&mut sink)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Naming rules, built-in type table, target languages
//! - [`schema`] - XSD reading, proto tree, type resolution, validation
//! - [`codegen`] - Per-language generation and artifact sinks

pub mod prelude;

/// Naming rules, built-in type table and target languages.
pub mod core {
    pub use xsdgen_core::*;
}

/// XSD reading, proto tree and type resolution.
pub mod schema {
    pub use xsdgen_schema::*;
}

/// Code generation and artifact sinks.
pub mod codegen {
    pub use xsdgen_codegen::*;
}
