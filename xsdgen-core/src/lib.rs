//! # xsdgen Core
//!
//! Shared building blocks for translating XML Schema definitions into source
//! code.
//!
//! This crate provides:
//! - Identifier normalization (case conversion, namespace prefixes)
//! - The built-in XSD type table with one column per target language
//! - The closed set of supported target languages
//! - Error types for core operations

pub mod builtin;
pub mod error;
pub mod language;
pub mod naming;

pub use builtin::{is_builtin, resolve_builtin};
pub use error::{Error, Result};
pub use language::Language;
