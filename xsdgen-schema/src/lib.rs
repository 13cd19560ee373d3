//! # xsdgen Schema
//!
//! XSD reader and intermediate representation for code generation.
//!
//! This crate provides:
//! - The proto tree: an ordered sequence of schema constructs
//! - An XSD reader producing proto trees
//! - Type resolution against built-in types and the proto tree
//! - Schema retrieval from files, directories and URLs
//! - Optional validation of the proto tree

pub mod error;
pub mod nodes;
pub mod parser;
pub mod resolve;
pub mod source;
pub mod tree;
pub mod validation;

pub use error::{ParseError, SchemaError, SourceError};
pub use nodes::{
    Attribute, AttributeGroup, AttributeGroupRef, ComplexType, Element, Group, GroupRef, Node,
    NodeKind, SimpleType,
};
pub use parser::parse_schema;
pub use resolve::TypeResolver;
pub use source::{SchemaSource, collect_schema_files};
pub use tree::ProtoTree;
pub use validation::validate_tree;
