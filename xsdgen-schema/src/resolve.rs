//! Type resolution.
//!
//! Maps a type reference found on a schema construct to the name of a type
//! in a target language: built-in XSD types come from the built-in table,
//! anything else is looked up in the proto tree and finally turned into a
//! type identifier.

use crate::tree::ProtoTree;
use xsdgen_core::naming::{strip_namespace_prefix, type_identifier};
use xsdgen_core::{Language, is_builtin, resolve_builtin};

/// Built-in used when a reference is empty.
const UNTYPED: &str = "anyType";

/// Resolves type references against a proto tree.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    tree: &'a ProtoTree,
}

impl<'a> TypeResolver<'a> {
    /// Creates a resolver over `tree`.
    #[must_use]
    pub fn new(tree: &'a ProtoTree) -> Self {
        Self { tree }
    }

    /// Returns the tree this resolver reads.
    #[must_use]
    pub fn tree(&self) -> &'a ProtoTree {
        self.tree
    }

    /// Resolves a reference to its base type name.
    ///
    /// The namespace prefix is stripped, then the first plain simple type
    /// with that name yields its base; failing that, the first top-level
    /// attribute or element yields its type; otherwise the local name is
    /// returned unchanged. The result is prefix-free.
    #[must_use]
    pub fn resolve_base<'r>(&self, reference: &'r str) -> &'r str
    where
        'a: 'r,
    {
        let name = strip_namespace_prefix(reference);
        if let Some(simple) = self.tree.restriction(name) {
            return strip_namespace_prefix(&simple.base);
        }
        if let Some(declared) = self.tree.declared_type(name) {
            return strip_namespace_prefix(declared);
        }
        name
    }

    /// Resolves a reference to a type name in `language`.
    ///
    /// Built-in names map straight through the built-in table without
    /// consulting the tree. Other references are resolved with
    /// [`resolve_base`](Self::resolve_base) and, when the base is not a
    /// built-in either, converted into a type identifier on the assumption
    /// that a declaration for it is emitted elsewhere.
    #[must_use]
    pub fn field_type(&self, reference: &str, language: Language) -> String {
        let local = strip_namespace_prefix(reference);
        if let Some(builtin) =
            resolve_builtin(reference, language).or_else(|| resolve_builtin(local, language))
        {
            return builtin.to_string();
        }

        let base = match self.resolve_base(reference) {
            "" => UNTYPED,
            base => base,
        };
        if let Some(builtin) = resolve_builtin(base, language) {
            return builtin.to_string();
        }

        if !self.tree.contains_name(base) {
            tracing::debug!(
                reference,
                base,
                "type reference not defined in schema, using its name"
            );
        }
        type_identifier(base)
    }

    /// Returns true if `reference` resolves to a built-in type, either
    /// directly or through the tree.
    #[must_use]
    pub fn is_builtin_reference(&self, reference: &str) -> bool {
        is_builtin(reference)
            || is_builtin(strip_namespace_prefix(reference))
            || match self.resolve_base(reference) {
                "" => true,
                base => is_builtin(base),
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{Attribute, ComplexType, Element, Node, SimpleType};

    fn tree() -> ProtoTree {
        [
            Node::from(Attribute::new("first", "Code")),
            Node::from(Attribute::new("second", "Code")),
            Node::from(SimpleType::new("Age", "xs:positiveInteger")),
            Node::from(SimpleType::list("Codes", "xs:token")),
            Node::from(ComplexType::new("Product")),
            Node::from(Element::new("customer-id", "xs:string")),
            Node::from(SimpleType::new("Code", "xs:string")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_resolve_base_simple_type() {
        let tree = tree();
        let resolver = TypeResolver::new(&tree);
        assert_eq!(resolver.resolve_base("Age"), "positiveInteger");
        assert_eq!(resolver.resolve_base("tns:Age"), "positiveInteger");
    }

    #[test]
    fn test_resolve_base_prefers_later_simple_type() {
        let tree = tree();
        let resolver = TypeResolver::new(&tree);
        assert_eq!(resolver.resolve_base("Code"), "string");
    }

    #[test]
    fn test_resolve_base_declarations_and_passthrough() {
        let tree = tree();
        let resolver = TypeResolver::new(&tree);
        assert_eq!(resolver.resolve_base("customer-id"), "string");
        assert_eq!(resolver.resolve_base("first"), "Code");
        assert_eq!(resolver.resolve_base("Codes"), "Codes");
        assert_eq!(resolver.resolve_base("Product"), "Product");
        assert_eq!(resolver.resolve_base("Unknown"), "Unknown");
    }

    #[test]
    fn test_field_type_builtin_precedence() {
        let tree = [Node::from(SimpleType::new("string", "int"))]
            .into_iter()
            .collect::<ProtoTree>();
        let resolver = TypeResolver::new(&tree);
        assert_eq!(resolver.field_type("xs:string", Language::Rust), "String");
        assert_eq!(resolver.field_type("xml:lang", Language::Go), "string");
    }

    #[test]
    fn test_field_type_through_tree() {
        let tree = tree();
        let resolver = TypeResolver::new(&tree);
        assert_eq!(resolver.field_type("Age", Language::Rust), "u32");
        assert_eq!(resolver.field_type("Age", Language::Ruby), "Integer");
        assert_eq!(resolver.field_type("Product", Language::Java), "Product");
        assert_eq!(resolver.field_type("tns:order-line", Language::Go), "OrderLine");
    }

    #[test]
    fn test_is_builtin_reference() {
        let tree = tree();
        let resolver = TypeResolver::new(&tree);
        assert!(resolver.is_builtin_reference("xs:string"));
        assert!(resolver.is_builtin_reference("Age"));
        assert!(resolver.is_builtin_reference("customer-id"));
        assert!(!resolver.is_builtin_reference("Product"));
        assert!(!resolver.is_builtin_reference("tns:Unknown"));
    }

    #[test]
    fn test_field_type_empty_reference() {
        let tree = ProtoTree::new();
        let resolver = TypeResolver::new(&tree);
        assert_eq!(resolver.field_type("", Language::Ruby), "String");
    }
}
