//! The proto tree: an ordered, indexed sequence of schema constructs.
//!
//! Nodes keep the order in which the reader produced them; generation walks
//! them in that order. Lookup maps are maintained as nodes are pushed so
//! type resolution does not scan the tree.

use crate::nodes::{Node, NodeKind, SimpleType};
use std::collections::HashMap;

/// Intermediate representation of a parsed schema document.
#[derive(Debug, Clone, Default)]
pub struct ProtoTree {
    nodes: Vec<Node>,
    /// Per-kind name lookup, first definition wins.
    by_kind: HashMap<NodeKind, HashMap<String, usize>>,
    /// Simple types that are neither lists nor unions, first definition wins.
    restrictions: HashMap<String, usize>,
    /// Top-level attributes and elements, first definition in tree order wins.
    declarations: HashMap<String, usize>,
}

impl ProtoTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node, indexing it by name.
    pub fn push(&mut self, node: Node) {
        let index = self.nodes.len();
        let name = node.name().to_string();

        match &node {
            Node::SimpleType(v) if v.is_restriction() => {
                self.restrictions.entry(name.clone()).or_insert(index);
            }
            Node::Element(_) | Node::Attribute(_) => {
                self.declarations.entry(name.clone()).or_insert(index);
            }
            _ => {}
        }
        self.by_kind
            .entry(node.kind())
            .or_default()
            .entry(name)
            .or_insert(index);

        self.nodes.push(node);
    }

    /// Returns all nodes in tree order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterates nodes in tree order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up the first node of `kind` named `name`.
    #[must_use]
    pub fn get(&self, kind: NodeKind, name: &str) -> Option<&Node> {
        self.by_kind
            .get(&kind)
            .and_then(|names| names.get(name))
            .map(|&idx| &self.nodes[idx])
    }

    /// Returns true if any node, of any kind, is named `name`.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_kind.values().any(|names| names.contains_key(name))
    }

    /// Looks up the first simple type named `name` that is neither a list
    /// nor a union.
    #[must_use]
    pub fn restriction(&self, name: &str) -> Option<&SimpleType> {
        self.restrictions
            .get(name)
            .and_then(|&idx| match &self.nodes[idx] {
                Node::SimpleType(v) => Some(v),
                _ => None,
            })
    }

    /// Returns the type reference of the first top-level attribute or
    /// element named `name`.
    #[must_use]
    pub fn declared_type(&self, name: &str) -> Option<&str> {
        self.declarations
            .get(name)
            .and_then(|&idx| match &self.nodes[idx] {
                Node::Element(v) => Some(v.type_ref.as_str()),
                Node::Attribute(v) => Some(v.type_ref.as_str()),
                _ => None,
            })
    }
}

impl FromIterator<Node> for ProtoTree {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        let mut tree = Self::new();
        for node in iter {
            tree.push(node);
        }
        tree
    }
}

impl<'a> IntoIterator for &'a ProtoTree {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{Attribute, ComplexType, Element};

    fn sample_tree() -> ProtoTree {
        [
            Node::from(Element::new("Code", "token")),
            Node::from(SimpleType::list("Code", "string")),
            Node::from(SimpleType::new("Code", "string")),
            Node::from(ComplexType::new("Order")),
            Node::from(Attribute::new("lang", "xml:lang")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_push_preserves_order() {
        let tree = sample_tree();
        assert_eq!(tree.len(), 5);
        let kinds: Vec<_> = tree.iter().map(Node::kind).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Element,
                NodeKind::SimpleType,
                NodeKind::SimpleType,
                NodeKind::ComplexType,
                NodeKind::Attribute,
            ]
        );
    }

    #[test]
    fn test_restriction_skips_lists() {
        let tree = sample_tree();
        let code = tree.restriction("Code").expect("restriction indexed");
        assert!(code.is_restriction());
        assert_eq!(code.base, "string");
    }

    #[test]
    fn test_get_first_definition_wins() {
        let tree = sample_tree();
        match tree.get(NodeKind::SimpleType, "Code") {
            Some(Node::SimpleType(v)) => assert!(v.list),
            other => panic!("unexpected lookup result: {other:?}"),
        }
    }

    #[test]
    fn test_declared_type() {
        let tree = sample_tree();
        assert_eq!(tree.declared_type("Code"), Some("token"));
        assert_eq!(tree.declared_type("lang"), Some("xml:lang"));
        assert_eq!(tree.declared_type("Order"), None);
    }

    #[test]
    fn test_contains_name() {
        let tree = sample_tree();
        assert!(tree.contains_name("Order"));
        assert!(!tree.contains_name("Product"));
        assert!(ProtoTree::new().is_empty());
    }
}
