//! Proto tree validation.
//!
//! Generation tolerates duplicate definitions (the first one wins), so these
//! checks are opt-in. Strict generation runs them before emitting anything.

use crate::error::SchemaError;
use crate::nodes::NodeKind;
use crate::tree::ProtoTree;
use std::collections::HashSet;

/// Validates a proto tree for consistency.
///
/// # Errors
/// Returns `SchemaError` if a construct has an empty name or two constructs
/// of the same kind share a name.
pub fn validate_tree(tree: &ProtoTree) -> Result<(), SchemaError> {
    validate_names(tree)?;
    if let Some((kind, name)) = find_duplicates(tree).into_iter().next() {
        return Err(SchemaError::duplicate(kind.as_str(), name));
    }
    Ok(())
}

/// Rejects nodes without a name.
fn validate_names(tree: &ProtoTree) -> Result<(), SchemaError> {
    for (index, node) in tree.iter().enumerate() {
        if node.name().is_empty() {
            return Err(SchemaError::Validation {
                message: format!("{} at position {index} has no name", node.kind()),
            });
        }
    }
    Ok(())
}

/// Returns every (kind, name) pair defined more than once, in the order the
/// second definition appears.
#[must_use]
pub fn find_duplicates(tree: &ProtoTree) -> Vec<(NodeKind, String)> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for node in tree {
        let key = (node.kind(), node.name());
        if !seen.insert(key) && reported.insert(key) {
            duplicates.push((node.kind(), node.name().to_string()));
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{ComplexType, Element, Node, SimpleType};

    #[test]
    fn test_valid_tree() {
        let tree: ProtoTree = [
            Node::from(SimpleType::new("Code", "xs:string")),
            Node::from(Element::new("Code", "Code")),
        ]
        .into_iter()
        .collect();
        assert!(validate_tree(&tree).is_ok());
        assert!(find_duplicates(&tree).is_empty());
    }

    #[test]
    fn test_duplicate_definition() {
        let tree: ProtoTree = [
            Node::from(ComplexType::new("Order")),
            Node::from(ComplexType::new("Order")),
            Node::from(ComplexType::new("Order")),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            find_duplicates(&tree),
            vec![(NodeKind::ComplexType, "Order".to_string())]
        );
        let err = validate_tree(&tree).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateDefinition { .. }));
        assert!(err.to_string().contains("Order"));
    }

    #[test]
    fn test_empty_name() {
        let tree: ProtoTree = [Node::from(SimpleType::new("", "xs:string"))]
            .into_iter()
            .collect();
        assert!(matches!(
            validate_tree(&tree),
            Err(SchemaError::Validation { .. })
        ));
    }
}
