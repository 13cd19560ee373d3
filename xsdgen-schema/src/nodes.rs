//! Proto tree node definitions.
//!
//! This module contains the data structures representing the schema
//! constructs an XSD document declares: simple and complex types, model
//! groups, attribute groups, elements and attributes.

use indexmap::IndexMap;
use std::fmt;

/// Kind of a proto tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    /// `xs:simpleType`.
    SimpleType,
    /// `xs:complexType`.
    ComplexType,
    /// `xs:group`.
    Group,
    /// `xs:attributeGroup`.
    AttributeGroup,
    /// `xs:element`.
    Element,
    /// `xs:attribute`.
    Attribute,
}

impl NodeKind {
    /// Returns the XSD element name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SimpleType => "simpleType",
            Self::ComplexType => "complexType",
            Self::Group => "group",
            Self::AttributeGroup => "attributeGroup",
            Self::Element => "element",
            Self::Attribute => "attribute",
        }
    }

    /// Returns true for top-level element and attribute declarations, as
    /// opposed to type and group definitions.
    #[must_use]
    pub const fn is_declaration(&self) -> bool {
        matches!(self, Self::Element | Self::Attribute)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-level schema construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Simple type definition.
    SimpleType(SimpleType),
    /// Complex type definition.
    ComplexType(ComplexType),
    /// Model group definition.
    Group(Group),
    /// Attribute group definition.
    AttributeGroup(AttributeGroup),
    /// Element declaration.
    Element(Element),
    /// Attribute declaration.
    Attribute(Attribute),
}

impl Node {
    /// Returns the schema name of the node.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::SimpleType(v) => &v.name,
            Self::ComplexType(v) => &v.name,
            Self::Group(v) => &v.name,
            Self::AttributeGroup(v) => &v.name,
            Self::Element(v) => &v.name,
            Self::Attribute(v) => &v.name,
        }
    }

    /// Returns the documentation attached to the node, if any.
    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        match self {
            Self::SimpleType(v) => v.doc.as_deref(),
            Self::ComplexType(v) => v.doc.as_deref(),
            Self::Group(v) => v.doc.as_deref(),
            Self::AttributeGroup(v) => v.doc.as_deref(),
            Self::Element(v) => v.doc.as_deref(),
            Self::Attribute(v) => v.doc.as_deref(),
        }
    }

    /// Returns the kind of the node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::SimpleType(_) => NodeKind::SimpleType,
            Self::ComplexType(_) => NodeKind::ComplexType,
            Self::Group(_) => NodeKind::Group,
            Self::AttributeGroup(_) => NodeKind::AttributeGroup,
            Self::Element(_) => NodeKind::Element,
            Self::Attribute(_) => NodeKind::Attribute,
        }
    }
}

impl From<SimpleType> for Node {
    fn from(v: SimpleType) -> Self {
        Self::SimpleType(v)
    }
}

impl From<ComplexType> for Node {
    fn from(v: ComplexType) -> Self {
        Self::ComplexType(v)
    }
}

impl From<Group> for Node {
    fn from(v: Group) -> Self {
        Self::Group(v)
    }
}

impl From<AttributeGroup> for Node {
    fn from(v: AttributeGroup) -> Self {
        Self::AttributeGroup(v)
    }
}

impl From<Element> for Node {
    fn from(v: Element) -> Self {
        Self::Element(v)
    }
}

impl From<Attribute> for Node {
    fn from(v: Attribute) -> Self {
        Self::Attribute(v)
    }
}

/// Simple type definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleType {
    /// Type name.
    pub name: String,
    /// Documentation.
    pub doc: Option<String>,
    /// Base type reference (restriction base, or item type for lists).
    pub base: String,
    /// Whether this is a list type.
    pub list: bool,
    /// Whether this is a union type.
    pub union: bool,
    /// Union members: member name to member type reference. An empty
    /// reference is resolved later by member name.
    pub member_types: IndexMap<String, String>,
}

impl SimpleType {
    /// Creates a restriction of `base`.
    #[must_use]
    pub fn new(name: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: base.into(),
            ..Self::default()
        }
    }

    /// Creates a list of `item_type`.
    #[must_use]
    pub fn list(name: impl Into<String>, item_type: impl Into<String>) -> Self {
        Self {
            list: true,
            ..Self::new(name, item_type)
        }
    }

    /// Creates a union of the given `(member name, member type)` pairs.
    #[must_use]
    pub fn union<I, K, V>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            union: true,
            member_types: members
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::new(name, "")
        }
    }

    /// Sets the documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Returns true if this is neither a list nor a union.
    #[must_use]
    pub const fn is_restriction(&self) -> bool {
        !self.list && !self.union
    }
}

/// Complex type definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplexType {
    /// Type name.
    pub name: String,
    /// Documentation.
    pub doc: Option<String>,
    /// Attribute group references, in declaration order.
    pub attribute_groups: Vec<AttributeGroupRef>,
    /// Attributes, in declaration order.
    pub attributes: Vec<Attribute>,
    /// Group references, in declaration order.
    pub groups: Vec<GroupRef>,
    /// Elements, in declaration order.
    pub elements: Vec<Element>,
}

impl ComplexType {
    /// Creates an empty complex type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Appends an element.
    #[must_use]
    pub fn element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Appends an attribute.
    #[must_use]
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Appends a group reference.
    #[must_use]
    pub fn group(mut self, group: GroupRef) -> Self {
        self.groups.push(group);
        self
    }

    /// Appends an attribute group reference.
    #[must_use]
    pub fn attribute_group(mut self, group: AttributeGroupRef) -> Self {
        self.attribute_groups.push(group);
        self
    }
}

/// Model group definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    /// Group name.
    pub name: String,
    /// Documentation.
    pub doc: Option<String>,
    /// Elements, in declaration order.
    pub elements: Vec<Element>,
    /// Nested group references.
    pub groups: Vec<GroupRef>,
}

impl Group {
    /// Creates an empty group.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Attribute group definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeGroup {
    /// Attribute group name.
    pub name: String,
    /// Documentation.
    pub doc: Option<String>,
    /// Attributes, in declaration order.
    pub attributes: Vec<Attribute>,
    /// Nested attribute group references.
    pub attribute_groups: Vec<AttributeGroupRef>,
}

impl AttributeGroup {
    /// Creates an empty attribute group.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Element declaration, either top-level or a member of a type or group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Element name.
    pub name: String,
    /// Documentation.
    pub doc: Option<String>,
    /// Type reference.
    pub type_ref: String,
    /// Whether the element may occur more than once.
    pub plural: bool,
    /// Whether the element may be absent (`minOccurs="0"`).
    pub optional: bool,
}

impl Element {
    /// Creates a singular, required element.
    #[must_use]
    pub fn new(name: impl Into<String>, type_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_ref: type_ref.into(),
            ..Self::default()
        }
    }

    /// Marks the element as repeated.
    #[must_use]
    pub fn repeated(mut self) -> Self {
        self.plural = true;
        self
    }

    /// Marks the element as optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets the documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Attribute declaration, either top-level or a member of a type or group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Documentation.
    pub doc: Option<String>,
    /// Type reference.
    pub type_ref: String,
    /// Whether the attribute holds a repeated value.
    pub plural: bool,
    /// Whether the attribute may be absent.
    pub optional: bool,
}

impl Attribute {
    /// Creates a singular, required attribute.
    #[must_use]
    pub fn new(name: impl Into<String>, type_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_ref: type_ref.into(),
            ..Self::default()
        }
    }

    /// Marks the attribute as repeated.
    #[must_use]
    pub fn repeated(mut self) -> Self {
        self.plural = true;
        self
    }

    /// Marks the attribute as optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets the documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Reference to a model group from a complex type or group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupRef {
    /// Local name of the referenced group.
    pub name: String,
    /// Reference as written, possibly prefixed.
    pub reference: String,
    /// Whether the group may occur more than once.
    pub plural: bool,
}

impl GroupRef {
    /// Creates a singular reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        Self {
            name: xsdgen_core::naming::strip_namespace_prefix(&reference).to_string(),
            reference,
            plural: false,
        }
    }

    /// Marks the reference as repeated.
    #[must_use]
    pub fn repeated(mut self) -> Self {
        self.plural = true;
        self
    }
}

/// Reference to an attribute group from a complex type or attribute group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeGroupRef {
    /// Local name of the referenced attribute group.
    pub name: String,
    /// Reference as written, possibly prefixed.
    pub reference: String,
}

impl AttributeGroupRef {
    /// Creates a reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        Self {
            name: xsdgen_core::naming::strip_namespace_prefix(&reference).to_string(),
            reference,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_accessors() {
        let node: Node = Element::new("customer-id", "xs:string")
            .with_doc("Customer key")
            .into();
        assert_eq!(node.name(), "customer-id");
        assert_eq!(node.doc(), Some("Customer key"));
        assert_eq!(node.kind(), NodeKind::Element);
        assert!(node.kind().is_declaration());
        assert!(!NodeKind::ComplexType.is_declaration());
    }

    #[test]
    fn test_simple_type_constructors() {
        let age = SimpleType::new("Age", "positiveInteger");
        assert!(age.is_restriction());

        let codes = SimpleType::list("Codes", "xs:token");
        assert!(codes.list);
        assert_eq!(codes.base, "xs:token");

        let currency = SimpleType::union("Currency", [("USD", ""), ("EUR", "")]);
        assert!(currency.union);
        assert_eq!(
            currency.member_types.keys().collect::<Vec<_>>(),
            vec!["USD", "EUR"]
        );
    }

    #[test]
    fn test_references_strip_prefix() {
        let group = GroupRef::new("tns:Contact").repeated();
        assert_eq!(group.name, "Contact");
        assert_eq!(group.reference, "tns:Contact");
        assert!(group.plural);

        let attrs = AttributeGroupRef::new("Common");
        assert_eq!(attrs.name, "Common");
    }

    #[test]
    fn test_complex_type_builder_keeps_order() {
        let order = ComplexType::new("Order")
            .element(Element::new("item", "Product").repeated())
            .element(Element::new("note", "string").optional());
        assert_eq!(order.elements[0].name, "item");
        assert!(order.elements[0].plural);
        assert!(order.elements[1].optional);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NodeKind::AttributeGroup.to_string(), "attributeGroup");
    }
}
