//! Language-neutral declaration model.
//!
//! Every proto tree node is turned into a [`Declaration`] before a language
//! target renders it. Type references are already resolved to the target
//! language's spelling; member identifiers are left to the target.

use xsdgen_core::Language;
use xsdgen_core::naming::type_identifier;
use xsdgen_schema::{
    Attribute, AttributeGroup, ComplexType, Element, Group, Node, SimpleType, TypeResolver,
};

/// A resolved type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Type name in the target language.
    pub name: String,
    /// Whether the reference resolved to a built-in type.
    pub builtin: bool,
    /// Whether a sequence of the type is meant.
    pub plural: bool,
}

/// Origin of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Reference to an attribute group.
    AttributeGroup,
    /// Attribute.
    Attribute,
    /// Reference to a model group.
    Group,
    /// Element, or member of a union.
    Element,
}

impl MemberKind {
    /// Returns true for members whose content is inlined into the parent
    /// rather than wrapped in an element of its own.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::AttributeGroup | Self::Group)
    }
}

/// A member of a record or union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Schema name, used as the serialization tag.
    pub name: String,
    /// Member origin.
    pub kind: MemberKind,
    /// Resolved member type.
    pub ty: TypeRef,
    /// Whether the member may be absent.
    pub optional: bool,
}

/// Shape of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Named alias of another type, or of a sequence of it.
    Alias(TypeRef),
    /// Composite with one member per attribute group, attribute, group and
    /// element, in that order.
    Record(Vec<Member>),
    /// Composite with one alternative per union member.
    Union(Vec<Member>),
}

/// A declaration ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Schema name.
    pub name: String,
    /// Type identifier.
    pub ident: String,
    /// Documentation.
    pub doc: Option<String>,
    /// Shape.
    pub shape: Shape,
}

impl Declaration {
    /// Returns true if the identifier differs from the schema name, in
    /// which case the declaration carries the schema name as a tag.
    #[must_use]
    pub fn needs_tag(&self) -> bool {
        self.ident != self.name
    }

    /// Returns the members of records and unions.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        match &self.shape {
            Shape::Alias(_) => &[],
            Shape::Record(members) | Shape::Union(members) => members,
        }
    }

    /// Iterates every type referenced by the declaration.
    pub fn types(&self) -> impl Iterator<Item = &TypeRef> {
        let alias = match &self.shape {
            Shape::Alias(ty) => Some(ty),
            _ => None,
        };
        alias.into_iter().chain(self.members().iter().map(|m| &m.ty))
    }

    /// Renders the documentation comment: `<Ident> is <doc>`, or the
    /// placeholder `<Ident> ...` when the node has no documentation.
    #[must_use]
    pub fn comment(&self, prefix: &str) -> String {
        let text = match self.doc.as_deref().map(str::trim) {
            Some(doc) if !doc.is_empty() => format!("{} is {}", self.ident, doc),
            _ => format!("{} ...", self.ident),
        };

        let mut comment = String::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                comment.push_str(&format!("{prefix}\n"));
            } else {
                comment.push_str(&format!("{prefix} {line}\n"));
            }
        }
        comment
    }
}

/// Builds declarations for one language.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationBuilder<'a> {
    resolver: TypeResolver<'a>,
    language: Language,
}

impl<'a> DeclarationBuilder<'a> {
    /// Creates a builder resolving types with `resolver` for `language`.
    #[must_use]
    pub fn new(resolver: TypeResolver<'a>, language: Language) -> Self {
        Self { resolver, language }
    }

    /// Builds the declaration of a node.
    #[must_use]
    pub fn build(&self, node: &Node) -> Declaration {
        match node {
            Node::SimpleType(v) => self.simple_type(v),
            Node::ComplexType(v) => self.complex_type(v),
            Node::Group(v) => self.group(v),
            Node::AttributeGroup(v) => self.attribute_group(v),
            Node::Element(v) => self.element(v),
            Node::Attribute(v) => self.attribute(v),
        }
    }

    fn resolve(&self, reference: &str, plural: bool) -> TypeRef {
        TypeRef {
            name: self.resolver.field_type(reference, self.language),
            builtin: self.resolver.is_builtin_reference(reference),
            plural,
        }
    }

    fn declaration(&self, name: &str, doc: Option<&String>, shape: Shape) -> Declaration {
        Declaration {
            name: name.to_string(),
            ident: type_identifier(name),
            doc: doc.cloned(),
            shape,
        }
    }

    fn simple_type(&self, v: &SimpleType) -> Declaration {
        let shape = if v.list {
            Shape::Alias(self.resolve(&v.base, true))
        } else if v.union && !v.member_types.is_empty() {
            let members = v
                .member_types
                .iter()
                .map(|(name, reference)| {
                    // An empty reference is resolved by the member's name.
                    let reference = if reference.is_empty() { name } else { reference };
                    Member {
                        name: name.clone(),
                        kind: MemberKind::Element,
                        ty: self.resolve(reference, false),
                        optional: true,
                    }
                })
                .collect();
            Shape::Union(members)
        } else {
            Shape::Alias(self.resolve(&v.base, false))
        };
        self.declaration(&v.name, v.doc.as_ref(), shape)
    }

    fn complex_type(&self, v: &ComplexType) -> Declaration {
        let mut members = Vec::new();
        for group in &v.attribute_groups {
            members.push(Member {
                name: group.name.clone(),
                kind: MemberKind::AttributeGroup,
                ty: self.resolve(&group.reference, false),
                optional: false,
            });
        }
        members.extend(v.attributes.iter().map(|a| self.attribute_member(a)));
        for group in &v.groups {
            members.push(Member {
                name: group.name.clone(),
                kind: MemberKind::Group,
                ty: self.resolve(&group.reference, group.plural),
                optional: false,
            });
        }
        members.extend(v.elements.iter().map(|e| self.element_member(e)));

        self.declaration(&v.name, v.doc.as_ref(), Shape::Record(members))
    }

    fn group(&self, v: &Group) -> Declaration {
        let mut members: Vec<Member> = Vec::new();
        for group in &v.groups {
            members.push(Member {
                name: group.name.clone(),
                kind: MemberKind::Group,
                ty: self.resolve(&group.reference, group.plural),
                optional: false,
            });
        }
        members.extend(v.elements.iter().map(|e| self.element_member(e)));

        self.declaration(&v.name, v.doc.as_ref(), Shape::Record(members))
    }

    fn attribute_group(&self, v: &AttributeGroup) -> Declaration {
        let mut members: Vec<Member> = Vec::new();
        for group in &v.attribute_groups {
            members.push(Member {
                name: group.name.clone(),
                kind: MemberKind::AttributeGroup,
                ty: self.resolve(&group.reference, false),
                optional: false,
            });
        }
        members.extend(v.attributes.iter().map(|a| self.attribute_member(a)));

        self.declaration(&v.name, v.doc.as_ref(), Shape::Record(members))
    }

    fn element(&self, v: &Element) -> Declaration {
        let shape = Shape::Alias(self.resolve(&v.type_ref, v.plural));
        self.declaration(&v.name, v.doc.as_ref(), shape)
    }

    fn attribute(&self, v: &Attribute) -> Declaration {
        let shape = Shape::Alias(self.resolve(&v.type_ref, v.plural));
        self.declaration(&v.name, v.doc.as_ref(), shape)
    }

    fn attribute_member(&self, v: &Attribute) -> Member {
        Member {
            name: v.name.clone(),
            kind: MemberKind::Attribute,
            ty: self.resolve(&v.type_ref, v.plural),
            optional: v.optional,
        }
    }

    fn element_member(&self, v: &Element) -> Member {
        Member {
            name: v.name.clone(),
            kind: MemberKind::Element,
            ty: self.resolve(&v.type_ref, v.plural),
            optional: v.optional,
        }
    }
}
