//! XSD schema reader.
//!
//! This module reads XML Schema markup into a [`ProtoTree`]. It understands
//! the constructs code generation needs (named and anonymous simple and
//! complex types, model groups, attribute groups, elements, attributes and
//! their documentation) and skips everything else.
//!
//! Anonymous types declared inline on an element or attribute become named
//! nodes. At the top level they carry the declaration's name; inside a
//! definition the name is prefixed with the definition's. They are pushed
//! before the declaration itself so the emit-once cache keeps the full type.

use crate::error::ParseError;
use crate::nodes::{
    Attribute, AttributeGroup, AttributeGroupRef, ComplexType, Element, Group, GroupRef,
    SimpleType,
};
use crate::tree::ProtoTree;
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};
use xsdgen_core::naming::{strip_namespace_prefix, upper_first};

/// Parses an XSD document from a string.
///
/// Every `schema` element in the document contributes to the same tree, so
/// schemas embedded in WSDL `types` sections are read as well.
///
/// # Arguments
/// * `xml` - XSD schema content
///
/// # Returns
/// Proto tree with one node per top-level construct and per inline
/// anonymous type, in document order.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, a required attribute is
/// missing, or the document contains no `schema` element.
pub fn parse_schema(xml: &str) -> Result<ProtoTree, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut tree = ProtoTree::new();
    let mut found = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if local_name(e)? == "schema" {
                    found = true;
                    parse_top_level(&mut reader, &mut tree)?;
                }
            }
            Ok(Event::Empty(ref e)) => {
                if local_name(e)? == "schema" {
                    found = true;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    if !found {
        return Err(ParseError::structure("no schema element found"));
    }

    tracing::debug!(nodes = tree.len(), "parsed schema");
    Ok(tree)
}

/// Attributes of a start tag, decoded to owned strings.
#[derive(Debug, Default)]
struct Attrs(Vec<(String, String)>);

impl Attrs {
    fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn required(&self, element: &str, key: &str) -> Result<&str, ParseError> {
        self.get(key)
            .ok_or_else(|| ParseError::missing_attr(element, key))
    }
}

/// A child element, detached from the read buffer.
#[derive(Debug)]
struct Child {
    tag: String,
    attrs: Attrs,
    /// False for self-closing tags.
    has_content: bool,
}

impl Child {
    fn from_start(e: &BytesStart<'_>, has_content: bool) -> Result<Self, ParseError> {
        let mut attrs = Vec::new();
        for attr in e.attributes().flatten() {
            let key = std::str::from_utf8(attr.key.as_ref())?;
            let value = attr.unescape_value()?;
            attrs.push((key.to_string(), value.into_owned()));
        }

        Ok(Self {
            tag: local_name(e)?,
            attrs: Attrs(attrs),
            has_content,
        })
    }

    /// Returns true if `maxOccurs` allows more than one occurrence.
    fn is_plural(&self) -> Result<bool, ParseError> {
        match self.attrs.get("maxOccurs") {
            None => Ok(false),
            Some("unbounded") => Ok(true),
            Some(value) => value
                .parse::<u64>()
                .map(|max| max > 1)
                .map_err(|_| ParseError::invalid_attr(&self.tag, "maxOccurs", value)),
        }
    }

    /// Returns the `name` attribute, or the local part of `ref`, together
    /// with the type reference (`type`, or `ref` itself).
    fn name_and_type(&self) -> Result<(String, String), ParseError> {
        match (self.attrs.get("name"), self.attrs.get("ref")) {
            (Some(name), _) => Ok((
                name.to_string(),
                self.attrs.get("type").unwrap_or_default().to_string(),
            )),
            (None, Some(reference)) => Ok((
                strip_namespace_prefix(reference).to_string(),
                reference.to_string(),
            )),
            (None, None) => Err(ParseError::missing_attr(&self.tag, "name")),
        }
    }
}

fn local_name(e: &BytesStart<'_>) -> Result<String, ParseError> {
    let local = e.local_name();
    Ok(std::str::from_utf8(local.as_ref())?.to_string())
}

/// Reads the direct children of the current element up to its end tag.
///
/// `on_child` receives every child start tag and must consume the child's
/// content (for example with [`skip`]) when `has_content` is set.
fn for_each_child<F>(reader: &mut Reader<&[u8]>, mut on_child: F) -> Result<(), ParseError>
where
    F: FnMut(&mut Reader<&[u8]>, Child) -> Result<(), ParseError>,
{
    let mut buf = Vec::new();

    loop {
        let child = match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => Child::from_start(e, true)?,
            Ok(Event::Empty(ref e)) => Child::from_start(e, false)?,
            Ok(Event::End(_)) => return Ok(()),
            Ok(Event::Eof) => return Err(ParseError::structure("unexpected end of document")),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {
                buf.clear();
                continue;
            }
        };
        buf.clear();
        on_child(reader, child)?;
    }
}

/// Skips the content of a child that is not interpreted.
fn skip(reader: &mut Reader<&[u8]>, child: &Child) -> Result<(), ParseError> {
    if child.has_content {
        skip_to_end(reader)?;
    }
    Ok(())
}

/// Skips to the end of the current element.
fn skip_to_end(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Reads all text below the current element up to its end tag, with entity
/// and character references resolved.
///
/// Whitespace inside the text is kept as written; only the ends are trimmed.
fn read_text(reader: &mut Reader<&[u8]>) -> Result<String, ParseError> {
    let (trim_start, trim_end) = {
        let config = reader.config();
        (config.trim_text_start, config.trim_text_end)
    };
    reader.config_mut().trim_text(false);
    let text = collect_text(reader);
    let config = reader.config_mut();
    config.trim_text_start = trim_start;
    config.trim_text_end = trim_end;

    Ok(text?.trim().to_string())
}

fn collect_text(reader: &mut Reader<&[u8]>) -> Result<String, ParseError> {
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(ref t)) => {
                text.push_str(&t.xml_content().map_err(quick_xml::Error::from)?);
            }
            Ok(Event::CData(ref c)) => {
                text.push_str(&c.xml_content().map_err(quick_xml::Error::from)?);
            }
            Ok(Event::GeneralRef(ref r)) => push_reference(&mut text, r)?,
            Ok(Event::Start(_)) => {
                depth += 1;
                separate(&mut text);
            }
            Ok(Event::End(_)) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
                separate(&mut text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

/// Appends the replacement text of `&name;` or `&#N;`. Entities that are
/// not predefined are kept as written.
fn push_reference(text: &mut String, reference: &BytesRef<'_>) -> Result<(), ParseError> {
    if let Some(ch) = reference.resolve_char_ref()? {
        text.push(ch);
        return Ok(());
    }

    let name = reference.decode().map_err(quick_xml::Error::from)?;
    match resolve_predefined_entity(&name) {
        Some(value) => text.push_str(value),
        None => {
            text.push('&');
            text.push_str(&name);
            text.push(';');
        }
    }
    Ok(())
}

/// Keeps the text of nested markup apart.
fn separate(text: &mut String) {
    if !text.is_empty() && !text.ends_with(char::is_whitespace) {
        text.push(' ');
    }
}

/// Parses an `annotation`, returning its joined `documentation` text.
fn parse_annotation(
    reader: &mut Reader<&[u8]>,
    child: &Child,
) -> Result<Option<String>, ParseError> {
    if !child.has_content {
        return Ok(None);
    }

    let mut docs: Vec<String> = Vec::new();
    for_each_child(reader, |reader, inner| {
        if inner.tag == "documentation" && inner.has_content {
            let text = read_text(reader)?;
            if !text.is_empty() {
                docs.push(text);
            }
            Ok(())
        } else {
            skip(reader, &inner)
        }
    })?;

    Ok((!docs.is_empty()).then(|| docs.join("\n")))
}

/// Parses the children of a `schema` element.
fn parse_top_level(reader: &mut Reader<&[u8]>, tree: &mut ProtoTree) -> Result<(), ParseError> {
    for_each_child(reader, |reader, child| {
        match child.tag.as_str() {
            "simpleType" => {
                let name = child.attrs.required("simpleType", "name")?.to_string();
                let simple = parse_simple_type(reader, &child, name, tree)?;
                tree.push(simple.into());
            }
            "complexType" => {
                let name = child.attrs.required("complexType", "name")?.to_string();
                let complex = parse_complex_type(reader, &child, name, tree)?;
                tree.push(complex.into());
            }
            "group" => {
                let name = child.attrs.required("group", "name")?.to_string();
                let group = parse_group(reader, &child, name, tree)?;
                tree.push(group.into());
            }
            "attributeGroup" => {
                let name = child.attrs.required("attributeGroup", "name")?.to_string();
                let group = parse_attribute_group(reader, &child, name, tree)?;
                tree.push(group.into());
            }
            "element" => {
                let element = parse_element(reader, &child, "", tree)?;
                tree.push(element.into());
            }
            "attribute" => {
                let attribute = parse_attribute(reader, &child, "", tree)?;
                tree.push(attribute.into());
            }
            _ => skip(reader, &child)?,
        }
        Ok(())
    })
}

/// Parses a simple type definition.
fn parse_simple_type(
    reader: &mut Reader<&[u8]>,
    child: &Child,
    name: String,
    tree: &mut ProtoTree,
) -> Result<SimpleType, ParseError> {
    let mut simple = SimpleType::new(name, "");
    if child.has_content {
        collect_simple(reader, &mut simple, tree)?;
    }
    Ok(simple)
}

/// Reads the derivation of a simple type (restriction, list or union).
fn collect_simple(
    reader: &mut Reader<&[u8]>,
    simple: &mut SimpleType,
    tree: &mut ProtoTree,
) -> Result<(), ParseError> {
    for_each_child(reader, |reader, child| {
        match child.tag.as_str() {
            "annotation" => {
                let doc = parse_annotation(reader, &child)?;
                if simple.doc.is_none() {
                    simple.doc = doc;
                }
            }
            "restriction" => {
                if let Some(base) = child.attrs.get("base") {
                    simple.base = base.to_string();
                }
                if child.has_content {
                    collect_simple(reader, simple, tree)?;
                }
            }
            "list" => {
                simple.list = true;
                if let Some(item) = child.attrs.get("itemType") {
                    simple.base = item.to_string();
                }
                if child.has_content {
                    collect_simple(reader, simple, tree)?;
                }
            }
            "union" => {
                simple.union = true;
                if let Some(members) = child.attrs.get("memberTypes") {
                    for member in members.split_whitespace() {
                        simple
                            .member_types
                            .insert(strip_namespace_prefix(member).to_string(), String::new());
                    }
                }
                if child.has_content {
                    collect_simple(reader, simple, tree)?;
                }
            }
            "simpleType" => {
                // Anonymous type nested in a restriction, list or union.
                let inner = parse_simple_type(reader, &child, String::new(), tree)?;
                if simple.union {
                    if !inner.base.is_empty() {
                        let key = anonymous_member(simple);
                        simple.member_types.insert(key, inner.base);
                    }
                } else if simple.base.is_empty() {
                    simple.base = inner.base;
                }
            }
            _ => skip(reader, &child)?,
        }
        Ok(())
    })
}

/// Positional name for an anonymous union member: `member1`, `member2`,
/// skipping names already used by named members.
fn anonymous_member(simple: &SimpleType) -> String {
    let mut position = simple.member_types.len() + 1;
    loop {
        let key = format!("member{position}");
        if !simple.member_types.contains_key(&key) {
            return key;
        }
        position += 1;
    }
}

/// Name of an anonymous type declared inline on `declaration`. Inside a
/// named definition it is qualified by that definition's name, so `addr`
/// in `Billing` gets `BillingAddr`.
fn anonymous_type_name(scope: &str, declaration: &str) -> String {
    if scope.is_empty() {
        declaration.to_string()
    } else {
        format!("{scope}{}", upper_first(declaration))
    }
}

/// Members collected from a content model.
#[derive(Debug, Default)]
struct Content {
    doc: Option<String>,
    attribute_groups: Vec<AttributeGroupRef>,
    attributes: Vec<Attribute>,
    groups: Vec<GroupRef>,
    elements: Vec<Element>,
}

/// Collects members from a content model, descending through compositors
/// and content derivations. `repeated` is set inside a compositor that may
/// occur more than once, which makes every element below it plural.
/// `scope` is the name of the enclosing definition.
fn collect_content(
    reader: &mut Reader<&[u8]>,
    content: &mut Content,
    scope: &str,
    repeated: bool,
    tree: &mut ProtoTree,
) -> Result<(), ParseError> {
    for_each_child(reader, |reader, child| {
        match child.tag.as_str() {
            "annotation" => {
                let doc = parse_annotation(reader, &child)?;
                if content.doc.is_none() {
                    content.doc = doc;
                }
            }
            "element" => {
                let mut element = parse_element(reader, &child, scope, tree)?;
                element.plural |= repeated;
                content.elements.push(element);
            }
            "attribute" => {
                let attribute = parse_attribute(reader, &child, scope, tree)?;
                content.attributes.push(attribute);
            }
            "group" => {
                let reference = child.attrs.required("group", "ref")?;
                let mut group = GroupRef::new(reference);
                group.plural = repeated || child.is_plural()?;
                content.groups.push(group);
                skip(reader, &child)?;
            }
            "attributeGroup" => {
                let reference = child.attrs.required("attributeGroup", "ref")?;
                content
                    .attribute_groups
                    .push(AttributeGroupRef::new(reference));
                skip(reader, &child)?;
            }
            "sequence" | "choice" | "all" => {
                let plural = repeated || child.is_plural()?;
                if child.has_content {
                    collect_content(reader, content, scope, plural, tree)?;
                }
            }
            "complexContent" | "simpleContent" | "extension" | "restriction" => {
                if child.has_content {
                    collect_content(reader, content, scope, repeated, tree)?;
                }
            }
            _ => skip(reader, &child)?,
        }
        Ok(())
    })
}

/// Parses a complex type definition.
fn parse_complex_type(
    reader: &mut Reader<&[u8]>,
    child: &Child,
    name: String,
    tree: &mut ProtoTree,
) -> Result<ComplexType, ParseError> {
    let mut content = Content::default();
    if child.has_content {
        collect_content(reader, &mut content, &name, false, tree)?;
    }

    Ok(ComplexType {
        name,
        doc: content.doc,
        attribute_groups: content.attribute_groups,
        attributes: content.attributes,
        groups: content.groups,
        elements: content.elements,
    })
}

/// Parses a model group definition.
fn parse_group(
    reader: &mut Reader<&[u8]>,
    child: &Child,
    name: String,
    tree: &mut ProtoTree,
) -> Result<Group, ParseError> {
    let mut content = Content::default();
    if child.has_content {
        collect_content(reader, &mut content, &name, false, tree)?;
    }

    Ok(Group {
        name,
        doc: content.doc,
        elements: content.elements,
        groups: content.groups,
    })
}

/// Parses an attribute group definition.
fn parse_attribute_group(
    reader: &mut Reader<&[u8]>,
    child: &Child,
    name: String,
    tree: &mut ProtoTree,
) -> Result<AttributeGroup, ParseError> {
    let mut content = Content::default();
    if child.has_content {
        collect_content(reader, &mut content, &name, false, tree)?;
    }

    Ok(AttributeGroup {
        name,
        doc: content.doc,
        attributes: content.attributes,
        attribute_groups: content.attribute_groups,
    })
}

/// Parses an element declaration or reference.
fn parse_element(
    reader: &mut Reader<&[u8]>,
    child: &Child,
    scope: &str,
    tree: &mut ProtoTree,
) -> Result<Element, ParseError> {
    let (name, type_ref) = child.name_and_type()?;
    let mut element = Element::new(name, type_ref);
    element.plural = child.is_plural()?;
    element.optional = child.attrs.get("minOccurs") == Some("0");

    if child.has_content {
        for_each_child(reader, |reader, inner| {
            match inner.tag.as_str() {
                "annotation" => element.doc = parse_annotation(reader, &inner)?,
                "complexType" => {
                    let name = anonymous_type_name(scope, &element.name);
                    let complex = parse_complex_type(reader, &inner, name.clone(), tree)?;
                    tree.push(complex.into());
                    element.type_ref = name;
                }
                "simpleType" => {
                    let name = anonymous_type_name(scope, &element.name);
                    let simple = parse_simple_type(reader, &inner, name.clone(), tree)?;
                    tree.push(simple.into());
                    element.type_ref = name;
                }
                _ => skip(reader, &inner)?,
            }
            Ok(())
        })?;
    }

    if element.type_ref.is_empty() {
        element.type_ref = "anyType".to_string();
    }
    Ok(element)
}

/// Parses an attribute declaration or reference.
fn parse_attribute(
    reader: &mut Reader<&[u8]>,
    child: &Child,
    scope: &str,
    tree: &mut ProtoTree,
) -> Result<Attribute, ParseError> {
    let (name, type_ref) = child.name_and_type()?;
    let mut attribute = Attribute::new(name, type_ref);
    attribute.optional = child.attrs.get("use") != Some("required");

    if child.has_content {
        for_each_child(reader, |reader, inner| {
            match inner.tag.as_str() {
                "annotation" => attribute.doc = parse_annotation(reader, &inner)?,
                "simpleType" => {
                    let name = anonymous_type_name(scope, &attribute.name);
                    let simple = parse_simple_type(reader, &inner, name.clone(), tree)?;
                    attribute.plural = simple.list;
                    tree.push(simple.into());
                    attribute.type_ref = name;
                }
                _ => skip(reader, &inner)?,
            }
            Ok(())
        })?;
    }

    if attribute.type_ref.is_empty() {
        attribute.type_ref = "anySimpleType".to_string();
    }
    Ok(attribute)
}
