//! Rust target: serde-annotated structs, enums and type aliases.
//!
//! Attribute members are renamed with an `@` prefix, the convention
//! `quick-xml`'s serde support uses to tell attributes from child elements.
//! Group references are flattened into their parent.

use super::{BANNER, Target, UniqueNames, indent, quote};
use crate::config::GeneratorConfig;
use crate::decl::{Declaration, Member, MemberKind, Shape, TypeRef};
use crate::state::{Feature, Features};
use xsdgen_core::Language;
use xsdgen_core::naming::{member_identifier, type_identifier};

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "gen", "macro", "override",
    "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Keywords that cannot be raw identifiers.
const RESERVED: &[&str] = &["crate", "self", "super", "Self"];

const DERIVES: &str = "#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n";

/// Renders Rust source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTarget;

impl RustTarget {
    fn field_ident(name: &str) -> String {
        let ident = member_identifier(name);
        if RESERVED.contains(&ident.as_str()) {
            format!("{ident}_")
        } else if KEYWORDS.contains(&ident.as_str()) {
            format!("r#{ident}")
        } else {
            ident
        }
    }

    fn type_name(ty: &TypeRef) -> String {
        if ty.plural {
            format!("Vec<{}>", ty.name)
        } else {
            ty.name.clone()
        }
    }

    fn field(member: &Member, names: &mut UniqueNames) -> String {
        let ident = names.claim(Self::field_ident(&member.name), "value");
        let mut ty = Self::type_name(&member.ty);

        let mut output = String::new();
        match member.kind {
            MemberKind::AttributeGroup | MemberKind::Group => {
                output.push_str("    #[serde(flatten)]\n");
            }
            MemberKind::Attribute => {
                output.push_str(&format!(
                    "    #[serde(rename = {}",
                    quote(&format!("@{}", member.name))
                ));
            }
            MemberKind::Element => {
                output.push_str(&format!("    #[serde(rename = {}", quote(&member.name)));
            }
        }
        if !member.kind.is_group() {
            if member.optional {
                ty = format!("Option<{ty}>");
                output.push_str(", default, skip_serializing_if = \"Option::is_none\"");
            } else if member.ty.plural {
                output.push_str(", default");
            }
            output.push_str(")]\n");
        }
        output.push_str(&format!("    pub {ident}: {ty},\n"));
        output
    }

    fn variant(member: &Member, names: &mut UniqueNames) -> String {
        let ident = names.claim(type_identifier(&member.name), "Value");
        let ty = Self::type_name(&member.ty);
        format!(
            "    #[serde(rename = {})]\n    {ident}({ty}),\n",
            quote(&member.name)
        )
    }
}

impl Target for RustTarget {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn render(
        &self,
        decl: &Declaration,
        features: &mut Features,
        _config: &GeneratorConfig,
    ) -> String {
        let mut output = String::new();
        let rename = format!("#[serde(rename = {})]\n", quote(&decl.name));

        match &decl.shape {
            Shape::Alias(ty) if decl.needs_tag() => {
                features.raise(Feature::XmlTags);
                output.push_str(DERIVES);
                output.push_str(&rename);
                output.push_str(&format!(
                    "pub struct {}(pub {});\n",
                    decl.ident,
                    Self::type_name(ty)
                ));
            }
            Shape::Alias(ty) => {
                output.push_str(&format!(
                    "pub type {} = {};\n",
                    decl.ident,
                    Self::type_name(ty)
                ));
            }
            Shape::Record(members) => {
                features.raise(Feature::XmlTags);
                output.push_str(DERIVES);
                if decl.needs_tag() {
                    output.push_str(&rename);
                }
                output.push_str(&format!("pub struct {} {{\n", decl.ident));
                let mut names = UniqueNames::new();
                for member in members {
                    output.push_str(&Self::field(member, &mut names));
                }
                output.push_str("}\n");
            }
            Shape::Union(members) => {
                features.raise(Feature::XmlTags);
                output.push_str(DERIVES);
                if decl.needs_tag() {
                    output.push_str(&rename);
                }
                output.push_str(&format!("pub enum {} {{\n", decl.ident));
                let mut names = UniqueNames::new();
                for member in members {
                    output.push_str(&Self::variant(member, &mut names));
                }
                output.push_str("}\n");
            }
        }

        output
    }

    fn assemble(&self, body: &str, features: &Features, config: &GeneratorConfig) -> String {
        let module = Self::field_ident(config.package());

        let mut output = format!("// {BANNER}\n\n");
        output.push_str("#![allow(dead_code, non_camel_case_types, clippy::upper_case_acronyms)]\n\n");
        output.push_str(&format!("pub mod {module} {{\n"));
        if features.contains(Feature::XmlTags) {
            output.push_str("    use serde::{Deserialize, Serialize};\n\n");
        }
        output.push_str(&indent(body, "    "));
        output.push_str("}\n");
        output
    }
}
