//! Ruby target: XmlMapper classes inside a module.

use super::{BANNER, Target, UniqueNames, indent};
use crate::config::GeneratorConfig;
use crate::decl::{Declaration, Member, MemberKind, Shape, TypeRef};
use crate::state::{Feature, Features};
use xsdgen_core::Language;
use xsdgen_core::naming::{member_identifier, type_identifier};

/// Ruby types that need `require 'date'`.
const DATE_TYPES: &[&str] = &["Date", "DateTime"];

/// Renders Ruby source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RubyTarget;

impl RubyTarget {
    /// Class reference: core classes are bare constants, generated classes
    /// are qualified by the module as XmlMapper expects.
    fn class_ref(ty: &TypeRef, module: &str, features: &mut Features) -> String {
        if DATE_TYPES.contains(&ty.name.as_str()) {
            features.raise(Feature::Time);
        }
        if ty.builtin {
            ty.name.clone()
        } else {
            format!("'{module}::{}'", ty.name)
        }
    }

    fn mapping(
        member: &Member,
        module: &str,
        names: &mut UniqueNames,
        features: &mut Features,
    ) -> String {
        let ident = names.claim(member_identifier(&member.name), "value");
        let class = Self::class_ref(&member.ty, module, features);
        let method = match member.kind {
            _ if member.ty.plural => "has_many",
            MemberKind::Attribute => "attribute",
            MemberKind::AttributeGroup | MemberKind::Group | MemberKind::Element => "element",
        };
        format!("  {method} :{ident}, {class}, tag: '{}'\n", member.name)
    }

    fn module_name(config: &GeneratorConfig) -> String {
        type_identifier(config.package())
    }
}

impl Target for RubyTarget {
    fn language(&self) -> Language {
        Language::Ruby
    }

    fn render(
        &self,
        decl: &Declaration,
        features: &mut Features,
        config: &GeneratorConfig,
    ) -> String {
        let module = Self::module_name(config);

        match &decl.shape {
            Shape::Alias(ty) => {
                if DATE_TYPES.contains(&ty.name.as_str()) {
                    features.raise(Feature::Time);
                }
                let parent = if ty.plural { "Array" } else { ty.name.as_str() };
                if decl.needs_tag() {
                    features.raise(Feature::Mapper);
                    features.raise(Feature::XmlTags);
                    format!(
                        "class {} < {parent}\n  include XmlMapper\n\n  tag '{}'\nend\n",
                        decl.ident, decl.name
                    )
                } else {
                    format!("class {} < {parent}; end\n", decl.ident)
                }
            }
            Shape::Record(members) | Shape::Union(members) => {
                features.raise(Feature::Mapper);
                let mut output = format!("class {}\n  include XmlMapper\n\n", decl.ident);
                if decl.needs_tag() {
                    features.raise(Feature::XmlTags);
                    output.push_str(&format!("  tag '{}'\n", decl.name));
                }
                let mut names = UniqueNames::new();
                for member in members {
                    output.push_str(&Self::mapping(member, &module, &mut names, features));
                }
                output.push_str("end\n");
                output
            }
        }
    }

    fn assemble(&self, body: &str, features: &Features, config: &GeneratorConfig) -> String {
        let module = Self::module_name(config);

        let mut output = format!("# frozen_string_literal: true\n\n# {BANNER}\n\n");
        if features.contains(Feature::Time) {
            output.push_str("require 'date'\n");
        }
        if features.contains(Feature::Mapper) {
            output.push_str("require 'xmlmapper'\n");
        }
        if features.contains(Feature::Time) || features.contains(Feature::Mapper) {
            output.push('\n');
        }

        output.push_str(&format!("module {module}\n"));
        output.push_str(&indent(body, "  "));
        output.push_str("end\n");
        output
    }
}
