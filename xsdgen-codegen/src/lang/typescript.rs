//! TypeScript target: interfaces and type aliases inside a namespace.

use super::{BANNER, Target, UniqueNames, indent};
use crate::config::GeneratorConfig;
use crate::decl::{Declaration, Member, MemberKind, Shape, TypeRef};
use crate::state::{Feature, Features};
use xsdgen_core::Language;
use xsdgen_core::naming::{camel_identifier, type_identifier};

const KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true",
    "try", "typeof", "var", "void", "while", "with",
];

/// Renders TypeScript source.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTarget;

impl TypeScriptTarget {
    fn type_name(ty: &TypeRef, features: &mut Features) -> String {
        if ty.plural {
            features.raise(Feature::Sequence);
            if ty.name.contains(['<', '|', ' ']) {
                format!("Array<{}>", ty.name)
            } else {
                format!("{}[]", ty.name)
            }
        } else {
            ty.name.clone()
        }
    }

    fn property(member: &Member, names: &mut UniqueNames, features: &mut Features) -> String {
        let mut ident = camel_identifier(&member.name);
        if KEYWORDS.contains(&ident.as_str()) {
            ident.push('_');
        }
        let ident = names.claim(ident, "value");

        let tag = match member.kind {
            MemberKind::Attribute | MemberKind::AttributeGroup => "@xmlAttribute",
            MemberKind::Element | MemberKind::Group => "@xmlElement",
        };
        let optional = if member.optional { "?" } else { "" };
        let ty = Self::type_name(&member.ty, features);
        format!(
            "  /** {tag} {} */\n  {ident}{optional}: {ty};\n",
            member.name
        )
    }
}

impl Target for TypeScriptTarget {
    fn language(&self) -> Language {
        Language::TypeScript
    }

    fn render(
        &self,
        decl: &Declaration,
        features: &mut Features,
        _config: &GeneratorConfig,
    ) -> String {
        let mut output = String::new();
        if decl.needs_tag() {
            features.raise(Feature::XmlTags);
            output.push_str(&format!("/** @xmlName {} */\n", decl.name));
        }

        match &decl.shape {
            Shape::Alias(ty) => {
                let ty = Self::type_name(ty, features);
                output.push_str(&format!("export type {} = {};\n", decl.ident, ty));
            }
            Shape::Record(members) | Shape::Union(members) => {
                // Singular groups are inlined through inheritance.
                let (inherited, fields): (Vec<&Member>, Vec<&Member>) = members
                    .iter()
                    .partition(|m| m.kind.is_group() && !m.ty.plural && !m.ty.builtin);

                output.push_str(&format!("export interface {}", decl.ident));
                if !inherited.is_empty() {
                    let parents: Vec<String> = inherited
                        .iter()
                        .map(|m| m.ty.name.clone())
                        .collect();
                    output.push_str(&format!(" extends {}", parents.join(", ")));
                }
                output.push_str(" {\n");

                let mut names = UniqueNames::new();
                for member in fields {
                    output.push_str(&Self::property(member, &mut names, features));
                }
                output.push_str("}\n");
            }
        }

        output
    }

    fn assemble(&self, body: &str, _features: &Features, config: &GeneratorConfig) -> String {
        let mut output = format!("// {BANNER}\n\n");
        output.push_str(&format!(
            "export namespace {} {{\n",
            type_identifier(config.package())
        ));
        output.push_str(&indent(body, "  "));
        output.push_str("}\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, kind: MemberKind, ty: &str, plural: bool, optional: bool) -> Member {
        Member {
            name: name.to_string(),
            kind,
            ty: TypeRef {
                name: ty.to_string(),
                builtin: false,
                plural,
            },
            optional,
        }
    }

    #[test]
    fn test_render_alias() {
        let decl = Declaration {
            name: "Codes".to_string(),
            ident: "Codes".to_string(),
            doc: None,
            shape: Shape::Alias(TypeRef {
                name: "string".to_string(),
                builtin: true,
                plural: true,
            }),
        };
        let mut features = Features::new();
        assert_eq!(
            TypeScriptTarget.render(&decl, &mut features, &GeneratorConfig::default()),
            "export type Codes = string[];\n"
        );
        assert!(features.contains(Feature::Sequence));
    }

    #[test]
    fn test_render_interface() {
        let decl = Declaration {
            name: "order".to_string(),
            ident: "Order".to_string(),
            doc: None,
            shape: Shape::Record(vec![
                member("Audit", MemberKind::AttributeGroup, "Audit", false, false),
                member("class", MemberKind::Attribute, "string", false, true),
                member("item", MemberKind::Element, "Product", true, false),
            ]),
        };
        let mut features = Features::new();
        let output = TypeScriptTarget.render(&decl, &mut features, &GeneratorConfig::default());

        assert_eq!(
            output,
            "/** @xmlName order */\n\
             export interface Order extends Audit {\n  \
             /** @xmlAttribute class */\n  \
             class_?: string;\n  \
             /** @xmlElement item */\n  \
             item: Product[];\n\
             }\n"
        );
        assert!(features.contains(Feature::XmlTags));
    }

    #[test]
    fn test_assemble_namespace() {
        let config = GeneratorConfig::default();
        let output = TypeScriptTarget.assemble("export type A = string;\n", &Features::new(), &config);
        assert_eq!(
            output,
            "// Code generated by xsdgen. DO NOT EDIT.\n\n\
             export namespace Schema {\n  export type A = string;\n}\n"
        );
    }
}
