//! Go target: structs with `encoding/xml` tags.

use super::{BANNER, Target, UniqueNames};
use crate::config::GeneratorConfig;
use crate::decl::{Declaration, Member, MemberKind, Shape, TypeRef};
use crate::state::{Feature, Features};
use xsdgen_core::Language;
use xsdgen_core::naming::{to_snake_case, type_identifier};

/// Renders Go source.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTarget;

impl GoTarget {
    fn type_name(ty: &TypeRef, features: &mut Features) -> String {
        if ty.name.contains("time.Time") {
            features.raise(Feature::Time);
        }
        if ty.name.contains("xml.Name") {
            features.raise(Feature::XmlTags);
        }
        if ty.plural {
            format!("[]{}", ty.name)
        } else {
            ty.name.clone()
        }
    }

    fn field(member: &Member, names: &mut UniqueNames, features: &mut Features) -> String {
        let ty = Self::type_name(&member.ty, features);

        // Groups are inlined by embedding, which a slice cannot be.
        if member.kind.is_group() && !member.ty.plural {
            return format!("\t{ty}\n");
        }

        let mut ident = type_identifier(&member.name);
        if member.kind == MemberKind::Attribute {
            ident.push_str("Attr");
        }
        let ident = names.claim(ident, "Value");

        let mut tag = member.name.clone();
        if member.kind == MemberKind::Attribute {
            tag.push_str(",attr");
        }
        if member.optional {
            tag.push_str(",omitempty");
        }
        format!("\t{ident}\t{ty}\t`xml:\"{tag}\"`\n")
    }
}

impl Target for GoTarget {
    fn language(&self) -> Language {
        Language::Go
    }

    fn render(
        &self,
        decl: &Declaration,
        features: &mut Features,
        _config: &GeneratorConfig,
    ) -> String {
        let mut output = String::new();

        match &decl.shape {
            Shape::Alias(ty) if decl.needs_tag() => {
                features.raise(Feature::XmlTags);
                let ty = Self::type_name(ty, features);
                output.push_str(&format!("type {} struct {{\n", decl.ident));
                output.push_str(&format!("\tXMLName\txml.Name\t`xml:\"{}\"`\n", decl.name));
                output.push_str(&format!("\tValue\t{ty}\t`xml:\",chardata\"`\n"));
                output.push_str("}\n");
            }
            Shape::Alias(ty) => {
                let ty = Self::type_name(ty, features);
                output.push_str(&format!("type {} {}\n", decl.ident, ty));
            }
            Shape::Record(members) | Shape::Union(members) => {
                output.push_str(&format!("type {} struct {{\n", decl.ident));
                if decl.needs_tag() {
                    features.raise(Feature::XmlTags);
                    output.push_str(&format!("\tXMLName\txml.Name\t`xml:\"{}\"`\n", decl.name));
                }
                let mut names = UniqueNames::new();
                for member in members {
                    output.push_str(&Self::field(member, &mut names, features));
                }
                output.push_str("}\n");
            }
        }

        output
    }

    fn assemble(&self, body: &str, features: &Features, config: &GeneratorConfig) -> String {
        let mut output = format!("// {BANNER}\n\n");
        let package = to_snake_case(config.package()).replace(['_', '.'], "");
        output.push_str(&format!("package {package}\n\n"));

        let mut imports = Vec::new();
        if features.contains(Feature::XmlTags) {
            imports.push("encoding/xml");
        }
        if features.contains(Feature::Time) {
            imports.push("time");
        }
        match imports.as_slice() {
            [] => {}
            [single] => output.push_str(&format!("import \"{single}\"\n\n")),
            many => {
                output.push_str("import (\n");
                for import in many {
                    output.push_str(&format!("\t\"{import}\"\n"));
                }
                output.push_str(")\n\n");
            }
        }

        output.push_str(body);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(name: &str, plural: bool) -> TypeRef {
        TypeRef {
            name: name.to_string(),
            builtin: true,
            plural,
        }
    }

    #[test]
    fn test_render_alias() {
        let decl = Declaration {
            name: "Age".to_string(),
            ident: "Age".to_string(),
            doc: None,
            shape: Shape::Alias(ty("int", false)),
        };
        let mut features = Features::new();
        let output = GoTarget.render(&decl, &mut features, &GeneratorConfig::default());
        assert_eq!(output, "type Age int\n");
        assert!(features.is_empty());
    }

    #[test]
    fn test_render_tagged_alias() {
        let decl = Declaration {
            name: "customer-id".to_string(),
            ident: "CustomerId".to_string(),
            doc: None,
            shape: Shape::Alias(ty("string", false)),
        };
        let mut features = Features::new();
        let output = GoTarget.render(&decl, &mut features, &GeneratorConfig::default());
        assert!(output.contains("type CustomerId struct {"));
        assert!(output.contains("`xml:\"customer-id\"`"));
        assert!(output.contains("`xml:\",chardata\"`"));
        assert!(features.contains(Feature::XmlTags));
    }

    #[test]
    fn test_render_record() {
        let decl = Declaration {
            name: "Order".to_string(),
            ident: "Order".to_string(),
            doc: None,
            shape: Shape::Record(vec![
                Member {
                    name: "Audit".to_string(),
                    kind: MemberKind::AttributeGroup,
                    ty: ty("Audit", false),
                    optional: false,
                },
                Member {
                    name: "id".to_string(),
                    kind: MemberKind::Attribute,
                    ty: ty("string", false),
                    optional: true,
                },
                Member {
                    name: "item".to_string(),
                    kind: MemberKind::Element,
                    ty: ty("Product", true),
                    optional: false,
                },
                Member {
                    name: "placed".to_string(),
                    kind: MemberKind::Element,
                    ty: ty("time.Time", false),
                    optional: false,
                },
            ]),
        };
        let mut features = Features::new();
        let output = GoTarget.render(&decl, &mut features, &GeneratorConfig::default());

        assert_eq!(
            output,
            "type Order struct {\n\
             \tAudit\n\
             \tIdAttr\tstring\t`xml:\"id,attr,omitempty\"`\n\
             \tItem\t[]Product\t`xml:\"item\"`\n\
             \tPlaced\ttime.Time\t`xml:\"placed\"`\n\
             }\n"
        );
        assert!(features.contains(Feature::Time));
        assert!(!features.contains(Feature::XmlTags));
    }

    #[test]
    fn test_assemble_imports() {
        let config = GeneratorConfig::builder()
            .package("order-service")
            .build()
            .expect("valid config");
        let features: Features = [Feature::XmlTags, Feature::Time].into_iter().collect();
        let output = GoTarget.assemble("type A int\n", &features, &config);

        assert!(output.starts_with("// Code generated by xsdgen. DO NOT EDIT.\n\npackage orderservice\n"));
        assert!(output.contains("import (\n\t\"encoding/xml\"\n\t\"time\"\n)\n"));
        assert!(output.ends_with("type A int\n"));
    }
}
