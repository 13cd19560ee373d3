//! Java target: JAXB-annotated classes.

use super::{BANNER, Target, UniqueNames, quote};
use crate::config::GeneratorConfig;
use crate::decl::{Declaration, Member, MemberKind, Shape, TypeRef};
use crate::state::{Feature, Features};
use xsdgen_core::Language;
use xsdgen_core::naming::{camel_identifier, to_snake_case};

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while",
];

/// Renders Java source.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTarget;

impl JavaTarget {
    fn type_name(ty: &TypeRef, features: &mut Features) -> String {
        if ty.name.starts_with("List<") {
            features.raise(Feature::Sequence);
        }
        if ty.plural {
            features.raise(Feature::Sequence);
            format!("List<{}>", ty.name)
        } else {
            ty.name.clone()
        }
    }

    fn field(member: &Member, names: &mut UniqueNames, features: &mut Features) -> String {
        let mut ident = camel_identifier(&member.name);
        if KEYWORDS.contains(&ident.as_str()) {
            ident.push('_');
        }
        let ident = names.claim(ident, "value");

        let annotation = match member.kind {
            MemberKind::Attribute => "XmlAttribute",
            _ => "XmlElement",
        };
        let required = if member.optional || member.kind.is_group() {
            ""
        } else {
            ", required = true"
        };
        let ty = Self::type_name(&member.ty, features);
        format!(
            "    @{annotation}(name = {}{required})\n    protected {ty} {ident};\n",
            quote(&member.name)
        )
    }
}

impl Target for JavaTarget {
    fn language(&self) -> Language {
        Language::Java
    }

    fn render(
        &self,
        decl: &Declaration,
        features: &mut Features,
        _config: &GeneratorConfig,
    ) -> String {
        // Every declaration carries JAXB annotations.
        features.raise(Feature::XmlTags);

        let mut output = String::from("@XmlAccessorType(XmlAccessType.FIELD)\n");
        if decl.needs_tag() {
            output.push_str(&format!("@XmlRootElement(name = {})\n", quote(&decl.name)));
        }
        output.push_str(&format!("class {} {{\n", decl.ident));

        match &decl.shape {
            Shape::Alias(ty) => {
                let ty = Self::type_name(ty, features);
                output.push_str(&format!("    @XmlValue\n    protected {ty} value;\n"));
            }
            Shape::Record(members) | Shape::Union(members) => {
                let mut names = UniqueNames::new();
                for (index, member) in members.iter().enumerate() {
                    if index > 0 {
                        output.push('\n');
                    }
                    output.push_str(&Self::field(member, &mut names, features));
                }
            }
        }

        output.push_str("}\n");
        output
    }

    fn assemble(&self, body: &str, features: &Features, config: &GeneratorConfig) -> String {
        let package = to_snake_case(config.package());

        let mut output = format!("// {BANNER}\n\n");
        output.push_str(&format!("package {package};\n\n"));

        let mut imports = Vec::new();
        if features.contains(Feature::Sequence) {
            imports.push("java.util.List");
        }
        if features.contains(Feature::XmlTags) {
            imports.push("javax.xml.bind.annotation.*");
        }
        for import in &imports {
            output.push_str(&format!("import {import};\n"));
        }
        if !imports.is_empty() {
            output.push('\n');
        }

        output.push_str(body);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_value_class() {
        let decl = Declaration {
            name: "customer-id".to_string(),
            ident: "CustomerId".to_string(),
            doc: None,
            shape: Shape::Alias(TypeRef {
                name: "String".to_string(),
                builtin: true,
                plural: false,
            }),
        };
        let mut features = Features::new();
        let output = JavaTarget.render(&decl, &mut features, &GeneratorConfig::default());

        assert_eq!(
            output,
            "@XmlAccessorType(XmlAccessType.FIELD)\n\
             @XmlRootElement(name = \"customer-id\")\n\
             class CustomerId {\n    \
             @XmlValue\n    \
             protected String value;\n\
             }\n"
        );
        assert!(features.contains(Feature::XmlTags));
    }

    #[test]
    fn test_render_fields() {
        let decl = Declaration {
            name: "Order".to_string(),
            ident: "Order".to_string(),
            doc: None,
            shape: Shape::Record(vec![
                Member {
                    name: "id".to_string(),
                    kind: MemberKind::Attribute,
                    ty: TypeRef {
                        name: "String".to_string(),
                        builtin: true,
                        plural: false,
                    },
                    optional: false,
                },
                Member {
                    name: "item".to_string(),
                    kind: MemberKind::Element,
                    ty: TypeRef {
                        name: "Product".to_string(),
                        builtin: false,
                        plural: true,
                    },
                    optional: true,
                },
            ]),
        };
        let mut features = Features::new();
        let output = JavaTarget.render(&decl, &mut features, &GeneratorConfig::default());

        assert!(!output.contains("XmlRootElement"));
        assert!(output.contains(
            "    @XmlAttribute(name = \"id\", required = true)\n    protected String id;\n"
        ));
        assert!(output.contains("    @XmlElement(name = \"item\")\n    protected List<Product> item;\n"));
        assert!(features.contains(Feature::Sequence));
    }

    #[test]
    fn test_assemble_package() {
        let config = GeneratorConfig::builder()
            .package("OrderService")
            .build()
            .expect("valid config");
        let features: Features = [Feature::XmlTags, Feature::Sequence].into_iter().collect();
        let output = JavaTarget.assemble("class A {\n}\n", &features, &config);

        assert!(output.contains("package order_service;\n"));
        assert!(output.contains("import java.util.List;\nimport javax.xml.bind.annotation.*;\n"));
        assert!(output.ends_with("class A {\n}\n"));
    }
}
