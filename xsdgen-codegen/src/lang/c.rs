//! C target: typedefs and structs in a guarded header.

use super::{BANNER, Target, UniqueNames};
use crate::config::GeneratorConfig;
use crate::decl::{Declaration, Member, MemberKind, Shape, TypeRef};
use crate::state::{Feature, Features};
use xsdgen_core::Language;
use xsdgen_core::naming::member_identifier;

const KEYWORDS: &[&str] = &[
    "auto", "bool", "break", "case", "char", "const", "continue", "default", "do", "double",
    "else", "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while",
];

/// Renders a C header.
#[derive(Debug, Clone, Copy, Default)]
pub struct CTarget;

impl CTarget {
    fn raise_for(ty: &TypeRef, features: &mut Features) {
        if ty.name == "bool" {
            features.raise(Feature::Boolean);
        }
    }

    /// Member declaration lines; sequences are a pointer plus a count.
    fn field(member: &Member, names: &mut UniqueNames, features: &mut Features) -> String {
        Self::raise_for(&member.ty, features);

        let mut ident = member_identifier(&member.name);
        if KEYWORDS.contains(&ident.as_str()) {
            ident.push('_');
        }
        let ident = names.claim(ident, "value");
        let tag = match member.kind {
            MemberKind::Attribute => format!("{},attr", member.name),
            _ => member.name.clone(),
        };

        if member.ty.plural {
            features.raise(Feature::Sequence);
            format!(
                "    {}* {ident}; /* xml:\"{tag}\" */\n    size_t {ident}_count;\n",
                member.ty.name
            )
        } else {
            format!("    {} {ident}; /* xml:\"{tag}\" */\n", member.ty.name)
        }
    }
}

impl Target for CTarget {
    fn language(&self) -> Language {
        Language::C
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
            output.push_str(&format!("/* xml:\"{}\" */\n", decl.name));
        }

        match &decl.shape {
            Shape::Alias(ty) => {
                Self::raise_for(ty, features);
                let pointer = if ty.plural { "*" } else { "" };
                output.push_str(&format!("typedef {}{pointer} {};\n", ty.name, decl.ident));
            }
            Shape::Record(members) => {
                output.push_str("typedef struct {\n");
                let mut names = UniqueNames::new();
                for member in members {
                    output.push_str(&Self::field(member, &mut names, features));
                }
                output.push_str(&format!("}} {};\n", decl.ident));
            }
            Shape::Union(members) => {
                output.push_str("typedef union {\n");
                let mut names = UniqueNames::new();
                for member in members {
                    output.push_str(&Self::field(member, &mut names, features));
                }
                output.push_str(&format!("}} {};\n", decl.ident));
            }
        }

        output
    }

    fn assemble(&self, body: &str, features: &Features, config: &GeneratorConfig) -> String {
        let guard = format!(
            "{}_H",
            member_identifier(config.package()).to_ascii_uppercase()
        );

        let mut output = format!("// {BANNER}\n\n");
        output.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n"));
        if features.contains(Feature::Boolean) {
            output.push_str("#include <stdbool.h>\n");
        }
        if features.contains(Feature::Sequence) {
            output.push_str("#include <stddef.h>\n");
        }
        if features.contains(Feature::Boolean) || features.contains(Feature::Sequence) {
            output.push('\n');
        }

        output.push_str("#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n");
        output.push_str(body);
        output.push_str("\n#ifdef __cplusplus\n}\n#endif\n\n");
        output.push_str(&format!("#endif /* {guard} */\n"));
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
            shape: Shape::Alias(ty("unsigned int", false)),
        };
        let mut features = Features::new();
        let output = CTarget.render(&decl, &mut features, &GeneratorConfig::default());
        assert_eq!(output, "typedef unsigned int Age;\n");
    }

    #[test]
    fn test_render_struct() {
        let decl = Declaration {
            name: "Order".to_string(),
            ident: "Order".to_string(),
            doc: None,
            shape: Shape::Record(vec![
                Member {
                    name: "paid".to_string(),
                    kind: MemberKind::Attribute,
                    ty: ty("bool", false),
                    optional: false,
                },
                Member {
                    name: "item".to_string(),
                    kind: MemberKind::Element,
                    ty: ty("Product", true),
                    optional: false,
                },
            ]),
        };
        let mut features = Features::new();
        let output = CTarget.render(&decl, &mut features, &GeneratorConfig::default());

        assert_eq!(
            output,
            "typedef struct {\n\
             \x20   bool paid; /* xml:\"paid,attr\" */\n\
             \x20   Product* item; /* xml:\"item\" */\n\
             \x20   size_t item_count;\n\
             } Order;\n"
        );
        assert!(features.contains(Feature::Boolean));
        assert!(features.contains(Feature::Sequence));
    }

    #[test]
    fn test_render_union_escapes_keywords() {
        let decl = Declaration {
            name: "Value".to_string(),
            ident: "Value".to_string(),
            doc: None,
            shape: Shape::Union(vec![Member {
                name: "int".to_string(),
                kind: MemberKind::Element,
                ty: ty("int", false),
                optional: true,
            }]),
        };
        let output = CTarget.render(&decl, &mut Features::new(), &GeneratorConfig::default());
        assert!(output.starts_with("typedef union {\n"));
        assert!(output.contains("    int int_; /* xml:\"int\" */\n"));
    }

    #[test]
    fn test_assemble_guard() {
        let config = GeneratorConfig::builder()
            .package("orderService")
            .build()
            .expect("valid config");
        let features: Features = [Feature::Boolean].into_iter().collect();
        let output = CTarget.assemble("typedef int A;\n", &features, &config);

        assert!(output.contains("#ifndef ORDER_SERVICE_H\n#define ORDER_SERVICE_H\n"));
        assert!(output.contains("#include <stdbool.h>\n"));
        assert!(!output.contains("stddef.h"));
        assert!(output.ends_with("#endif /* ORDER_SERVICE_H */\n"));
    }
}
