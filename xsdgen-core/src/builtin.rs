//! Built-in XSD type table.
//!
//! Maps every XSD 1.0 primitive and derived simple type (plus the `xml:*`
//! attribute types) to its spelling in each target language. Several XSD
//! types deliberately collapse onto the same target type.
//!
//! See <https://www.w3.org/TR/xmlschema-2/#datatype>.

use crate::language::Language;

/// One row of the table: XSD name and spellings in `Language` column order
/// (Go, TypeScript, C, Java, Rust, Ruby).
pub type BuiltinRow = (&'static str, [&'static str; 6]);

/// Built-in types sorted by XSD name (byte order), searched with binary search.
pub static BUILTIN_TYPES: &[BuiltinRow] = &[
    ("ENTITIES", ["[]string", "Array<string>", "char**", "List<String>", "Vec<String>", "Array"]),
    ("ENTITY", ["string", "string", "char*", "String", "String", "String"]),
    ("ID", ["string", "string", "char*", "String", "String", "String"]),
    ("IDREF", ["string", "string", "char*", "String", "String", "String"]),
    ("IDREFS", ["[]string", "Array<string>", "char**", "List<String>", "Vec<String>", "Array"]),
    ("NCName", ["string", "string", "char*", "String", "String", "String"]),
    ("NMTOKEN", ["string", "string", "char*", "String", "String", "String"]),
    ("NMTOKENS", ["[]string", "Array<string>", "char**", "List<String>", "Vec<String>", "Array"]),
    ("NOTATION", ["[]string", "Array<string>", "char**", "List<String>", "Vec<String>", "Array"]),
    ("Name", ["string", "string", "char*", "String", "String", "String"]),
    ("QName", ["xml.Name", "string", "char*", "String", "String", "String"]),
    ("anySimpleType", ["string", "string", "char*", "String", "String", "String"]),
    ("anyType", ["string", "string", "char*", "String", "String", "String"]),
    ("anyURI", ["string", "string", "char*", "String", "String", "String"]),
    ("base64Binary", ["[]byte", "Uint8Array", "unsigned char*", "byte[]", "String", "String"]),
    ("boolean", ["bool", "boolean", "bool", "Boolean", "bool", "Boolean"]),
    ("byte", ["int8", "number", "signed char", "Byte", "i8", "Integer"]),
    ("date", ["time.Time", "string", "char*", "String", "String", "Date"]),
    ("dateTime", ["time.Time", "string", "char*", "String", "String", "DateTime"]),
    ("decimal", ["float64", "number", "double", "Double", "f64", "Decimal"]),
    ("double", ["float64", "number", "double", "Double", "f64", "Float"]),
    ("duration", ["string", "string", "char*", "String", "String", "String"]),
    ("float", ["float32", "number", "float", "Float", "f32", "Float"]),
    ("gDay", ["time.Time", "string", "char*", "String", "String", "String"]),
    ("gMonth", ["time.Time", "string", "char*", "String", "String", "String"]),
    ("gMonthDay", ["time.Time", "string", "char*", "String", "String", "String"]),
    ("gYear", ["time.Time", "string", "char*", "String", "String", "String"]),
    ("gYearMonth", ["time.Time", "string", "char*", "String", "String", "String"]),
    ("hexBinary", ["[]byte", "Uint8Array", "unsigned char*", "byte[]", "String", "String"]),
    ("int", ["int", "number", "int", "Integer", "i32", "Integer"]),
    ("integer", ["int", "number", "int", "Integer", "i32", "Integer"]),
    ("language", ["string", "string", "char*", "String", "String", "String"]),
    ("long", ["int64", "number", "long long", "Long", "i64", "Integer"]),
    ("negativeInteger", ["int", "number", "int", "Integer", "i32", "Integer"]),
    ("nonNegativeInteger", ["int", "number", "unsigned int", "Integer", "u32", "Integer"]),
    ("nonPositiveInteger", ["int", "number", "int", "Integer", "i32", "Integer"]),
    ("normalizedString", ["string", "string", "char*", "String", "String", "String"]),
    ("positiveInteger", ["int", "number", "unsigned int", "Integer", "u32", "Integer"]),
    ("short", ["int16", "number", "short", "Short", "i16", "Integer"]),
    ("string", ["string", "string", "char*", "String", "String", "String"]),
    ("time", ["time.Time", "string", "char*", "String", "String", "Time"]),
    ("token", ["string", "string", "char*", "String", "String", "String"]),
    ("unsignedByte", ["uint8", "number", "unsigned char", "Short", "u8", "Integer"]),
    ("unsignedInt", ["uint32", "number", "unsigned int", "Long", "u32", "Integer"]),
    ("unsignedLong", ["uint64", "number", "unsigned long long", "Long", "u64", "Integer"]),
    ("unsignedShort", ["uint16", "number", "unsigned short", "Integer", "u16", "Integer"]),
    ("xml:base", ["string", "string", "char*", "String", "String", "String"]),
    ("xml:id", ["string", "string", "char*", "String", "String", "String"]),
    ("xml:lang", ["string", "string", "char*", "String", "String", "String"]),
    ("xml:space", ["string", "string", "char*", "String", "String", "String"]),
];

fn lookup(xsd_name: &str) -> Option<&'static BuiltinRow> {
    BUILTIN_TYPES
        .binary_search_by(|(name, _)| (*name).cmp(xsd_name))
        .ok()
        .map(|idx| &BUILTIN_TYPES[idx])
}

/// Resolves an XSD built-in type name to its spelling in `language`.
///
/// Returns `None` when `xsd_name` is not a built-in, in which case the
/// caller treats it as a user-defined reference.
#[must_use]
pub fn resolve_builtin(xsd_name: &str, language: Language) -> Option<&'static str> {
    lookup(xsd_name).map(|(_, row)| row[language.column()])
}

/// Returns true if `xsd_name` is a built-in XSD type.
#[must_use]
pub fn is_builtin(xsd_name: &str) -> bool {
    lookup(xsd_name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        for pair in BUILTIN_TYPES.windows(2) {
            assert!(
                pair[0].0 < pair[1].0,
                "'{}' must sort before '{}'",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn test_resolve_builtin_per_language() {
        assert_eq!(resolve_builtin("string", Language::Go), Some("string"));
        assert_eq!(resolve_builtin("boolean", Language::TypeScript), Some("boolean"));
        assert_eq!(resolve_builtin("long", Language::Java), Some("Long"));
        assert_eq!(resolve_builtin("positiveInteger", Language::Rust), Some("u32"));
        assert_eq!(resolve_builtin("dateTime", Language::Ruby), Some("DateTime"));
        assert_eq!(resolve_builtin("string", Language::C), Some("char*"));
    }

    #[test]
    fn test_xml_pseudo_types() {
        for name in ["xml:lang", "xml:space", "xml:base", "xml:id"] {
            assert!(is_builtin(name), "{name} should be built in");
        }
    }

    #[test]
    fn test_unknown_type_is_not_found() {
        assert_eq!(resolve_builtin("Product", Language::Go), None);
        assert_eq!(resolve_builtin("xs:string", Language::Go), None);
        assert!(!is_builtin(""));
    }

    #[test]
    fn test_integer_subtypes_collapse() {
        let rust: Vec<_> = ["int", "integer", "negativeInteger", "nonPositiveInteger"]
            .iter()
            .map(|name| resolve_builtin(name, Language::Rust))
            .collect();
        assert!(rust.iter().all(|t| *t == Some("i32")));
    }
}
