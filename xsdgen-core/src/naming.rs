//! Identifier normalization.
//!
//! Pure string transforms used to turn schema vocabulary into identifiers
//! that are legal in every target language: case conversion and namespace
//! prefix handling.

/// Upper-cases the first character of `s`.
///
/// Strings shorter than two characters are fully upper-cased.
#[must_use]
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) if chars.as_str().is_empty() => first.to_uppercase().collect(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-cases the first character of `s`.
#[must_use]
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Converts a string to snake_case.
///
/// An underscore is inserted wherever a lower-case letter or digit is
/// directly followed by an upper-case letter, hyphens become underscores
/// and the result is lower-cased.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c.is_uppercase()
            && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
        {
            result.push('_');
        }
        if c == '-' {
            result.push('_');
        } else {
            result.extend(c.to_lowercase());
        }
        prev = Some(c);
    }
    result
}

/// Strips a namespace prefix from a qualified name.
///
/// Only a name with exactly one `:` is treated as qualified; anything else
/// is returned unchanged.
#[must_use]
pub fn strip_namespace_prefix(s: &str) -> &str {
    match s.split_once(':') {
        Some((_, local)) if !local.contains(':') => local,
        _ => s,
    }
}

/// Returns the namespace prefix of a qualified name, or `""` if there is none.
#[must_use]
pub fn namespace_prefix(s: &str) -> &str {
    match s.split_once(':') {
        Some((prefix, local)) if !local.contains(':') => prefix,
        _ => "",
    }
}

/// Builds a PascalCase type identifier from a schema name.
///
/// Segments delimited by `:`, `.`, `-` or `_` are upper-cased at their first
/// character and concatenated, so `xml:lang` becomes `XmlLang` and
/// `customer-id` becomes `CustomerId`.
#[must_use]
pub fn type_identifier(name: &str) -> String {
    name.split([':', '.', '-', '_'])
        .filter(|segment| !segment.is_empty())
        .map(upper_first)
        .collect()
}

/// Builds a snake_case member identifier from a schema name.
#[must_use]
pub fn member_identifier(name: &str) -> String {
    to_snake_case(&type_identifier(name))
}

/// Builds a camelCase member identifier from a schema name.
#[must_use]
pub fn camel_identifier(name: &str) -> String {
    lower_first(&type_identifier(name))
}
