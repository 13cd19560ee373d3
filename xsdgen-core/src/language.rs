//! Supported target languages.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Target language of a generation pass.
///
/// The discriminant order is also the column order of the built-in type
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    /// Go structs with `encoding/xml` tags.
    Go,
    /// TypeScript interfaces and type aliases.
    TypeScript,
    /// C structs and typedefs.
    C,
    /// Java classes with JAXB annotations.
    Java,
    /// Rust structs with serde attributes.
    Rust,
    /// Ruby classes using XmlMapper.
    Ruby,
}

impl Language {
    /// All languages, in table column order.
    pub const ALL: [Self; 6] = [
        Self::Go,
        Self::TypeScript,
        Self::C,
        Self::Java,
        Self::Rust,
        Self::Ruby,
    ];

    /// Returns the built-in type table column for this language.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Go => 0,
            Self::TypeScript => 1,
            Self::C => 2,
            Self::Java => 3,
            Self::Rust => 4,
            Self::Ruby => 5,
        }
    }

    /// Returns the display name of the language.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Go => "Go",
            Self::TypeScript => "TypeScript",
            Self::C => "C",
            Self::Java => "Java",
            Self::Rust => "Rust",
            Self::Ruby => "Ruby",
        }
    }

    /// Returns the file extension (without dot) of generated artifacts.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::TypeScript => "ts",
            Self::C => "h",
            Self::Java => "java",
            Self::Rust => "rs",
            Self::Ruby => "rb",
        }
    }

    /// Returns the line comment prefix used in generated source.
    #[must_use]
    pub const fn comment_prefix(&self) -> &'static str {
        match self {
            Self::Ruby => "#",
            _ => "//",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "go" | "golang" => Ok(Self::Go),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "c" => Ok(Self::C),
            "java" => Ok(Self::Java),
            "rust" | "rs" => Ok(Self::Rust),
            "ruby" | "rb" => Ok(Self::Ruby),
            _ => Err(Error::UnknownLanguage { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_follow_declaration_order() {
        for (idx, lang) in Language::ALL.iter().enumerate() {
            assert_eq!(lang.column(), idx);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Go".parse::<Language>().unwrap(), Language::Go);
        assert_eq!("ts".parse::<Language>().unwrap(), Language::TypeScript);
        assert_eq!("RUBY".parse::<Language>().unwrap(), Language::Ruby);
        assert!("cobol".parse::<Language>().is_err());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Language::Java.to_string(), "Java");
        assert_eq!(Language::C.extension(), "h");
        assert_eq!(Language::Ruby.comment_prefix(), "#");
        assert_eq!(Language::Rust.comment_prefix(), "//");
    }
}
