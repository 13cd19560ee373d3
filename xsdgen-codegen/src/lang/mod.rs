//! Language targets.
//!
//! Each target renders [`Declaration`]s in its own surface syntax and wraps
//! the accumulated declarations in the file boilerplate of its language.

pub mod c;
pub mod go;
pub mod java;
pub mod ruby;
pub mod rust;
pub mod typescript;

use crate::config::GeneratorConfig;
use crate::decl::Declaration;
use crate::state::Features;
use std::collections::HashSet;
use xsdgen_core::Language;

/// Banner marking generated files.
pub const BANNER: &str = "Code generated by xsdgen. DO NOT EDIT.";

/// Per-language rendering capability.
pub trait Target: Sync {
    /// Language rendered by this target.
    fn language(&self) -> Language;

    /// Renders one declaration, raising the features it needs.
    fn render(
        &self,
        decl: &Declaration,
        features: &mut Features,
        config: &GeneratorConfig,
    ) -> String;

    /// Wraps the accumulated declarations into a complete source file.
    fn assemble(&self, body: &str, features: &Features, config: &GeneratorConfig) -> String;
}

/// Returns the target for `language`.
#[must_use]
pub fn target(language: Language) -> &'static dyn Target {
    match language {
        Language::Go => &go::GoTarget,
        Language::TypeScript => &typescript::TypeScriptTarget,
        Language::C => &c::CTarget,
        Language::Java => &java::JavaTarget,
        Language::Rust => &rust::RustTarget,
        Language::Ruby => &ruby::RubyTarget,
    }
}

/// Indents every non-empty line of `text` by `unit`.
pub(crate) fn indent(text: &str, unit: &str) -> String {
    let mut output = String::with_capacity(text.len() + text.len() / 8);
    for line in text.lines() {
        if !line.is_empty() {
            output.push_str(unit);
            output.push_str(line);
        }
        output.push('\n');
    }
    output
}

/// Makes identifiers unique within one declaration by appending a counter
/// to repeated ones.
#[derive(Debug, Default)]
pub(crate) struct UniqueNames {
    seen: HashSet<String>,
}

impl UniqueNames {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns `ident`, or `ident` with the smallest numeric suffix from 2
    /// that has not been handed out. Empty identifiers become `fallback`.
    pub(crate) fn claim(&mut self, ident: String, fallback: &str) -> String {
        let ident = if ident.is_empty() {
            fallback.to_string()
        } else {
            ident
        };

        let mut candidate = ident.clone();
        let mut counter = 2;
        while self.seen.contains(&candidate) {
            candidate = format!("{ident}{counter}");
            counter += 1;
        }
        self.seen.insert(candidate.clone());
        candidate
    }
}

/// Escapes a double-quoted string literal.
pub(crate) fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
