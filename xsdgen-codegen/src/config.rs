//! Generator configuration.

use crate::error::CodegenError;
use xsdgen_core::Language;

const DEFAULT_PACKAGE: &str = "schema";
const DEFAULT_BASE_NAME: &str = "schema";

/// Configuration shared by every generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    package: String,
    base_name: String,
    languages: Vec<Language>,
    strict: bool,
}

impl GeneratorConfig {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Package, module or namespace name the generated code is wrapped in.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Base file name of generated artifacts, without extension.
    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Languages generated by `write_all`, in generation order.
    #[must_use]
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Whether duplicate definitions abort generation.
    #[must_use]
    pub fn strict(&self) -> bool {
        self.strict
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            base_name: DEFAULT_BASE_NAME.to_string(),
            languages: Language::ALL.to_vec(),
            strict: false,
        }
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the package name.
    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.config.package = package.into();
        self
    }

    /// Sets the base file name of generated artifacts.
    #[must_use]
    pub fn base_name(mut self, base_name: impl Into<String>) -> Self {
        self.config.base_name = base_name.into();
        self
    }

    /// Sets the languages to generate. Repeated languages are dropped.
    #[must_use]
    pub fn languages(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        let mut selected = Vec::new();
        for language in languages {
            if !selected.contains(&language) {
                selected.push(language);
            }
        }
        self.config.languages = selected;
        self
    }

    /// Enables or disables strict validation of the proto tree.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if the package or base name is empty
    /// or the base name contains a path separator.
    pub fn build(self) -> Result<GeneratorConfig, CodegenError> {
        let config = self.config;
        if config.package.trim().is_empty() {
            return Err(CodegenError::config("package name must not be empty"));
        }
        if config.base_name.trim().is_empty() {
            return Err(CodegenError::config("base name must not be empty"));
        }
        if config.base_name.contains(['/', '\\']) {
            return Err(CodegenError::config(format!(
                "base name '{}' must not contain a path separator",
                config.base_name
            )));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::builder().build().expect("defaults are valid");
        assert_eq!(config.package(), "schema");
        assert_eq!(config.base_name(), "schema");
        assert_eq!(config.languages(), &Language::ALL);
        assert!(!config.strict());
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = GeneratorConfig::builder()
            .package("orders")
            .base_name("orders_gen")
            .languages([Language::Rust, Language::Go, Language::Rust])
            .strict(true)
            .build()
            .expect("valid config");
        assert_eq!(config.package(), "orders");
        assert_eq!(config.base_name(), "orders_gen");
        assert_eq!(config.languages(), &[Language::Rust, Language::Go]);
        assert!(config.strict());
    }

    #[test]
    fn test_rejects_invalid_names() {
        assert!(GeneratorConfig::builder().package(" ").build().is_err());
        assert!(GeneratorConfig::builder().base_name("").build().is_err());
        assert!(matches!(
            GeneratorConfig::builder().base_name("out/schema").build(),
            Err(CodegenError::Config { .. })
        ));
    }
}
