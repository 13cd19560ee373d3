//! Main code generator.

use crate::config::GeneratorConfig;
use crate::decl::DeclarationBuilder;
use crate::error::CodegenError;
use crate::lang::{self, Target};
use crate::state::{Features, GenerationState};
use crate::writer::ArtifactSink;
use std::collections::HashSet;
use std::path::PathBuf;
use xsdgen_core::Language;
use xsdgen_core::naming::type_identifier;
use xsdgen_schema::validation::find_duplicates;
use xsdgen_schema::{Node, NodeKind, ProtoTree, TypeResolver, validate_tree};

/// Kinds whose declarations other nodes reference by type name.
const TYPE_KINDS: [NodeKind; 4] = [
    NodeKind::SimpleType,
    NodeKind::ComplexType,
    NodeKind::Group,
    NodeKind::AttributeGroup,
];

/// Output of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Language generated.
    pub language: Language,
    /// Complete source file.
    pub contents: String,
    /// Features raised during the pass.
    pub features: Features,
    /// Number of declarations emitted.
    pub declarations: usize,
}

impl Generated {
    /// File extension of the artifact.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        self.language.extension()
    }
}

/// Code generator walking a proto tree once per language.
#[derive(Debug)]
pub struct Generator<'a> {
    tree: &'a ProtoTree,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a generator over `tree`.
    ///
    /// Duplicate definitions are logged; the first one is used.
    ///
    /// # Arguments
    /// * `tree` - Proto tree to generate from
    /// * `config` - Generation settings
    ///
    /// # Returns
    /// A generator borrowing `tree`.
    ///
    /// # Errors
    /// In strict mode, returns `CodegenError::Schema` if the tree does not
    /// pass validation.
    pub fn new(tree: &'a ProtoTree, config: GeneratorConfig) -> Result<Self, CodegenError> {
        if config.strict() {
            validate_tree(tree)?;
        } else {
            for (kind, name) in find_duplicates(tree) {
                tracing::warn!("duplicate {} definition '{}', keeping the first", kind, name);
            }
        }
        Ok(Self { tree, config })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the source file for `language`.
    #[must_use]
    pub fn generate(&self, language: Language) -> Generated {
        tracing::debug!("generating {} from {} nodes", language, self.tree.len());

        let target = lang::target(language);
        let builder = DeclarationBuilder::new(TypeResolver::new(self.tree), language);
        let mut state = GenerationState::new();
        let type_idents = self.type_identifiers();

        for node in self.tree {
            self.emit(node, target, &builder, &type_idents, &mut state);
        }

        let contents = target.assemble(state.body(), state.features(), &self.config);
        tracing::debug!(
            "generated {} declarations for {}",
            state.len(),
            language
        );

        Generated {
            language,
            contents,
            features: state.features().clone(),
            declarations: state.len(),
        }
    }

    /// Identifiers of every type and group definition in the tree.
    fn type_identifiers(&self) -> HashSet<String> {
        self.tree
            .iter()
            .filter(|node| !node.kind().is_declaration())
            .map(|node| type_identifier(node.name()))
            .collect()
    }

    /// Returns true if a type or group definition is named exactly `name`.
    fn defines_type(&self, name: &str) -> bool {
        TYPE_KINDS
            .iter()
            .any(|&kind| self.tree.get(kind, name).is_some())
    }

    /// Picks the identifier for `node`, starting from `base`.
    ///
    /// An identifier is taken once emitted. Element and attribute aliases
    /// also yield to type definitions that normalize to the same identifier,
    /// since references to the type resolve to that identifier. A taken
    /// identifier gets a kind suffix, then a counter.
    fn unique_identifier(
        &self,
        base: &str,
        node: &Node,
        type_idents: &HashSet<String>,
        state: &GenerationState,
    ) -> String {
        let declaration = node.kind().is_declaration();
        let yields = declaration && !self.defines_type(node.name());
        let taken =
            |ident: &str| state.is_claimed(ident) || (yields && type_idents.contains(ident));

        if !taken(base) {
            return base.to_string();
        }

        let stem = match node.kind() {
            NodeKind::Element => format!("{base}Element"),
            NodeKind::Attribute => format!("{base}Attribute"),
            _ => base.to_string(),
        };
        if declaration && !taken(&stem) {
            return stem;
        }

        let mut counter = 2;
        loop {
            let candidate = format!("{stem}{counter}");
            if !taken(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }

    /// Emits one node unless a declaration with its name already exists.
    fn emit(
        &self,
        node: &Node,
        target: &dyn Target,
        builder: &DeclarationBuilder<'_>,
        type_idents: &HashSet<String>,
        state: &mut GenerationState,
    ) {
        if state.is_emitted(node.name()) {
            return;
        }

        let mut decl = builder.build(node);
        let ident = self.unique_identifier(&decl.ident, node, type_idents, state);
        if ident != decl.ident {
            tracing::debug!(
                "{} '{}' declared as {} to avoid clashing with {}",
                node.kind(),
                node.name(),
                ident,
                decl.ident
            );
            decl.ident = ident;
        }

        let fragment = target.render(&decl, state.features_mut(), &self.config);
        let comment = decl.comment(target.language().comment_prefix());
        state.claim(decl.ident.clone());
        state.emit(node.name(), &comment, fragment);
    }

    /// Generates `language` and writes it to `sink`.
    ///
    /// # Arguments
    /// * `language` - Target language
    /// * `sink` - Destination of the artifact
    ///
    /// # Returns
    /// Path of the written artifact as reported by the sink.
    ///
    /// # Errors
    /// Returns `CodegenError` if the artifact cannot be written.
    pub fn write<S: ArtifactSink + ?Sized>(
        &self,
        language: Language,
        sink: &mut S,
    ) -> Result<PathBuf, CodegenError> {
        let generated = self.generate(language);
        let path = sink.write(
            self.config.base_name(),
            generated.extension(),
            &generated.contents,
        )?;
        tracing::info!("wrote {} output to {}", language, path.display());
        Ok(path)
    }

    /// Generates and writes every configured language, in order.
    ///
    /// # Errors
    /// Returns the first `CodegenError`; languages after it are not written.
    pub fn write_all<S: ArtifactSink + ?Sized>(
        &self,
        sink: &mut S,
    ) -> Result<Vec<PathBuf>, CodegenError> {
        self.config
            .languages()
            .iter()
            .map(|&language| self.write(language, sink))
            .collect()
    }

    /// Generates every configured language without writing.
    #[must_use]
    pub fn generate_all(&self) -> Vec<Generated> {
        self.config
            .languages()
            .iter()
            .map(|&language| self.generate(language))
            .collect()
    }
}
