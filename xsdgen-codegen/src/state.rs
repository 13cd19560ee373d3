//! Per-pass generation state.
//!
//! A [`GenerationState`] is created empty at the start of a pass over the
//! proto tree, mutated only by that pass, read once when the output is
//! assembled, then dropped. Passes for different languages never share one.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

/// Cross-cutting requirement raised while emitting declarations.
///
/// Each language decides which features it raises and which header lines
/// they turn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    /// Serialization tag support must be imported.
    XmlTags,
    /// A date/time library type is referenced.
    Time,
    /// A growable sequence type is referenced.
    Sequence,
    /// A boolean type needs a header.
    Boolean,
    /// An XML mapping mixin is used.
    Mapper,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::XmlTags => "xml-tags",
            Self::Time => "time",
            Self::Sequence => "sequence",
            Self::Boolean => "boolean",
            Self::Mapper => "mapper",
        };
        f.write_str(name)
    }
}

/// Set of raised features, iterated in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Features(BTreeSet<Feature>);

impl Features {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises a feature.
    pub fn raise(&mut self, feature: Feature) {
        self.0.insert(feature);
    }

    /// Returns true if `feature` has been raised.
    #[must_use]
    pub fn contains(&self, feature: Feature) -> bool {
        self.0.contains(&feature)
    }

    /// Returns true if nothing has been raised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates raised features in declaration order of [`Feature`].
    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Feature> for Features {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Mutable state of one generation pass.
#[derive(Debug, Default)]
pub struct GenerationState {
    /// Emitted fragments by schema name; presence marks a name as emitted.
    emitted: HashMap<String, String>,
    /// Declarations in first-emission order, each preceded by its comment.
    body: String,
    /// Type identifiers handed out so far.
    identifiers: HashSet<String>,
    features: Features,
}

impl GenerationState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a declaration for `name` has already been emitted.
    #[must_use]
    pub fn is_emitted(&self, name: &str) -> bool {
        self.emitted.contains_key(name)
    }

    /// Returns the fragment emitted for `name`.
    #[must_use]
    pub fn fragment(&self, name: &str) -> Option<&str> {
        self.emitted.get(name).map(String::as_str)
    }

    /// Records the fragment for `name` and appends it, after `comment`, to
    /// the body. Returns false and leaves the state untouched if `name` was
    /// already emitted.
    pub fn emit(&mut self, name: &str, comment: &str, fragment: String) -> bool {
        if self.is_emitted(name) {
            return false;
        }
        if !self.body.is_empty() {
            self.body.push('\n');
        }
        self.body.push_str(comment);
        self.body.push_str(&fragment);
        if !fragment.ends_with('\n') {
            self.body.push('\n');
        }
        self.emitted.insert(name.to_string(), fragment);
        true
    }

    /// Returns true if `ident` names a declaration already emitted.
    #[must_use]
    pub fn is_claimed(&self, ident: &str) -> bool {
        self.identifiers.contains(ident)
    }

    /// Marks `ident` as taken for the rest of the pass.
    pub fn claim(&mut self, ident: impl Into<String>) {
        self.identifiers.insert(ident.into());
    }

    /// Number of emitted declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.emitted.len()
    }

    /// Returns true if nothing has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }

    /// Accumulated declarations.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Raised features.
    #[must_use]
    pub fn features(&self) -> &Features {
        &self.features
    }

    /// Mutable access to the raised features.
    pub fn features_mut(&mut self) -> &mut Features {
        &mut self.features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_once() {
        let mut state = GenerationState::new();
        assert!(state.emit("Code", "// Code ...\n", "type Code string".to_string()));
        assert!(!state.emit("Code", "// Code ...\n", "type Code int".to_string()));

        assert_eq!(state.len(), 1);
        assert_eq!(state.fragment("Code"), Some("type Code string"));
        assert_eq!(state.body(), "// Code ...\ntype Code string\n");
    }

    #[test]
    fn test_body_order() {
        let mut state = GenerationState::new();
        state.emit("B", "", "b\n".to_string());
        state.emit("A", "", "a\n".to_string());
        assert_eq!(state.body(), "b\n\na\n");
    }

    #[test]
    fn test_claimed_identifiers() {
        let mut state = GenerationState::new();
        assert!(!state.is_claimed("Order"));
        state.claim("Order");
        assert!(state.is_claimed("Order"));
        assert!(!state.is_claimed("OrderElement"));
    }

    #[test]
    fn test_features() {
        let mut state = GenerationState::new();
        assert!(state.features().is_empty());
        state.features_mut().raise(Feature::Time);
        state.features_mut().raise(Feature::XmlTags);
        state.features_mut().raise(Feature::Time);

        let raised: Vec<_> = state.features().iter().collect();
        assert_eq!(raised, vec![Feature::XmlTags, Feature::Time]);
        assert!(state.features().contains(Feature::Time));
        assert!(!state.features().contains(Feature::Mapper));
        assert_eq!(Feature::XmlTags.to_string(), "xml-tags");
    }
}
