//! Minimal version selection over observed module versions.
//!
//! The [`VersionSelector`] is fed every node identifier found while parsing
//! a module graph. For each module path it keeps exactly one "currently
//! picked" version, the highest seen so far, and records every version it
//! displaces or rejects as unpicked.

use std::collections::{HashMap, HashSet};

use super::version::ModuleVersion;

/// Separator between a module path and its version in a node identifier.
pub const VERSION_SEPARATOR: char = '@';

/// Splits `module@version` at the first `@`.
///
/// Returns `None` for a bare module path.
///
/// # Example
///
/// ```rust
/// use modview::graph::split_identifier;
///
/// assert_eq!(split_identifier("golang.org/x/mod@v0.14.0"), Some(("golang.org/x/mod", "v0.14.0")));
/// assert_eq!(split_identifier("example.com/app"), None);
/// ```
pub fn split_identifier(identifier: &str) -> Option<(&str, &str)> {
    identifier.split_once(VERSION_SEPARATOR)
}

/// Outcome of submitting one node identifier to the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The identifier is the root module.
    Root,
    /// A bare identifier that is not the root; it is never classified.
    Unversioned,
    /// The identifier was classified earlier; nothing changed.
    AlreadySeen,
    /// First version observed for its module, now the provisional pick.
    Picked,
    /// Higher than the previous pick, which moved to the unpicked list.
    Superseded {
        /// The `module@version` that was demoted
        demoted: String,
    },
    /// Not higher than the current pick; recorded as unpicked.
    Unpicked,
}

/// Final result of a selection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Root module path, if one was observed or configured
    pub root: Option<String>,
    /// Selected `module@version` strings in ascending string order
    pub picked: Vec<String>,
    /// Displaced `module@version` strings in detection order
    pub unpicked: Vec<String>,
}

/// Tracks the winning version of every module.
///
/// The selector owns all of its state, so independent graphs can be
/// processed with independent selectors.
///
/// # Example
///
/// ```rust
/// use modview::graph::{Classification, VersionSelector};
///
/// let mut selector = VersionSelector::new();
/// selector.submit("example.com/app");
/// selector.submit("pkg@v1.0.0");
/// assert!(matches!(selector.submit("pkg@v1.1.0"), Classification::Superseded { .. }));
///
/// let selection = selector.finish();
/// assert_eq!(selection.picked, vec!["pkg@v1.1.0"]);
/// assert_eq!(selection.unpicked, vec!["pkg@v1.0.0"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VersionSelector {
    root: Option<String>,
    seen: HashSet<String>,
    max_version: HashMap<String, ModuleVersion>,
    unpicked: Vec<String>,
}

impl VersionSelector {
    /// Creates a selector that adopts the first bare identifier as root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selector with a known root module path.
    pub fn with_root(root: impl Into<String>) -> Self {
        Self {
            root: Some(root.into()),
            ..Self::default()
        }
    }

    /// Classifies one node identifier.
    ///
    /// Resubmitting an identifier that was already classified is a no-op.
    pub fn submit(&mut self, identifier: &str) -> Classification {
        let Some((module, version)) = split_identifier(identifier) else {
            return self.submit_bare(identifier);
        };

        if !self.seen.insert(identifier.to_string()) {
            return Classification::AlreadySeen;
        }

        let version = ModuleVersion::parse(version);
        match self.max_version.get_mut(module) {
            None => {
                self.max_version.insert(module.to_string(), version);
                Classification::Picked
            }
            Some(current) if version > *current => {
                let demoted = format!("{}{}{}", module, VERSION_SEPARATOR, current);
                self.unpicked.push(demoted.clone());
                *current = version;
                Classification::Superseded { demoted }
            }
            Some(_) => {
                self.unpicked.push(identifier.to_string());
                Classification::Unpicked
            }
        }
    }

    fn submit_bare(&mut self, identifier: &str) -> Classification {
        match &self.root {
            Some(root) if root == identifier => Classification::Root,
            Some(_) => Classification::Unversioned,
            None => {
                self.root = Some(identifier.to_string());
                Classification::Root
            }
        }
    }

    /// Returns the root module path, if known.
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Returns the currently picked version of a module.
    pub fn picked_version(&self, module: &str) -> Option<&ModuleVersion> {
        self.max_version.get(module)
    }

    /// Returns the number of modules with a picked version.
    pub fn module_count(&self) -> usize {
        self.max_version.len()
    }

    /// Returns the unpicked identifiers recorded so far.
    pub fn unpicked(&self) -> &[String] {
        &self.unpicked
    }

    /// Returns the picked set as sorted `module@version` strings.
    pub fn picked(&self) -> Vec<String> {
        let mut picked: Vec<String> = self
            .max_version
            .iter()
            .map(|(module, version)| format!("{}{}{}", module, VERSION_SEPARATOR, version))
            .collect();
        picked.sort();
        picked
    }

    /// Consumes the selector and returns the final selection.
    pub fn finish(self) -> Selection {
        let picked = self.picked();
        Selection {
            root: self.root,
            picked,
            unpicked: self.unpicked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_identifier_uses_first_separator() {
        assert_eq!(split_identifier("a@b@c"), Some(("a", "b@c")));
        assert_eq!(split_identifier("mod@"), Some(("mod", "")));
        assert_eq!(split_identifier("root"), None);
    }

    #[test]
    fn test_first_bare_identifier_becomes_root() {
        let mut selector = VersionSelector::new();
        assert_eq!(selector.submit("example.com/app"), Classification::Root);
        assert_eq!(selector.submit("example.com/app"), Classification::Root);
        assert_eq!(selector.submit("go"), Classification::Unversioned);
        assert_eq!(selector.root(), Some("example.com/app"));
        assert_eq!(selector.module_count(), 0);
    }

    #[test]
    fn test_configured_root() {
        let mut selector = VersionSelector::with_root("example.com/app");
        assert_eq!(selector.submit("other"), Classification::Unversioned);
        assert_eq!(selector.submit("example.com/app"), Classification::Root);
        assert_eq!(selector.root(), Some("example.com/app"));
    }

    #[test]
    fn test_higher_version_demotes_previous_pick() {
        let mut selector = VersionSelector::new();
        assert_eq!(selector.submit("m@v1.0.0"), Classification::Picked);
        assert_eq!(
            selector.submit("m@v1.2.0"),
            Classification::Superseded {
                demoted: "m@v1.0.0".to_string()
            }
        );
        assert_eq!(selector.picked_version("m").unwrap().raw, "v1.2.0");
        assert_eq!(selector.unpicked(), &["m@v1.0.0".to_string()]);
    }

    #[test]
    fn test_lower_version_is_unpicked() {
        let mut selector = VersionSelector::new();
        selector.submit("m@v2.0.0");
        assert_eq!(selector.submit("m@v1.0.0"), Classification::Unpicked);
        assert_eq!(selector.picked_version("m").unwrap().raw, "v2.0.0");
        assert_eq!(selector.unpicked(), &["m@v1.0.0".to_string()]);
    }

    #[test]
    fn test_equal_precedence_keeps_first_pick() {
        let mut selector = VersionSelector::new();
        selector.submit("m@v2.0.0");
        assert_eq!(
            selector.submit("m@v2.0.0+incompatible"),
            Classification::Unpicked
        );
        assert_eq!(selector.picked(), vec!["m@v2.0.0"]);
    }

    #[test]
    fn test_resubmission_is_noop() {
        let mut selector = VersionSelector::new();
        selector.submit("m@v2.0.0");
        selector.submit("m@v1.0.0");
        assert_eq!(selector.submit("m@v1.0.0"), Classification::AlreadySeen);
        assert_eq!(selector.submit("m@v2.0.0"), Classification::AlreadySeen);
        assert_eq!(selector.unpicked().len(), 1);
    }

    #[test]
    fn test_semantic_not_lexicographic() {
        let mut selector = VersionSelector::new();
        selector.submit("m@9.0.0");
        selector.submit("m@10.0.0");
        let selection = selector.finish();
        assert_eq!(selection.picked, vec!["m@10.0.0"]);
        assert_eq!(selection.unpicked, vec!["m@9.0.0"]);
    }

    #[test]
    fn test_unparsable_version_loses_to_parsable() {
        let mut selector = VersionSelector::new();
        selector.submit("m@latest");
        selector.submit("m@v0.0.1");
        selector.submit("m@master");
        let selection = selector.finish();
        assert_eq!(selection.picked, vec!["m@v0.0.1"]);
        assert_eq!(selection.unpicked, vec!["m@latest", "m@master"]);
    }

    #[test]
    fn test_picked_sorted_as_plain_strings() {
        let mut selector = VersionSelector::new();
        selector.submit("zeta@v1.0.0");
        selector.submit("alpha@v9.0.0");
        selector.submit("Beta@v1.0.0");
        assert_eq!(
            selector.finish().picked,
            vec!["Beta@v1.0.0", "alpha@v9.0.0", "zeta@v1.0.0"]
        );
    }

    #[test]
    fn test_climbing_versions_leave_single_winner() {
        let mut selector = VersionSelector::new();
        for id in ["m@v1.0.0", "m@v1.1.0", "m@v1.0.5", "m@v1.3.0", "m@v1.2.0"] {
            selector.submit(id);
        }
        let selection = selector.finish();
        assert_eq!(selection.picked, vec!["m@v1.3.0"]);
        assert_eq!(
            selection.unpicked,
            vec!["m@v1.0.0", "m@v1.0.5", "m@v1.1.0", "m@v1.2.0"]
        );
    }
}
