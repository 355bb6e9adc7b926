//! Graph module for module version selection.
//!
//! This module provides the [`VersionSelector`] that applies minimal version
//! selection to observed `module@version` identifiers, the version ordering
//! it relies on, and the [`Graph`] value produced by a conversion.
//!
//! # Example
//!
//! ```rust
//! use modview::graph::VersionSelector;
//!
//! let mut selector = VersionSelector::new();
//! selector.submit("example.com/app");
//! selector.submit("golang.org/x/text@v0.3.0");
//! selector.submit("golang.org/x/text@v0.14.0");
//!
//! let selection = selector.finish();
//! assert_eq!(selection.picked, vec!["golang.org/x/text@v0.14.0"]);
//! assert_eq!(selection.unpicked, vec!["golang.org/x/text@v0.3.0"]);
//! ```

mod index;
mod module_graph;
mod mvs;
mod version;

pub use index::GraphIndex;
pub use module_graph::{Edge, Graph, GraphSummary, NodeStatus};
pub use mvs::{split_identifier, Classification, Selection, VersionSelector, VERSION_SEPARATOR};
pub use version::{compare_versions, ModuleVersion};
