//! The converted module graph handed to exporters.
//!
//! A [`Graph`] is plain data: the root module, the edges in input order and
//! the picked/unpicked partition computed by the
//! [`VersionSelector`](super::VersionSelector). Neighbour queries and bulk
//! lookups go through [`GraphIndex`].

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use super::index::GraphIndex;
use super::mvs::{split_identifier, Selection};

/// A "from requires to" relationship between two node identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// The requiring node
    pub from: String,
    /// The required node
    pub to: String,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// How a node takes part in version selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeStatus {
    /// The module whose dependencies are analyzed
    Root,
    /// The selected version of its module
    Picked,
    /// A version superseded by a higher one
    Unpicked,
    /// Not classified (unknown identifier or a bare non-root path)
    Unknown,
}

impl NodeStatus {
    /// Returns a short label for the status.
    pub fn label(&self) -> &'static str {
        match self {
            NodeStatus::Root => "root",
            NodeStatus::Picked => "picked",
            NodeStatus::Unpicked => "unpicked",
            NodeStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counts describing a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GraphSummary {
    /// Distinct nodes, root included
    pub nodes: usize,
    /// Edges, duplicates included
    pub edges: usize,
    /// Modules with a selected version
    pub picked: usize,
    /// Superseded versions
    pub unpicked: usize,
}

/// Result of converting a module graph dump.
///
/// # Example
///
/// ```rust
/// use modview::parser::convert_str;
/// use modview::graph::NodeStatus;
///
/// let graph = convert_str("app lib@v1.0.0\napp lib@v1.1.0\n").unwrap();
/// assert_eq!(graph.root, "app");
/// assert_eq!(graph.picked, vec!["lib@v1.1.0"]);
/// assert_eq!(graph.status("lib@v1.0.0"), NodeStatus::Unpicked);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    /// Root module path; empty if the input never named one
    pub root: String,
    /// Edges in input order, duplicates preserved
    pub edges: Vec<Edge>,
    /// Selected `module@version` strings, sorted as plain strings
    pub picked: Vec<String>,
    /// Superseded `module@version` strings, in detection order
    pub unpicked: Vec<String>,
}

impl Graph {
    /// Assembles a graph from parsed edges and a finished selection.
    pub fn from_selection(edges: Vec<Edge>, selection: Selection) -> Self {
        Self {
            root: selection.root.unwrap_or_default(),
            edges,
            picked: selection.picked,
            unpicked: selection.unpicked,
        }
    }

    /// Returns every distinct node (root plus all edge endpoints), sorted.
    pub fn nodes(&self) -> Vec<&str> {
        let mut nodes: BTreeSet<&str> = BTreeSet::new();
        if !self.root.is_empty() {
            nodes.insert(self.root.as_str());
        }
        for edge in &self.edges {
            nodes.insert(edge.from.as_str());
            nodes.insert(edge.to.as_str());
        }
        nodes.into_iter().collect()
    }

    /// Returns how a node took part in version selection.
    pub fn status(&self, node: &str) -> NodeStatus {
        if !self.root.is_empty() && node == self.root {
            NodeStatus::Root
        } else if self.picked.binary_search_by(|p| p.as_str().cmp(node)).is_ok() {
            NodeStatus::Picked
        } else if self.unpicked.iter().any(|u| u == node) {
            NodeStatus::Unpicked
        } else {
            NodeStatus::Unknown
        }
    }

    /// Returns the selected version of a module.
    pub fn picked_version(&self, module: &str) -> Option<&str> {
        self.picked.iter().find_map(|id| match split_identifier(id) {
            Some((m, version)) if m == module => Some(version),
            _ => None,
        })
    }

    /// Builds lookup tables and a petgraph view for repeated queries.
    ///
    /// [`Graph::status`] and [`Graph::picked_version`] scan the graph's
    /// vectors; use the index when asking about many nodes.
    pub fn index(&self) -> GraphIndex<'_> {
        GraphIndex::new(self)
    }

    /// Returns node, edge, picked and unpicked counts.
    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            nodes: self.nodes().len(),
            edges: self.edges.len(),
            picked: self.picked.len(),
            unpicked: self.unpicked.len(),
        }
    }
}
