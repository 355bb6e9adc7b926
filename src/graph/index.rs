//! Lookup tables over a finished [`Graph`].
//!
//! Exporters ask the same questions for every node: what is its status,
//! which version of its module won, what does it require. [`GraphIndex`]
//! answers each of them without rescanning the graph's vectors.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::{HashMap, HashSet};

use super::module_graph::{Graph, NodeStatus};
use super::mvs::split_identifier;

/// A petgraph view of a [`Graph`] plus hash lookups for selection results.
///
/// Nodes are inserted in sorted order, so iterating the digraph's node
/// indices yields the same order as [`Graph::nodes`]. Duplicate input edges
/// become parallel edges.
///
/// # Example
///
/// ```rust
/// use modview::parser::convert_str;
/// use modview::graph::NodeStatus;
///
/// let graph = convert_str("app a@v1.0.0\na@v1.0.0 b@v1.0.0\napp b@v1.2.0\n").unwrap();
/// let index = graph.index();
///
/// assert_eq!(index.requirements("app"), vec!["a@v1.0.0", "b@v1.2.0"]);
/// assert_eq!(index.status("b@v1.0.0"), NodeStatus::Unpicked);
/// assert_eq!(index.picked_version("b"), Some("v1.2.0"));
/// ```
#[derive(Debug, Clone)]
pub struct GraphIndex<'a> {
    root: &'a str,
    digraph: DiGraph<&'a str, ()>,
    indices: HashMap<&'a str, NodeIndex>,
    picked: HashSet<&'a str>,
    picked_versions: HashMap<&'a str, &'a str>,
    unpicked: HashSet<&'a str>,
}

impl<'a> GraphIndex<'a> {
    /// Builds the index in one pass over the graph.
    pub fn new(graph: &'a Graph) -> Self {
        let nodes = graph.nodes();
        let mut digraph = DiGraph::with_capacity(nodes.len(), graph.edges.len());
        let mut indices = HashMap::with_capacity(nodes.len());
        for node in nodes {
            indices.insert(node, digraph.add_node(node));
        }
        for edge in &graph.edges {
            digraph.add_edge(
                indices[edge.from.as_str()],
                indices[edge.to.as_str()],
                (),
            );
        }

        let picked_versions = graph
            .picked
            .iter()
            .filter_map(|id| split_identifier(id))
            .collect();

        Self {
            root: &graph.root,
            digraph,
            indices,
            picked: graph.picked.iter().map(String::as_str).collect(),
            picked_versions,
            unpicked: graph.unpicked.iter().map(String::as_str).collect(),
        }
    }

    /// Returns every distinct node, sorted.
    pub fn nodes(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.digraph.node_indices().map(|idx| self.digraph[idx])
    }

    /// Returns the underlying petgraph graph.
    pub fn digraph(&self) -> &DiGraph<&'a str, ()> {
        &self.digraph
    }

    /// Returns how a node took part in version selection.
    pub fn status(&self, node: &str) -> NodeStatus {
        if !self.root.is_empty() && node == self.root {
            NodeStatus::Root
        } else if self.picked.contains(node) {
            NodeStatus::Picked
        } else if self.unpicked.contains(node) {
            NodeStatus::Unpicked
        } else {
            NodeStatus::Unknown
        }
    }

    /// Returns the selected version of a module.
    pub fn picked_version(&self, module: &str) -> Option<&'a str> {
        self.picked_versions.get(module).copied()
    }

    /// Returns the distinct nodes directly required by `node`, sorted.
    pub fn requirements(&self, node: &str) -> Vec<&'a str> {
        self.neighbors(node, Direction::Outgoing)
    }

    /// Returns the distinct nodes that directly require `node`, sorted.
    pub fn requirers(&self, node: &str) -> Vec<&'a str> {
        self.neighbors(node, Direction::Incoming)
    }

    fn neighbors(&self, node: &str, direction: Direction) -> Vec<&'a str> {
        let Some(&idx) = self.indices.get(node) else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        let mut result: Vec<&'a str> = self
            .digraph
            .neighbors_directed(idx, direction)
            .filter(|n| seen.insert(*n))
            .map(|n| self.digraph[n])
            .collect();
        result.sort_unstable();
        result
    }
}
