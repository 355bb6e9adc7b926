//! Graphviz DOT export implementation.
//!
//! Renders the module graph for `dot -Tsvg`: the root is bold, picked
//! versions are filled and superseded versions are dashed and grey.

use super::Exporter;
use crate::graph::{Graph, NodeStatus};
use std::io::{self, Write};

/// DOT exporter implementation.
pub struct DotExporter;

fn node_attributes(status: NodeStatus) -> &'static str {
    match status {
        NodeStatus::Root => "style=bold",
        NodeStatus::Picked => "style=filled, fillcolor=\"#d9ead3\"",
        NodeStatus::Unpicked => "style=dashed, color=gray50, fontcolor=gray50",
        NodeStatus::Unknown => "",
    }
}

fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}

impl Exporter for DotExporter {
    fn export<W: Write>(&self, graph: &Graph, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "digraph modules {{")?;
        writeln!(writer, "  node [shape=box];")?;

        let index = graph.index();
        for node in index.nodes() {
            let attributes = node_attributes(index.status(node));
            if attributes.is_empty() {
                writeln!(writer, "  {};", quote(node))?;
            } else {
                writeln!(writer, "  {} [{}];", quote(node), attributes)?;
            }
        }

        for edge in &graph.edges {
            writeln!(writer, "  {} -> {};", quote(&edge.from), quote(&edge.to))?;
        }

        writeln!(writer, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::convert_str;

    fn render(input: &str) -> String {
        let graph = convert_str(input).unwrap();
        let mut output = Vec::new();
        DotExporter.export(&graph, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_dot_export_structure() {
        let dot = render("app a@v1.0.0\napp a@v1.1.0\n");

        assert!(dot.starts_with("digraph modules {"));
        assert!(dot.trim_end().ends_with('}'));
        assert!(dot.contains("  \"app\" [style=bold];"));
        assert!(dot.contains("  \"a@v1.1.0\" [style=filled"));
        assert!(dot.contains("  \"a@v1.0.0\" [style=dashed"));
        assert!(dot.contains("  \"app\" -> \"a@v1.0.0\";"));
    }

    #[test]
    fn test_dot_export_keeps_duplicate_edges() {
        let dot = render("app a@v1.0.0\napp a@v1.0.0\n");
        assert_eq!(dot.matches("\"app\" -> \"a@v1.0.0\";").count(), 2);
    }

    #[test]
    fn test_dot_export_unknown_nodes_unstyled() {
        let dot = render("app a@v1.0.0\ntool a@v1.0.0\n");
        assert!(dot.contains("  \"tool\";"));
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
    }
}
