//! JSON export implementation.
//!
//! Exports a converted module graph in JSON format for machine-readable output.

use super::Exporter;
use crate::graph::{Edge, Graph, GraphSummary};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    root: &'a str,
    summary: GraphSummary,
    nodes: Vec<&'a str>,
    edges: &'a [Edge],
    mvs_picked: &'a [String],
    mvs_unpicked: &'a [String],
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, graph: &Graph, writer: &mut W) -> io::Result<()> {
        let export = JsonExport {
            root: &graph.root,
            summary: graph.summary(),
            nodes: graph.nodes(),
            edges: &graph.edges,
            mvs_picked: &graph.picked,
            mvs_unpicked: &graph.unpicked,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
