//! Markdown export implementation.
//!
//! Exports a converted module graph in Markdown format for documentation and reporting.

use super::Exporter;
use crate::graph::{split_identifier, Graph};
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, graph: &Graph, writer: &mut W) -> io::Result<()> {
        let summary = graph.summary();
        let index = graph.index();

        // Title
        writeln!(writer, "# Module Graph Report")?;
        writeln!(writer)?;
        if !graph.root.is_empty() {
            writeln!(writer, "**Root module:** `{}`", graph.root)?;
            writeln!(writer)?;
        }

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Count |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Nodes | {} |", summary.nodes)?;
        writeln!(writer, "| Edges | {} |", summary.edges)?;
        writeln!(writer, "| Selected Modules | {} |", summary.picked)?;
        writeln!(writer, "| Superseded Versions | {} |", summary.unpicked)?;
        writeln!(writer)?;

        // Selected versions
        if !graph.picked.is_empty() {
            writeln!(writer, "## Selected Modules ({})", graph.picked.len())?;
            writeln!(writer)?;
            writeln!(writer, "| Module | Version |")?;
            writeln!(writer, "|--------|---------|")?;
            for id in &graph.picked {
                let (module, version) = split_identifier(id).unwrap_or((id.as_str(), ""));
                writeln!(writer, "| {} | {} |", module, version)?;
            }
            writeln!(writer)?;
        }

        // Superseded versions, with the version that replaced them
        if !graph.unpicked.is_empty() {
            writeln!(writer, "## Superseded Versions ({})", graph.unpicked.len())?;
            writeln!(writer)?;
            writeln!(writer, "| Module | Version | Selected |")?;
            writeln!(writer, "|--------|---------|----------|")?;
            for id in &graph.unpicked {
                let (module, version) = split_identifier(id).unwrap_or((id.as_str(), ""));
                let selected = index.picked_version(module).unwrap_or("-");
                writeln!(writer, "| {} | {} | {} |", module, version, selected)?;
            }
            writeln!(writer)?;
        }

        if !graph.edges.is_empty() {
            writeln!(writer, "## Requirements")?;
            writeln!(writer)?;
            for node in index.nodes() {
                let requirements = index.requirements(node);
                if requirements.is_empty() {
                    continue;
                }
                writeln!(writer, "- `{}` requires:", node)?;
                for required in requirements {
                    writeln!(writer, "  - `{}` ({})", required, index.status(required))?;
                }
            }
            writeln!(writer)?;
        }

        // Footer
        writeln!(writer, "---")?;
        writeln!(writer, "*Generated by modview*")?;

        Ok(())
    }
}
