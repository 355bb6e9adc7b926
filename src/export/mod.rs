//! Export functionality for converted module graphs.
//!
//! This module provides exporters for outputting a [`Graph`] in various
//! formats: JSON, Markdown, and Graphviz DOT.

pub mod dot;
pub mod json;
pub mod markdown;

use crate::graph::Graph;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// JSON format - machine-readable, full data
    #[default]
    Json,
    /// Markdown format - documentation/reporting
    Markdown,
    /// Graphviz DOT format - for rendering with `dot`
    Dot,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "dot" | "graphviz" => Ok(ExportFormat::Dot),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: json, markdown, dot",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Dot => write!(f, "dot"),
        }
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the graph to the given writer.
    fn export<W: Write>(&self, graph: &Graph, writer: &mut W) -> io::Result<()>;
}

/// Export a graph in the specified format.
pub fn export<W: Write>(format: ExportFormat, graph: &Graph, writer: &mut W) -> io::Result<()> {
    match format {
        ExportFormat::Json => json::JsonExporter.export(graph, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(graph, writer),
        ExportFormat::Dot => dot::DotExporter.export(graph, writer),
    }
}

/// Export a graph to a string.
pub fn export_to_string(format: ExportFormat, graph: &Graph) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, graph, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::convert_str;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(
            "markdown".parse::<ExportFormat>().unwrap(),
            ExportFormat::Markdown
        );
        assert_eq!(
            "md".parse::<ExportFormat>().unwrap(),
            ExportFormat::Markdown
        );
        assert_eq!("dot".parse::<ExportFormat>().unwrap(), ExportFormat::Dot);
        assert_eq!(
            "graphviz".parse::<ExportFormat>().unwrap(),
            ExportFormat::Dot
        );
        assert!("csv".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_format_display() {
        assert_eq!(format!("{}", ExportFormat::Json), "json");
        assert_eq!(format!("{}", ExportFormat::Markdown), "markdown");
        assert_eq!(format!("{}", ExportFormat::Dot), "dot");
    }

    #[test]
    fn test_export_to_string_dispatches() {
        let graph = convert_str("app lib@v1.0.0\n").unwrap();

        let json = export_to_string(ExportFormat::Json, &graph).unwrap();
        assert!(json.trim_start().starts_with('{'));

        let markdown = export_to_string(ExportFormat::Markdown, &graph).unwrap();
        assert!(markdown.starts_with("# Module Graph Report"));

        let dot = export_to_string(ExportFormat::Dot, &graph).unwrap();
        assert!(dot.starts_with("digraph"));
    }
}
