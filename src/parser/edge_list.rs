//! Parser for `go mod graph` edge lists.
//!
//! Each non-empty line holds two whitespace-separated node identifiers,
//! `<from> <to>`, meaning "from requires to". The parser collects the edges
//! in input order and feeds every endpoint to a [`VersionSelector`].

use std::io::{BufRead, Cursor};

use tracing::{debug, info, trace, warn};

use crate::graph::{split_identifier, Classification, Edge, Graph, VersionSelector};

/// Errors that can occur while converting an edge list.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the input.
    #[error("Failed to read edge list: {0}")]
    IoError(#[from] std::io::Error),

    /// A non-empty line did not hold exactly two tokens.
    #[error("Line {line_number}: expected 2 words in line, but got {count}: {line}")]
    Format {
        /// 1-based line number in the input
        line_number: usize,
        /// Number of whitespace-separated tokens found
        count: usize,
        /// The offending line as read
        line: String,
    },
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Converts edge-list text into a [`Graph`].
///
/// By default the root is the first token without an `@`. With
/// [`Converter::with_root`] the root is fixed up front and lines naming any
/// other bare module path are skipped.
///
/// # Example
///
/// ```rust
/// use modview::parser::Converter;
///
/// let input = "example.com/app golang.org/x/mod@v0.14.0\n\
///              example.com/app go@1.21\n\
///              example.com/app toolchain\n";
///
/// let graph = Converter::with_root("example.com/app").convert_str(input).unwrap();
/// assert_eq!(graph.root, "example.com/app");
/// assert_eq!(graph.edges.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    root: Option<String>,
}

impl Converter {
    /// Creates a converter that infers the root from the input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a converter with a known root module path.
    pub fn with_root(root: impl Into<String>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Returns the configured root, if any.
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Converts an edge list read line by line from `reader`.
    ///
    /// Fails on the first malformed line or read error; no partial graph is
    /// returned.
    pub fn convert<R: BufRead>(&self, reader: R) -> ParseResult<Graph> {
        let mut selector = match &self.root {
            Some(root) => VersionSelector::with_root(root.clone()),
            None => VersionSelector::new(),
        };
        let mut edges = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            if line.is_empty() {
                continue;
            }

            let (from, to) = split_line(&line, line_number)?;
            if let Some(root) = &self.root {
                if is_foreign_bare(from, root) || is_foreign_bare(to, root) {
                    debug!(line_number, line = %line, "skipping edge with unversioned module");
                    continue;
                }
            }

            edges.push(Edge::new(from, to));
            for node in [from, to] {
                match selector.submit(node) {
                    Classification::Unversioned => {
                        warn!(
                            line_number,
                            node,
                            root = selector.root().unwrap_or_default(),
                            "unversioned module is not the root; leaving it unclassified"
                        );
                    }
                    Classification::AlreadySeen | Classification::Root => {}
                    classification => trace!(node, ?classification, "classified node"),
                }
            }
        }

        let graph = Graph::from_selection(edges, selector.finish());
        info!(
            edges = graph.edges.len(),
            picked = graph.picked.len(),
            unpicked = graph.unpicked.len(),
            "converted module graph"
        );
        Ok(graph)
    }

    /// Converts an edge list held in a string.
    pub fn convert_str(&self, content: &str) -> ParseResult<Graph> {
        self.convert(Cursor::new(content))
    }
}

/// Converts an edge list, inferring the root from the input.
pub fn convert<R: BufRead>(reader: R) -> ParseResult<Graph> {
    Converter::new().convert(reader)
}

/// Converts an edge list held in a string, inferring the root.
///
/// # Example
///
/// ```rust
/// use modview::parser::convert_str;
///
/// let graph = convert_str("root pkgA@1.0.0\nroot pkgB@1.0.0\npkgA@1.0.0 pkgB@2.0.0\n").unwrap();
/// assert_eq!(graph.picked, vec!["pkgA@1.0.0", "pkgB@2.0.0"]);
/// assert_eq!(graph.unpicked, vec!["pkgB@1.0.0"]);
/// ```
pub fn convert_str(content: &str) -> ParseResult<Graph> {
    Converter::new().convert_str(content)
}

fn split_line(line: &str, line_number: usize) -> ParseResult<(&str, &str)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [from, to] => Ok((*from, *to)),
        _ => Err(ParseError::Format {
            line_number,
            count: parts.len(),
            line: line.to_string(),
        }),
    }
}

fn is_foreign_bare(node: &str, root: &str) -> bool {
    node != root && split_identifier(node).is_none()
}
