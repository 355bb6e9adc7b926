//! Parser module for modview.
//!
//! This module turns the text produced by `go mod graph` into a
//! [`Graph`](crate::graph::Graph) and reads the root module path from
//! `go.mod` files.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use modview::parser::{read_module_path, Converter};
//!
//! // Fix the root from go.mod, then convert the graph dump
//! let root = read_module_path(Path::new("go.mod")).unwrap();
//! let dump = std::fs::read_to_string("graph.txt").unwrap();
//! let graph = Converter::with_root(root).convert_str(&dump).unwrap();
//!
//! println!("{} modules selected", graph.picked.len());
//! ```

pub mod edge_list;
pub mod go_mod;

// Re-export commonly used types for convenience
pub use edge_list::{convert, convert_str, Converter, ParseError, ParseResult};
pub use go_mod::{parse_module_path, read_module_path, GoModError};
