//! modview - Go module graph analyzer with minimal version selection
//!
//! This crate converts the edge list printed by `go mod graph` into a
//! module graph, marking which version of every module minimal version
//! selection picks and which versions it supersedes.

pub mod export;
pub mod graph;
pub mod parser;
pub mod source;
