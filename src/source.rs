//! Where the edge list comes from.
//!
//! The graph dump is either read from a file, from standard input, or
//! produced by running `go mod graph` in a module directory.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tracing::{debug, info};

/// Errors that can occur while obtaining an edge list.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Failed to open an input file.
    #[error("Failed to read {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: io::Error,
    },

    /// The `go` executable could not be started.
    #[error("Failed to run 'go mod graph': {0}")]
    Spawn(#[source] io::Error),

    /// `go mod graph` ran but exited unsuccessfully.
    #[error("'go mod graph' exited with {status}: {stderr}")]
    Command { status: ExitStatus, stderr: String },
}

/// Source of `go mod graph` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeSource {
    /// Read from standard input
    Stdin,
    /// Read a saved dump from disk
    File(PathBuf),
    /// Run `go mod graph` inside `dir`
    GoModGraph { dir: PathBuf },
}

impl EdgeSource {
    /// Builds a source from an optional CLI input argument.
    ///
    /// `-` selects standard input, any other value a file, and no value
    /// runs `go mod graph` in `dir`.
    pub fn from_arg(input: Option<&str>, dir: impl Into<PathBuf>) -> Self {
        match input {
            Some("-") => EdgeSource::Stdin,
            Some(path) => EdgeSource::File(PathBuf::from(path)),
            None => EdgeSource::GoModGraph { dir: dir.into() },
        }
    }

    /// Opens the edge list for line-by-line reading.
    ///
    /// Files and standard input are streamed, so read failures after this
    /// point surface from the parser. `go mod graph` runs to completion
    /// here and its output is buffered.
    pub fn open(&self) -> Result<Box<dyn BufRead>, SourceError> {
        match self {
            EdgeSource::Stdin => Ok(Box::new(io::stdin().lock())),
            EdgeSource::File(path) => {
                debug!(path = %path.display(), "reading module graph dump");
                let file = File::open(path).map_err(|source| SourceError::Read {
                    origin: path.display().to_string(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            EdgeSource::GoModGraph { dir } => {
                let output = run_go_mod_graph(dir)?;
                Ok(Box::new(Cursor::new(output)))
            }
        }
    }
}

impl std::fmt::Display for EdgeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeSource::Stdin => write!(f, "stdin"),
            EdgeSource::File(path) => write!(f, "{}", path.display()),
            EdgeSource::GoModGraph { dir } => write!(f, "go mod graph in {}", dir.display()),
        }
    }
}

fn run_go_mod_graph(dir: &Path) -> Result<Vec<u8>, SourceError> {
    info!(dir = %dir.display(), "running 'go mod graph'");
    let output = Command::new("go")
        .args(["mod", "graph"])
        .current_dir(dir)
        .output()
        .map_err(SourceError::Spawn)?;

    if !output.status.success() {
        return Err(SourceError::Command {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output.stdout)
}
