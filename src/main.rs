//! modview CLI binary.
//!
//! Reads a `go mod graph` dump (or runs the command), applies minimal
//! version selection and writes the result in the requested format.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use modview::export::{export, ExportFormat};
use modview::parser::{read_module_path, Converter};
use modview::source::EdgeSource;

#[derive(Parser)]
#[command(name = "modview")]
#[command(version)]
#[command(about = "Go module graph analyzer with minimal version selection", long_about = None)]
struct Cli {
    /// Saved `go mod graph` output, or `-` for stdin (runs `go mod graph` when omitted)
    input: Option<String>,

    /// Module directory in which to run `go mod graph`
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Root module path (inferred from the input when omitted)
    #[arg(long, conflicts_with = "go_mod")]
    root: Option<String>,

    /// Read the root module path from this go.mod file
    #[arg(long)]
    go_mod: Option<PathBuf>,

    /// Output format: json, markdown or dot
    #[arg(short, long, default_value = "json")]
    format: ExportFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let converter = match (&cli.root, &cli.go_mod) {
        (Some(root), _) => Converter::with_root(root.clone()),
        (None, Some(path)) => {
            let root = read_module_path(path)
                .with_context(|| format!("Failed to read root module from {}", path.display()))?;
            Converter::with_root(root)
        }
        (None, None) => Converter::new(),
    };

    let source = EdgeSource::from_arg(cli.input.as_deref(), cli.dir.clone());
    let reader = source
        .open()
        .with_context(|| format!("Failed to obtain module graph from {}", source))?;

    let graph = converter
        .convert(reader)
        .with_context(|| format!("Failed to convert module graph from {}", source))?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            export(cli.format, &graph, &mut writer)?;
            writer.flush()?;
            info!(path = %path.display(), format = %cli.format, "wrote module graph");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export(cli.format, &graph, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}
