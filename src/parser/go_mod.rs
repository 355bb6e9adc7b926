//! Reads the root module path from a `go.mod` file.
//!
//! Only the `module` directive is interpreted; every other directive is
//! ignored.

use std::fs;
use std::path::Path;

/// Errors that can occur while reading a go.mod file.
#[derive(Debug, thiserror::Error)]
pub enum GoModError {
    /// Failed to read the file from disk.
    #[error("Could not read go.mod file: {0}")]
    IoError(#[from] std::io::Error),

    /// The file has no usable `module` directive.
    #[error("go.mod is not in the expected format: module not found")]
    MissingModule,
}

/// Reads a go.mod file and returns its module path.
pub fn read_module_path(path: &Path) -> Result<String, GoModError> {
    let content = fs::read_to_string(path)?;
    parse_module_path(&content)
}

/// Returns the module path declared by go.mod content.
///
/// # Example
///
/// ```
/// use modview::parser::parse_module_path;
///
/// let go_mod = "module example.com/app // main module\n\ngo 1.21\n";
/// assert_eq!(parse_module_path(go_mod).unwrap(), "example.com/app");
/// ```
pub fn parse_module_path(content: &str) -> Result<String, GoModError> {
    for line in content.lines() {
        let line = strip_comment(line).trim();
        let Some(rest) = line.strip_prefix("module") else {
            continue;
        };
        // Reject directives that merely start with "module", like "modules".
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) && !rest.starts_with('"') {
            continue;
        }

        let path = unquote(rest.trim());
        if path.is_empty() {
            return Err(GoModError::MissingModule);
        }
        return Ok(path.to_string());
    }
    Err(GoModError::MissingModule)
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('`').and_then(|v| v.strip_suffix('`')))
        .unwrap_or(value)
}
