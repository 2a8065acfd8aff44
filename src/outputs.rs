//! Named outputs
//!
//! Writes run results in the Actions output-file format: one `name=value`
//! line per output, or the delimiter form when a value spans lines. Lines
//! are appended; the runner owns the file's lifetime.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Output carrying the JSON array of items marked stale this run.
pub const STALE_ITEMS_OUTPUT: &str = "staled-issues-prs";

/// Output carrying the JSON array of items closed this run.
pub const CLOSED_ITEMS_OUTPUT: &str = "closed-issues-prs";

/// Append-only writer for the runner's output file.
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Writer for the path the runner advertises, if any.
    pub fn from_env() -> Option<Self> {
        std::env::var_os("GITHUB_OUTPUT").map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one named output.
    pub fn set(&self, name: &str, value: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        if value.contains('\n') {
            // Delimiter form; the delimiter must not occur in the value.
            let delimiter = format!("ghadelimiter_{}", ulid::Ulid::new());
            writeln!(file, "{name}<<{delimiter}")?;
            writeln!(file, "{value}")?;
            writeln!(file, "{delimiter}")?;
        } else {
            writeln!(file, "{name}={value}")?;
        }
        Ok(())
    }
}
