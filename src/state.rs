//! Cross-run state
//!
//! The pipeline brackets the processor with `restore()` and `persist()`;
//! what the state actually holds is this collaborator's business. The
//! file-backed store keeps a small schema-versioned bookkeeping record.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::report::RunReport;

/// Schema version for bookkeeping.json
pub const BOOKKEEPING_SCHEMA_VERSION: u32 = 1;

/// Schema identifier
pub const BOOKKEEPING_SCHEMA_ID: &str = "stale-sweep/bookkeeping@1";

/// Errors for state store operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Bookkeeping carried between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookkeeping {
    pub schema_version: u32,
    pub schema_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_run_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_completed_at: Option<DateTime<Utc>>,
    pub runs_completed: u64,
}

impl Bookkeeping {
    pub fn new() -> Self {
        Self {
            schema_version: BOOKKEEPING_SCHEMA_VERSION,
            schema_id: BOOKKEEPING_SCHEMA_ID.to_string(),
            last_run_id: None,
            last_fingerprint: None,
            last_completed_at: None,
            runs_completed: 0,
        }
    }
}

impl Default for Bookkeeping {
    fn default() -> Self {
        Self::new()
    }
}

/// Collaborator persisting state across runs.
pub trait StateStore {
    /// Load prior state. Called once, before the processor runs.
    fn restore(&mut self) -> Result<(), StateError>;

    /// Save state for the next run. Called once, after the processor runs.
    fn persist(&mut self, report: &RunReport) -> Result<(), StateError>;
}

/// File-backed store. A missing file restores to a fresh record.
#[derive(Debug)]
pub struct FileStateStore {
    path: PathBuf,
    bookkeeping: Bookkeeping,
}

impl FileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            bookkeeping: Bookkeeping::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bookkeeping(&self) -> &Bookkeeping {
        &self.bookkeeping
    }
}

impl StateStore for FileStateStore {
    fn restore(&mut self) -> Result<(), StateError> {
        if self.path.exists() {
            let contents = fs::read_to_string(&self.path)?;
            self.bookkeeping = serde_json::from_str(&contents)?;
        } else {
            self.bookkeeping = Bookkeeping::new();
        }
        Ok(())
    }

    fn persist(&mut self, report: &RunReport) -> Result<(), StateError> {
        self.bookkeeping.last_run_id = Some(report.run_id.clone());
        self.bookkeeping.last_fingerprint = Some(report.options_fingerprint.clone());
        self.bookkeeping.last_completed_at = Some(report.completed_at);
        self.bookkeeping.runs_completed += 1;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.bookkeeping)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
