//! Processor boundary
//!
//! Retrieval and mutation of issues and pull requests live behind this
//! trait. The pipeline hands the frozen options across, logs the
//! rate-limit snapshot on either side of the call, and reads back the two
//! result collections. Nothing else crosses the boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::options::Options;

/// Failure surfaced by a processor implementation.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ProcessorError {
    pub message: String,
}

impl ProcessorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// API quota snapshot, logged before and after processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_at: Option<DateTime<Utc>>,
}

impl std::fmt::Display for RateLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} remaining", self.remaining, self.limit)?;
        if let Some(reset_at) = self.reset_at {
            write!(f, ", resets at {}", reset_at.to_rfc3339())?;
        }
        Ok(())
    }
}

/// One issue or pull request the processor acted on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedItem {
    pub number: u64,
    pub title: String,
    pub is_pull_request: bool,
}

/// What one processing pass produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessorReport {
    /// Items newly marked (or still) stale this run.
    pub stale_items: Vec<ProcessedItem>,
    /// Items closed this run.
    pub closed_items: Vec<ProcessedItem>,
}

/// The external collaborator that walks and mutates items.
pub trait IssueProcessor {
    /// Current quota snapshot, when the backing service exposes one.
    fn rate_limit(&self) -> Option<RateLimit>;

    /// Run one pass over the repository under the given options.
    fn process(&mut self, options: &Options) -> Result<ProcessorReport, ProcessorError>;
}
