//! Run report
//!
//! The summary a completed pipeline returns: identifiers, counts, and a
//! human-readable line for the log tail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Schema version for the run report.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Schema identifier.
pub const REPORT_SCHEMA_ID: &str = "stale-sweep/run_report@1";

/// Generate a new run id (sortable, filesystem-safe).
pub fn generate_run_id() -> String {
    ulid::Ulid::new().to_string().to_lowercase()
}

/// Summary of one completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub schema_version: u32,
    pub schema_id: String,
    pub run_id: String,
    pub completed_at: DateTime<Utc>,
    /// Fingerprint of the options the run executed under.
    pub options_fingerprint: String,
    pub stale_count: usize,
    pub closed_count: usize,
    pub duration_ms: u64,
    pub human_summary: String,
}

impl RunReport {
    pub fn new(
        run_id: String,
        options_fingerprint: String,
        stale_count: usize,
        closed_count: usize,
        duration_ms: u64,
    ) -> Self {
        let human_summary = format!(
            "{stale_count} item(s) marked stale, {closed_count} closed in {duration_ms}ms"
        );
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            schema_id: REPORT_SCHEMA_ID.to_string(),
            run_id,
            completed_at: Utc::now(),
            options_fingerprint,
            stale_count,
            closed_count,
            duration_ms,
            human_summary,
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
