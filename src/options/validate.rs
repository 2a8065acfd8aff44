//! Validation battery
//!
//! Fixed, ordered checks over the merged record. The first violation
//! aborts the run; nothing downstream sees a partially-valid record.

use chrono::{DateTime, NaiveDate};

use super::defaults::{Options, CLOSE_REASONS};

/// Errors raised during resolution and validation.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// A numeric option that must be a real number is not one. By this
    /// point the raw text has been coerced, so the resolved value is
    /// reported (NaN when the input never parsed).
    #[error("option \"{option}\" did not resolve to a number (value: {value})")]
    Number { option: &'static str, value: f64 },

    #[error("option \"start-date\" is not a valid date: {value}")]
    Date { value: String },

    #[error(
        "unsupported close reason \"{value}\"; valid values are \"completed\", \"not_planned\", or an empty string"
    )]
    CloseReason { value: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("canonicalization error: {0}")]
    Canonicalize(String),
}

/// Run the battery in its fixed order, failing on the first violation.
pub fn validate(options: &Options) -> Result<(), OptionsError> {
    require_number("days-before-stale", options.days_before_stale)?;
    require_number("days-before-close", options.days_before_close)?;
    require_number("operations-per-run", options.operations_per_run)?;

    if !options.start_date.is_empty() && !is_valid_date(&options.start_date) {
        return Err(OptionsError::Date {
            value: options.start_date.clone(),
        });
    }

    if !CLOSE_REASONS.contains(&options.close_issue_reason.as_str()) {
        return Err(OptionsError::CloseReason {
            value: options.close_issue_reason.clone(),
        });
    }

    Ok(())
}

fn require_number(option: &'static str, value: f64) -> Result<(), OptionsError> {
    if value.is_nan() {
        return Err(OptionsError::Number { option, value });
    }
    Ok(())
}

/// Accepts an RFC 3339 date-time or a plain `YYYY-MM-DD` date.
fn is_valid_date(raw: &str) -> bool {
    DateTime::parse_from_rfc3339(raw).is_ok()
        || NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
}
