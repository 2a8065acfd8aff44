//! Mock collaborators
//!
//! In-crate stand-ins for the processor and state store. The integration
//! tests drive the pipeline through these, and the binary's `run` command
//! wires the mock processor because a live backend is a separate
//! component.

use crate::options::Options;
use crate::processor::{
    IssueProcessor, ProcessedItem, ProcessorError, ProcessorReport, RateLimit,
};
use crate::report::RunReport;
use crate::state::{Bookkeeping, StateError, StateStore};

/// Processor returning canned collections.
#[derive(Debug, Default)]
pub struct MockProcessor {
    stale_items: Vec<ProcessedItem>,
    closed_items: Vec<ProcessedItem>,
    rate_limit: Option<RateLimit>,
    fail_with: Option<String>,
    /// Options snapshot taken when `process` ran, for assertions.
    pub seen_options: Option<Options>,
}

impl MockProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stale(mut self, items: Vec<ProcessedItem>) -> Self {
        self.stale_items = items;
        self
    }

    pub fn with_closed(mut self, items: Vec<ProcessedItem>) -> Self {
        self.closed_items = items;
        self
    }

    pub fn with_rate_limit(mut self, limit: u64, remaining: u64) -> Self {
        self.rate_limit = Some(RateLimit {
            limit,
            remaining,
            reset_at: None,
        });
        self
    }

    /// Make `process` fail with the given message.
    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }
}

impl IssueProcessor for MockProcessor {
    fn rate_limit(&self) -> Option<RateLimit> {
        self.rate_limit.clone()
    }

    fn process(&mut self, options: &Options) -> Result<ProcessorReport, ProcessorError> {
        if let Some(message) = &self.fail_with {
            return Err(ProcessorError::new(message.clone()));
        }
        self.seen_options = Some(options.clone());
        if let Some(rate_limit) = &mut self.rate_limit {
            let used = (self.stale_items.len() + self.closed_items.len()) as u64;
            rate_limit.remaining = rate_limit.remaining.saturating_sub(used);
        }
        Ok(ProcessorReport {
            stale_items: self.stale_items.clone(),
            closed_items: self.closed_items.clone(),
        })
    }
}

/// In-memory state store recording its call sequence.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    pub bookkeeping: Bookkeeping,
    pub restore_calls: u32,
    pub persist_calls: u32,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStateStore {
    fn restore(&mut self) -> Result<(), StateError> {
        self.restore_calls += 1;
        Ok(())
    }

    fn persist(&mut self, report: &RunReport) -> Result<(), StateError> {
        self.persist_calls += 1;
        self.bookkeeping.last_run_id = Some(report.run_id.clone());
        self.bookkeeping.last_fingerprint = Some(report.options_fingerprint.clone());
        self.bookkeeping.last_completed_at = Some(report.completed_at);
        self.bookkeeping.runs_completed += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(number: u64) -> ProcessedItem {
        ProcessedItem {
            number,
            title: format!("item {number}"),
            is_pull_request: false,
        }
    }

    #[test]
    fn test_mock_returns_canned_report() {
        let mut processor = MockProcessor::new()
            .with_stale(vec![item(1), item(2)])
            .with_closed(vec![item(3)]);
        let report = processor.process(&Options::default()).unwrap();
        assert_eq!(report.stale_items.len(), 2);
        assert_eq!(report.closed_items.len(), 1);
        assert!(processor.seen_options.is_some());
    }

    #[test]
    fn test_mock_consumes_rate_limit() {
        let mut processor = MockProcessor::new()
            .with_stale(vec![item(1)])
            .with_rate_limit(5000, 5000);
        processor.process(&Options::default()).unwrap();
        assert_eq!(processor.rate_limit().unwrap().remaining, 4999);
    }

    #[test]
    fn test_mock_failure() {
        let mut processor = MockProcessor::new().failing("quota exhausted");
        let err = processor.process(&Options::default()).unwrap_err();
        assert_eq!(err.to_string(), "quota exhausted");
    }
}
