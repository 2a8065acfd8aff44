//! Run pipeline
//!
//! One run, start to finish: resolve options from the three layers,
//! compile the filter terms, restore prior state, hand the frozen record
//! to the processor (rate-limit snapshots on either side), persist state,
//! and publish the two named outputs. Progress goes to stderr; results
//! come back as a [`RunReport`].

use std::io;
use std::time::Instant;

use crate::context::{ContextError, RepoContext};
use crate::options::{InputSource, OptionsError, ResolvedOptions};
use crate::outputs::{OutputFile, CLOSED_ITEMS_OUTPUT, STALE_ITEMS_OUTPUT};
use crate::processor::{IssueProcessor, ProcessorError};
use crate::report::{generate_run_id, RunReport};
use crate::state::{StateError, StateStore};

/// Pipeline errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Options(#[from] OptionsError),

    #[error("context error: {0}")]
    Context(#[from] ContextError),

    #[error("processor error: {0}")]
    Processor(#[from] ProcessorError),

    #[error("state error: {0}")]
    State(#[from] StateError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PipelineError {
    /// Exit code surfaced by the binary for this error class.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::Options(_) | PipelineError::Context(_) => 2,
            PipelineError::Processor(_) => 3,
            PipelineError::State(_) => 4,
            PipelineError::Io(_) | PipelineError::Serialization(_) => 5,
        }
    }
}

/// Execute one run.
///
/// `outputs` is optional: outside a runner there may be no output file,
/// and skipping publication is not an error.
pub fn execute(
    inputs: &dyn InputSource,
    repo: &RepoContext,
    processor: &mut dyn IssueProcessor,
    state: &mut dyn StateStore,
    outputs: Option<&OutputFile>,
) -> Result<RunReport, PipelineError> {
    let started = Instant::now();
    let run_id = generate_run_id();
    eprintln!("Run {run_id} against {repo}");

    let mut resolved = ResolvedOptions::resolve(inputs)?;
    resolved.compile_filters(repo);
    eprintln!("Resolved options (fingerprint {}):", resolved.fingerprint);
    eprintln!("{}", resolved.redacted_json()?);

    // Frozen from here on; the processor reads, never writes.
    let resolved = resolved;
    let options = &resolved.options;

    state.restore()?;

    match processor.rate_limit() {
        Some(rate_limit) => eprintln!("Rate limit before processing: {rate_limit}"),
        None => eprintln!("Rate limit before processing: unavailable"),
    }

    let processed = processor.process(options)?;

    match processor.rate_limit() {
        Some(rate_limit) => eprintln!("Rate limit after processing: {rate_limit}"),
        None => eprintln!("Rate limit after processing: unavailable"),
    }

    let report = RunReport::new(
        run_id,
        resolved.fingerprint.clone(),
        processed.stale_items.len(),
        processed.closed_items.len(),
        started.elapsed().as_millis() as u64,
    );

    state.persist(&report)?;

    if let Some(outputs) = outputs {
        outputs.set(STALE_ITEMS_OUTPUT, &serde_json::to_string(&processed.stale_items)?)?;
        outputs.set(CLOSED_ITEMS_OUTPUT, &serde_json::to_string(&processed.closed_items)?)?;
        eprintln!("Wrote outputs: {}", outputs.path().display());
    } else {
        eprintln!("No output file configured; skipping output publication");
    }

    eprintln!("{}", report.human_summary);
    Ok(report)
}
