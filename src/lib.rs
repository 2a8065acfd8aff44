//! stale-sweep - Issue and pull request lifecycle sweeper
//!
//! This crate resolves the configuration for one sweep of a repository's
//! issues and pull requests from three layered sources (built-in
//! defaults, named action inputs, a JSON override blob), validates it,
//! compiles the operator's filter terms into fully-scoped search queries,
//! and drives the run against a processor behind a trait boundary.

pub mod context;
pub mod filter;
pub mod mock;
pub mod options;
pub mod outputs;
pub mod pipeline;
pub mod processor;
pub mod report;
pub mod state;

pub use context::RepoContext;
pub use options::{Options, OptionsError, OptionsPatch, ResolvedOptions};
pub use pipeline::{execute, PipelineError};
pub use processor::{IssueProcessor, ProcessorReport};
pub use report::RunReport;
pub use state::{FileStateStore, StateStore};
