//! stale-sweep CLI
//!
//! Entry point for the `stale-sweep` command-line tool.

use clap::{Parser, Subcommand};
use stale_sweep::context::{ContextError, RepoContext};
use stale_sweep::mock::MockProcessor;
use stale_sweep::options::{EnvInputs, ResolvedOptions};
use stale_sweep::outputs::OutputFile;
use stale_sweep::pipeline::{self, PipelineError};
use stale_sweep::state::FileStateStore;
use std::path::PathBuf;
use std::process;

/// Default location of the bookkeeping file for `run`.
const DEFAULT_STATE_PATH: &str = ".stale-sweep/bookkeeping.json";

#[derive(Parser)]
#[command(name = "stale-sweep")]
#[command(about = "Issue and pull request lifecycle sweeper", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve, validate, and print the run configuration without running
    Resolve {
        /// Repository as owner/name (default: $GITHUB_REPOSITORY)
        #[arg(long)]
        repository: Option<String>,
    },

    /// Execute one sweep (mock processor; a live backend ships separately)
    Run {
        /// Repository as owner/name (default: $GITHUB_REPOSITORY)
        #[arg(long)]
        repository: Option<String>,

        /// Path to the bookkeeping file
        #[arg(long, default_value = DEFAULT_STATE_PATH)]
        state_path: PathBuf,

        /// Path to the outputs file (default: $GITHUB_OUTPUT)
        #[arg(long)]
        github_output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { repository } => cmd_resolve(repository),
        Commands::Run {
            repository,
            state_path,
            github_output,
        } => cmd_run(repository, state_path, github_output),
    }
}

fn repo_context(flag: Option<String>) -> Result<RepoContext, ContextError> {
    match flag {
        Some(slug) => RepoContext::parse(&slug),
        None => RepoContext::from_env(),
    }
}

fn cmd_resolve(repository: Option<String>) {
    let result = repo_context(repository)
        .map_err(PipelineError::from)
        .and_then(|repo| {
            let mut resolved = ResolvedOptions::resolve(&EnvInputs)?;
            resolved.compile_filters(&repo);
            Ok(resolved)
        });

    match result.and_then(|resolved| Ok(resolved.redacted_json()?)) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(e.exit_code());
        }
    }
}

fn cmd_run(repository: Option<String>, state_path: PathBuf, github_output: Option<PathBuf>) {
    let repo = match repo_context(repository) {
        Ok(repo) => repo,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(PipelineError::from(e).exit_code());
        }
    };

    let mut processor = MockProcessor::new().with_rate_limit(5000, 5000);
    let mut state = FileStateStore::new(state_path);
    let outputs = github_output.map(OutputFile::new).or_else(OutputFile::from_env);

    match pipeline::execute(&EnvInputs, &repo, &mut processor, &mut state, outputs.as_ref()) {
        Ok(report) => match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(e.exit_code());
        }
    }
}
