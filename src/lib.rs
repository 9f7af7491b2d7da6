pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod logging;

use anyhow::Result;

use crate::core::process::{ProcessRunner, StepError};

/// Entry point for CLI subcommands.
///
/// # Errors
/// Returns the first failing step's error; see [`StepError`].
pub fn run(cli: &cli::Cli) -> Result<()> {
    commands::dispatch(cli, &mut ProcessRunner)
}

/// Process exit status for a failed run: the tool's own status when a step failed, 1 otherwise.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<StepError>()
        .map_or(1, StepError::exit_code)
}
