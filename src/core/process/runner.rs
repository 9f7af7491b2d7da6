use std::{io::ErrorKind, process::ExitStatus, time::Instant};

use anyhow::{Context, Result, bail};
use tracing::debug;

use super::{error::StepError, spec::CommandSpec};

/// Executes external invocations. Implemented by [`ProcessRunner`] and by test fakes.
pub trait Runner {
    /// Run the invocation to completion.
    ///
    /// # Errors
    /// Returns [`StepError`] when the tool cannot be started or exits unsuccessfully.
    fn run(&mut self, spec: &CommandSpec) -> Result<()>;
}

/// Runs invocations as blocking child processes with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    fn run(&mut self, spec: &CommandSpec) -> Result<()> {
        if !spec.cwd.is_dir() {
            bail!(
                "working directory {} for {} does not exist",
                spec.cwd.display(),
                spec.label
            );
        }
        let started = Instant::now();
        let status = match spec.to_command().status() {
            Ok(status) => status,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StepError::NotFound {
                    program: spec.program.clone(),
                }
                .into());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to run {}", spec.program));
            }
        };
        debug!(
            step = %spec.label,
            elapsed = ?started.elapsed(),
            %status,
            "step finished"
        );
        check_status(&spec.label, status)
    }
}

fn check_status(label: &str, status: ExitStatus) -> Result<()> {
    if status.success() {
        return Ok(());
    }
    if let Some(code) = status.code() {
        return Err(StepError::Exited {
            label: label.to_string(),
            code,
        }
        .into());
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return Err(StepError::Signaled {
                label: label.to_string(),
                signal,
            }
            .into());
        }
    }
    Err(StepError::Exited {
        label: label.to_string(),
        code: 1,
    }
    .into())
}
