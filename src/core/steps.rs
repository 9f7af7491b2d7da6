use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::{
    fs::{CopyOutcome, copy_optional_dir, render_template, reset_dir},
    process::{CommandSpec, Runner},
};

/// One unit of work in a workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Run an external tool; a nonzero exit aborts the workflow.
    Run(CommandSpec),
    /// Delete a directory's contents and recreate it empty.
    ResetDir(PathBuf),
    /// Copy a directory if it exists; only "not found" is tolerated.
    CopyOptional { from: PathBuf, to: PathBuf },
    /// Write `output` as `template` with `placeholder` replaced by `value`.
    Render {
        template: PathBuf,
        output: PathBuf,
        placeholder: String,
        value: String,
    },
}

impl Step {
    /// Shell-style rendering used for step echo.
    pub fn display(&self) -> String {
        match self {
            Self::Run(spec) => spec.display(),
            Self::ResetDir(dir) => format!("rm -rf {0} && mkdir -p {0}", dir.display()),
            Self::CopyOptional { from, to } => {
                format!("cp -r {} {}", from.display(), to.display())
            }
            Self::Render {
                template,
                output,
                placeholder,
                value,
            } => format!(
                "render {} -> {} ({placeholder}={value})",
                template.display(),
                output.display()
            ),
        }
    }
}

/// Run `steps` in order, stopping at the first failure.
///
/// # Errors
/// Returns the first failing step's error; later steps are not started.
pub fn execute(steps: &[Step], runner: &mut dyn Runner) -> Result<()> {
    for step in steps {
        info!("+ {}", step.display());
        match step {
            Step::Run(spec) => runner.run(spec)?,
            Step::ResetDir(dir) => reset_dir(dir)?,
            Step::CopyOptional { from, to } => match copy_optional_dir(from, to) {
                CopyOutcome::Copied { files } => {
                    debug!(from = %from.display(), files, "copied resources");
                }
                CopyOutcome::SkippedNotFound => {
                    debug!(from = %from.display(), "no resources to copy");
                }
                CopyOutcome::Failed(e) => {
                    return Err(e).with_context(|| {
                        format!("failed to copy {} to {}", from.display(), to.display())
                    });
                }
            },
            Step::Render {
                template,
                output,
                placeholder,
                value,
            } => render_template(template, output, placeholder, value)?,
        }
    }
    Ok(())
}
