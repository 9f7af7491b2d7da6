use anyhow::Result;
use tracing::debug;

use crate::{
    app::context::AppContext,
    cli::{Cli, Task},
    core::process::Runner,
};

pub mod ci;
pub mod download_assets;
pub mod help;
pub mod serve;
pub mod update_readme;
pub mod web_bin;

/// Unified interface implemented by each workflow handler.
pub trait Command {
    /// Execute the workflow, running external tools through `runner`.
    ///
    /// # Errors
    /// Returns the first failing step's error.
    fn run(&self, ctx: &AppContext, runner: &mut dyn Runner) -> Result<()>;
}

/// Central dispatcher: routes the subcommand word to a workflow handler.
///
/// The help path never loads configuration so it cannot fail.
///
/// # Errors
/// Returns an error if the invocation is malformed or the workflow fails.
pub fn dispatch(cli: &Cli, runner: &mut dyn Runner) -> Result<()> {
    let task = cli.task()?;
    if task == Task::Help {
        help::print_usage();
        return Ok(());
    }

    let ctx = AppContext::from_cli(cli)?;
    debug!(root = %ctx.root.display(), ?task, "dispatching");

    match task {
        Task::WebBin(args) => web_bin::WebBinCommand { args }.run(&ctx, runner),
        Task::Serve => serve::ServeCommand.run(&ctx, runner),
        Task::Ci => ci::CiCommand.run(&ctx, runner),
        Task::DownloadAssets => download_assets::DownloadAssetsCommand.run(&ctx, runner),
        Task::UpdateReadme => update_readme::UpdateReadmeCommand.run(&ctx, runner),
        Task::Help => Ok(()),
    }
}
