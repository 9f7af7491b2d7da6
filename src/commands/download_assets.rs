use anyhow::Result;

use super::Command;
use crate::{
    app::context::AppContext,
    core::{plan, process::Runner, steps::execute},
};

pub struct DownloadAssetsCommand;

impl Command for DownloadAssetsCommand {
    fn run(&self, ctx: &AppContext, runner: &mut dyn Runner) -> Result<()> {
        execute(&plan::download_assets(&ctx.root, &ctx.cfg), runner)
    }
}
