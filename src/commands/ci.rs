use anyhow::Result;
use tracing::info;

use super::Command;
use crate::{
    app::context::AppContext,
    core::{plan, process::Runner, steps::execute},
};

pub struct CiCommand;

impl Command for CiCommand {
    fn run(&self, ctx: &AppContext, runner: &mut dyn Runner) -> Result<()> {
        let steps = plan::ci(&ctx.root, &ctx.cfg);
        execute(&steps, runner)?;
        info!(steps = steps.len(), "all checks passed");
        Ok(())
    }
}
