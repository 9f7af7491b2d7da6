use anyhow::Result;
use tracing::info;

use super::Command;
use crate::{
    app::context::AppContext,
    core::{plan, process::Runner, steps::execute},
};

pub struct ServeCommand;

impl Command for ServeCommand {
    fn run(&self, ctx: &AppContext, runner: &mut dyn Runner) -> Result<()> {
        info!(dir = %ctx.generated_dir().display(), "serving until interrupted");
        execute(&plan::serve(&ctx.root, &ctx.cfg), runner)
    }
}
