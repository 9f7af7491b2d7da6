use anyhow::Result;

use super::Command;
use crate::{
    app::context::AppContext,
    core::{plan, process::Runner, steps::execute},
};

pub struct UpdateReadmeCommand;

impl Command for UpdateReadmeCommand {
    fn run(&self, ctx: &AppContext, runner: &mut dyn Runner) -> Result<()> {
        execute(&plan::update_readme(&ctx.root, &ctx.cfg), runner)
    }
}
