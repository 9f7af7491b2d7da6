use anyhow::Result;
use tracing::info;

use super::Command;
use crate::{
    app::context::AppContext,
    cli::WebBinArgs,
    core::{plan, process::Runner, steps::execute},
};

pub struct WebBinCommand {
    pub args: WebBinArgs,
}

impl Command for WebBinCommand {
    fn run(&self, ctx: &AppContext, runner: &mut dyn Runner) -> Result<()> {
        let steps = plan::web_bin(&ctx.root, &ctx.cfg, &self.args);
        execute(&steps, runner)?;
        info!(
            example = %self.args.name,
            profile = self.args.profile.label(),
            out = %ctx.generated_dir().display(),
            "web build ready"
        );
        Ok(())
    }
}
