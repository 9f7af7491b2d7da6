use std::path::Path;

use crate::{
    config::BuildConfig,
    core::{process::CommandSpec, steps::Step},
};

/// Serve the generated-output directory, limited to the configured extensions.
pub fn serve(root: &Path, cfg: &BuildConfig) -> Vec<Step> {
    let server = CommandSpec::new("simple-http-server", "simple-http-server", root)
        .path_arg(&root.join(&cfg.generated_dir))
        .arg("-c")
        .arg(cfg.serve_extensions.join(","))
        .arg("-i");
    vec![Step::Run(server)]
}
