use std::path::Path;

use crate::{
    config::BuildConfig,
    core::{process::CommandSpec, steps::Step},
};

/// Regenerate the top-level README from the package's doc comments.
///
/// Both steps run inside the package directory; template and output paths are
/// relative to it.
pub fn update_readme(root: &Path, cfg: &BuildConfig) -> Vec<Step> {
    let package = root.join(&cfg.readme_package);

    vec![
        Step::Run(
            CommandSpec::new("cargo install", "cargo", &package).args(["install", "cargo-readme"]),
        ),
        Step::Run(
            CommandSpec::new("cargo readme", "cargo", &package)
                .args(["readme", "-t"])
                .path_arg(&cfg.readme_template)
                .arg("-o")
                .path_arg(&cfg.readme_output),
        ),
    ]
}
