use std::path::{Path, PathBuf};

use crate::{
    config::BuildConfig,
    core::{process::CommandSpec, steps::Step},
};

/// File name an archive is stored under: the last path segment of its URL.
fn archive_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

fn fetch(root: &Path, url: &str, dest: &Path) -> Step {
    Step::Run(
        CommandSpec::new("curl", "curl", root)
            .args(["--fail", "--location", "--create-dirs", "-o"])
            .path_arg(dest)
            .arg(url),
    )
}

/// Download the scene archives and unpack them next to where they were saved.
pub fn download_assets(root: &Path, cfg: &BuildConfig) -> Vec<Step> {
    let dir = root.join(&cfg.assets_dir);
    let tar: PathBuf = dir.join(archive_name(&cfg.scene_tar_url));
    let zip: PathBuf = dir.join(archive_name(&cfg.scene_zip_url));

    vec![
        fetch(root, &cfg.scene_tar_url, &tar),
        Step::Run(
            CommandSpec::new("tar", "tar", root)
                .arg("xf")
                .path_arg(&tar)
                .arg("-C")
                .path_arg(&dir),
        ),
        fetch(root, &cfg.scene_zip_url, &zip),
        Step::Run(
            CommandSpec::new("unzip", "unzip", root)
                .arg("-o")
                .path_arg(&zip)
                .arg("-d")
                .path_arg(&dir),
        ),
    ]
}
