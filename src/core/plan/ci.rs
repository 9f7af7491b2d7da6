use std::path::Path;

use crate::{
    config::BuildConfig,
    core::{process::CommandSpec, steps::Step},
};

/// Quality gate: format, lint, test, docs, web lint, dependency policy.
pub fn ci(root: &Path, cfg: &BuildConfig) -> Vec<Step> {
    let cargo = |label: &str| CommandSpec::new(label, "cargo", root);

    let web_clippy = cargo("cargo clippy (web)")
        .args(["clippy", "--target", cfg.web_target.as_str(), "--workspace"])
        .args(
            cfg.web_lint_exclude
                .iter()
                .flat_map(|pkg| ["--exclude", pkg.as_str()]),
        )
        .env("RUSTFLAGS", cfg.web_rustflags.as_str());

    [
        cargo("cargo fmt").args(["fmt", "--all", "--", "--check"]),
        cargo("cargo clippy").arg("clippy"),
        cargo("cargo test").arg("test"),
        cargo("cargo doc")
            .args(["doc", "--no-deps"])
            .env("RUSTDOCFLAGS", "-D warnings"),
        web_clippy,
        cargo("cargo deny").args(["deny", "--all-features", "check"]),
    ]
    .into_iter()
    .map(Step::Run)
    .collect()
}
