use std::path::{Path, PathBuf};

use crate::{
    cli::WebBinArgs,
    config::BuildConfig,
    core::{process::CommandSpec, steps::Step},
};

/// Location of the compiled module for `args` under the web target directory.
pub fn wasm_artifact(root: &Path, cfg: &BuildConfig, args: &WebBinArgs) -> PathBuf {
    root.join(&cfg.target_dir)
        .join(&cfg.web_target)
        .join(args.profile.label())
        .join(format!("{}.wasm", args.name))
}

/// Compile an example for the web, stage its page and generate bindings.
pub fn web_bin(root: &Path, cfg: &BuildConfig, args: &WebBinArgs) -> Vec<Step> {
    let generated = root.join(&cfg.generated_dir);

    let build = CommandSpec::new("cargo build", "cargo", root)
        .args(["build", "--target", cfg.web_target.as_str()])
        .args(args.profile.cargo_flag())
        .args(["--bin", args.name.as_str()])
        .args(args.extra.iter().cloned())
        .env("RUSTFLAGS", cfg.web_rustflags.as_str());

    let bindgen = CommandSpec::new("wasm-bindgen", "wasm-bindgen", root)
        .arg("--out-dir")
        .path_arg(&generated)
        .args(["--target", "web"])
        .path_arg(&wasm_artifact(root, cfg, args));

    vec![
        Step::Run(build),
        Step::ResetDir(generated.clone()),
        Step::CopyOptional {
            from: root.join(&cfg.examples_dir).join(&args.name).join("resources"),
            to: generated.join("resources"),
        },
        Step::Render {
            template: root.join(&cfg.index_template),
            output: generated.join("index.html"),
            placeholder: cfg.template_placeholder.clone(),
            value: args.name.clone(),
        },
        Step::Run(bindgen),
    ]
}
