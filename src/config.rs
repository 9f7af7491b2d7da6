use std::{
    ffi::OsString,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Name of the optional configuration file looked up in the project root.
pub const CONFIG_FILE: &str = "buildtask.toml";

/// Paths, URLs and tool arguments used by the workflows.
///
/// Every field has a default; `buildtask.toml` may override any of them.
/// Relative paths are resolved against the project root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct BuildConfig {
    /// Target triple for web builds.
    pub web_target: String,
    /// `RUSTFLAGS` value enabling unstable web-platform APIs.
    pub web_rustflags: String,
    /// Cargo's target directory; `CARGO_TARGET_DIR` takes precedence.
    pub target_dir: PathBuf,
    /// Directory holding build output and served by `serve`.
    pub generated_dir: PathBuf,
    /// Directory containing one sub-directory per example.
    pub examples_dir: PathBuf,
    /// Shared HTML template for generated `index.html`.
    pub index_template: PathBuf,
    /// Token in the template replaced by the example name.
    pub template_placeholder: String,
    /// File extensions the static server may serve.
    pub serve_extensions: Vec<String>,
    /// Packages left out of the web-target lint pass in `ci`.
    pub web_lint_exclude: Vec<String>,
    /// Where downloaded asset archives are stored and extracted.
    pub assets_dir: PathBuf,
    pub scene_tar_url: String,
    pub scene_zip_url: String,
    /// Package whose doc comments generate the README.
    pub readme_package: PathBuf,
    /// README template, relative to `readme_package`.
    pub readme_template: PathBuf,
    /// README output, relative to `readme_package`.
    pub readme_output: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            web_target: "wasm32-unknown-unknown".to_string(),
            web_rustflags: "--cfg=web_sys_unstable_apis".to_string(),
            target_dir: PathBuf::from("target"),
            generated_dir: PathBuf::from("target/generated"),
            examples_dir: PathBuf::from("examples"),
            index_template: PathBuf::from("examples/resources/index.html"),
            template_placeholder: "{{example}}".to_string(),
            serve_extensions: vec!["wasm".into(), "html".into(), "js".into()],
            web_lint_exclude: vec!["rend3-imgui".into(), "rend3-imgui-example".into()],
            assets_dir: PathBuf::from("examples/scene-viewer/resources"),
            scene_tar_url: "https://cdn.cwfitz.com/scenes/rend3-default-scene.tar".to_string(),
            scene_zip_url: "https://cdn.cwfitz.com/scenes/bistro-full.zip".to_string(),
            readme_package: PathBuf::from("rend3"),
            readme_template: PathBuf::from("../README.tpl"),
            readme_output: PathBuf::from("../README.md"),
        }
    }
}

impl BuildConfig {
    /// Load configuration with precedence: explicit file → `<root>/buildtask.toml` → defaults.
    ///
    /// An explicitly named file must exist; the implicit one is optional.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = explicit.map_or_else(|| root.join(CONFIG_FILE), |p| root.join(p));

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound && explicit.is_none() => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };

        Self::parse(&text).with_context(|| format!("invalid config in {}", path.display()))
    }

    /// Replace `target_dir` with a non-empty override, as cargo does for `CARGO_TARGET_DIR`.
    #[must_use]
    pub fn with_target_dir_override(mut self, value: Option<OsString>) -> Self {
        if let Some(dir) = value.filter(|v| !v.is_empty()) {
            self.target_dir = PathBuf::from(dir);
        }
        self
    }

    /// Parse configuration text; absent keys keep their defaults.
    ///
    /// # Errors
    /// Returns an error on malformed TOML or unknown keys.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
