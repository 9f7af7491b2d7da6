use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::{cli::Cli, config::BuildConfig};

#[derive(Debug, Clone)]
pub struct AppContext {
    pub root: PathBuf,
    pub cfg: BuildConfig,
}

impl AppContext {
    pub const fn new(root: PathBuf, cfg: BuildConfig) -> Self {
        Self { root, cfg }
    }

    /// Convenience constructor resolving the project root and loading config.
    ///
    /// `CARGO_TARGET_DIR`, when set, overrides the configured target directory.
    ///
    /// # Errors
    /// Returns an error if the current directory is unavailable or the config is invalid.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("failed to resolve current directory")?,
        };
        let cfg = BuildConfig::load(&root, cli.config.as_deref())?
            .with_target_dir_override(std::env::var_os("CARGO_TARGET_DIR"));
        Ok(Self::new(root, cfg))
    }

    /// Absolute location of the generated-output directory.
    pub fn generated_dir(&self) -> PathBuf {
        self.root.join(&self.cfg.generated_dir)
    }
}
