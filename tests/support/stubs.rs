// Fake tool binaries placed first on PATH so workflows can run end to end
// without a toolchain. Every stub appends one line per call to a shared log.

use std::{
    env,
    ffi::OsString,
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use assert_cmd::{Command, cargo::cargo_bin_cmd};
use tempfile::TempDir;

pub struct Stubs {
    dir: TempDir,
    log: PathBuf,
}

impl Stubs {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("stub dir")?;
        let log = dir.path().join("calls.log");
        Ok(Self { dir, log })
    }

    /// Install a stub that logs `name args | cwd | RUSTFLAGS` and then runs `body`.
    pub fn tool(&self, name: &str, body: &str) -> Result<&Self> {
        let path = self.dir.path().join(name);
        let script = format!(
            "#!/bin/sh\n\
             echo \"{name} $* | cwd=$(pwd -P) | RUSTFLAGS=${{RUSTFLAGS-}}\" >> \"$STUB_LOG\"\n\
             {body}\n"
        );
        fs::write(&path, script).with_context(|| format!("write stub {name}"))?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        Ok(self)
    }

    /// Install a stub that only logs and succeeds.
    pub fn ok(&self, name: &str) -> Result<&Self> {
        self.tool(name, "exit 0")
    }

    /// Logged calls in order.
    pub fn calls(&self) -> Result<Vec<String>> {
        if !self.log.exists() {
            return Ok(Vec::new());
        }
        Ok(fs::read_to_string(&self.log)?
            .lines()
            .map(ToString::to_string)
            .collect())
    }

    fn path_env(&self) -> OsString {
        let mut paths = vec![self.dir.path().to_path_buf()];
        if let Some(existing) = env::var_os("PATH") {
            paths.extend(env::split_paths(&existing));
        }
        env::join_paths(paths).expect("join PATH")
    }

    /// `buildtask -C <root>` wired to the stubs.
    pub fn buildtask(&self, root: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("buildtask");
        cmd.arg("-C")
            .arg(root)
            .env("PATH", self.path_env())
            .env("STUB_LOG", &self.log)
            .env_remove("RUSTFLAGS")
            .env_remove("RUST_LOG")
            .env_remove("CARGO_TARGET_DIR");
        cmd
    }
}

/// A project root with the shared index template in place.
pub fn project_with_template(template: &str) -> Result<TempDir> {
    let root = tempfile::tempdir().context("project dir")?;
    let resources = root.path().join("examples/resources");
    fs::create_dir_all(&resources)?;
    fs::write(resources.join("index.html"), template)?;
    Ok(root)
}

/// Canonical form of `path`, as reported by `pwd -P`.
pub fn canonical(path: &Path) -> String {
    fs::canonicalize(path)
        .expect("canonicalize")
        .display()
        .to_string()
}
