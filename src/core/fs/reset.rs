use std::{fs, io::ErrorKind, path::Path};

use anyhow::{Context, Result};

/// Remove `dir` and everything under it, then recreate it empty.
///
/// # Errors
/// Returns an error if removal or creation fails.
pub fn reset_dir(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            return Err(e).with_context(|| format!("failed to clear {}", dir.display()));
        }
    }
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))
}
