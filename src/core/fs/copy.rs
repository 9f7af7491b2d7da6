use std::{fs, io, path::Path};

use walkdir::WalkDir;

/// Result of a best-effort directory copy.
#[derive(Debug)]
pub enum CopyOutcome {
    Copied { files: usize },
    SkippedNotFound,
    Failed(io::Error),
}

/// Recursively copy `from` to `to`, creating `to` as needed.
///
/// A missing `from` is reported as [`CopyOutcome::SkippedNotFound`] rather than an error.
pub fn copy_optional_dir(from: &Path, to: &Path) -> CopyOutcome {
    match fs::metadata(from) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return CopyOutcome::Failed(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a directory", from.display()),
            ));
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => return CopyOutcome::SkippedNotFound,
        Err(e) => return CopyOutcome::Failed(e),
    }

    match copy_tree(from, to) {
        Ok(files) => CopyOutcome::Copied { files },
        Err(e) => CopyOutcome::Failed(e),
    }
}

fn copy_tree(from: &Path, to: &Path) -> io::Result<usize> {
    let mut files = 0;
    for entry in WalkDir::new(from).follow_links(true) {
        let entry = entry.map_err(io::Error::from)?;
        let rel = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| io::Error::other(e.to_string()))?;
        let dest = to.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
            files += 1;
        }
    }
    Ok(files)
}
