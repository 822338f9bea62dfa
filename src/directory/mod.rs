use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::utils::error::{TocError, TocResult};
use crate::utils::path::has_markdown_name;

/// Collect every `.md` file under `root`, sorted by path.
///
/// Symlinks are not followed. An unreadable entry aborts the walk.
pub fn collect_markdown_files(root: &Path) -> TocResult<Vec<PathBuf>> {
    if !root.exists() {
        return Err(TocError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(TocError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(root).to_path_buf();
            let source = err
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
            TocError::UnreadableFile { path, source }
        })?;

        if entry.file_type().is_file() && has_markdown_name(entry.path()) {
            files.push(entry.into_path());
        }
    }

    // Plain string order, so `docs-old.md` sorts before `docs/x.md`
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    debug!("found {} markdown files under {}", files.len(), root.display());
    Ok(files)
}
