use std::path::{Path, PathBuf};

use log::debug;

use crate::builder::types::{FileStatus, RunSummary};
use crate::config::{Mode, RunConfig, Target};
use crate::directory::collect_markdown_files;
use crate::markdown::generate_toc;
use crate::utils::error::TocResult;
use crate::utils::fs::{read_file, write_file};

/// Work out which files a run covers, in processing order
pub fn resolve_files(target: &Target) -> TocResult<Vec<PathBuf>> {
    match target {
        Target::File(path) => Ok(vec![path.clone()]),
        Target::Recursive(root) => collect_markdown_files(root),
    }
}

/// Regenerate the TOC of a single file.
///
/// With `tolerate_missing` set, a file without any TOC markers is reported
/// as skipped instead of failing. Check mode never writes.
pub fn process_file(path: &Path, mode: Mode, tolerate_missing: bool) -> TocResult<FileStatus> {
    debug!("processing file: {}", path.display());

    let content = read_file(path)?;

    let updated = match generate_toc(&content) {
        Ok(updated) => updated,
        Err(err) if tolerate_missing && err.is_missing_delimiters() => {
            debug!("result: skipped (no markers)");
            return Ok(FileStatus::Skipped);
        }
        Err(err) => return Err(err),
    };

    if updated == content {
        debug!("result: unchanged");
        return Ok(FileStatus::Unchanged);
    }

    if mode == Mode::Check {
        debug!("result: stale");
        return Ok(FileStatus::Stale);
    }

    write_file(path, &updated)?;
    debug!("result: updated");
    Ok(FileStatus::Updated)
}

/// Process files one after another, stopping at the first error.
///
/// `on_status` sees each file's outcome as soon as it is known, so output
/// for earlier files is not lost when a later one fails.
pub fn process_files<F>(files: &[PathBuf], config: &RunConfig, mut on_status: F) -> TocResult<RunSummary>
where
    F: FnMut(&Path, FileStatus),
{
    let tolerate_missing = config.target.is_recursive();
    let mut summary = RunSummary::default();

    for file in files {
        let status = process_file(file, config.mode, tolerate_missing)?;
        if status == FileStatus::Stale && !summary.stale_found() {
            debug!("stale file found");
        }
        summary.record(status);
        on_status(file, status);
    }

    Ok(summary)
}
