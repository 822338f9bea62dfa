use std::path::Path;

use log::debug;

use crate::builder::FileStatus;
use crate::config::{Mode, Verbosity};

/// The stdout line for a file's outcome, if one should be shown.
///
/// Updated and stale files are always reported. Everything else only
/// appears with --verbose, and --quiet silences the lot.
pub fn status_line(status: FileStatus, path: &Path, mode: Mode, verbosity: Verbosity) -> Option<String> {
    debug!("printing decision: status={}", status);

    if verbosity == Verbosity::Quiet {
        return None;
    }

    let verbose = verbosity == Verbosity::Verbose;
    let label = match (status, mode) {
        (FileStatus::Stale, _) => "Stale",
        (FileStatus::Updated, Mode::Write) => "Updated",
        (FileStatus::Unchanged, _) if verbose => "Up-to-date",
        (FileStatus::Skipped, _) if verbose => "Skipped (no markers)",
        _ => return None,
    };

    Some(format!("{}: {}", label, path.display()))
}

/// Print a file's status to stdout when the verbosity calls for it
pub fn print_status(status: FileStatus, path: &Path, mode: Mode, verbosity: Verbosity) {
    if let Some(line) = status_line(status, path, mode, verbosity) {
        println!("{}", line);
    }
}

/// Print a fatal error to stderr
pub fn print_error(err: &dyn std::fmt::Display) {
    eprintln!("ERROR: {}", err);
}
