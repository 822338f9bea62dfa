use std::fs;
use std::path::Path;

use crate::utils::error::{TocError, TocResult};

/// Read a whole file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> TocResult<String> {
    fs::read_to_string(path.as_ref()).map_err(|source| TocError::UnreadableFile {
        path: path.as_ref().to_path_buf(),
        source,
    })
}

/// Replace the contents of an existing file
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> TocResult<()> {
    fs::write(path.as_ref(), contents.as_bytes()).map_err(|source| TocError::UnwritableFile {
        path: path.as_ref().to_path_buf(),
        source,
    })
}
