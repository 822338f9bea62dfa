use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Common result type for TOC operations
pub type TocResult<T> = Result<T, TocError>;

/// Error types for TOC generation and file processing
#[derive(Debug)]
pub enum TocError {
    /// Conflicting or missing command-line options
    InvalidArguments(String),
    /// Recursive target does not exist
    PathNotFound(PathBuf),
    /// Recursive target exists but is not a directory
    NotADirectory(PathBuf),
    /// File (or directory entry) could not be read
    UnreadableFile { path: PathBuf, source: io::Error },
    /// Neither TOC marker is present
    MissingDelimiters,
    /// Start marker present without an end marker
    UnmatchedStart,
    /// End marker present without a start marker
    UnmatchedEnd,
    /// End marker appears before the start marker
    DelimitersOutOfOrder,
    /// A marker appears more than once
    DuplicateDelimiter(&'static str),
    /// Nothing outside the TOC region looks like a heading
    NoHeadingsFound,
    /// Updated content could not be written back
    UnwritableFile { path: PathBuf, source: io::Error },
}

impl TocError {
    /// Whether this is the one error recursive mode tolerates
    pub fn is_missing_delimiters(&self) -> bool {
        matches!(self, TocError::MissingDelimiters)
    }
}

impl fmt::Display for TocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocError::InvalidArguments(msg) => write!(f, "{}", msg),
            TocError::PathNotFound(path) => {
                write!(f, "Recursive path does not exist: {}", path.display())
            }
            TocError::NotADirectory(path) => {
                write!(f, "--recursive requires a directory: {}", path.display())
            }
            TocError::UnreadableFile { path, source } => {
                write!(f, "Unable to read markdown file: {} ({})", path.display(), source)
            }
            TocError::MissingDelimiters => write!(f, "TOC delimiters not found"),
            TocError::UnmatchedStart => write!(f, "TOC start delimiter found without end"),
            TocError::UnmatchedEnd => write!(f, "TOC end delimiter found without start"),
            TocError::DelimitersOutOfOrder => {
                write!(f, "TOC end delimiter appears before start delimiter")
            }
            TocError::DuplicateDelimiter(marker) => {
                write!(f, "TOC delimiter appears more than once: {}", marker)
            }
            TocError::NoHeadingsFound => write!(f, "No headings found to generate TOC"),
            TocError::UnwritableFile { path, source } => {
                write!(f, "Unable to write markdown file: {} ({})", path.display(), source)
            }
        }
    }
}

impl Error for TocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TocError::UnreadableFile { source, .. } | TocError::UnwritableFile { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_cli_wording() {
        assert_eq!(TocError::MissingDelimiters.to_string(), "TOC delimiters not found");
        assert_eq!(
            TocError::UnmatchedStart.to_string(),
            "TOC start delimiter found without end"
        );
        assert_eq!(
            TocError::UnmatchedEnd.to_string(),
            "TOC end delimiter found without start"
        );
        assert_eq!(
            TocError::NoHeadingsFound.to_string(),
            "No headings found to generate TOC"
        );
    }

    #[test]
    fn test_only_missing_delimiters_is_tolerable() {
        assert!(TocError::MissingDelimiters.is_missing_delimiters());
        assert!(!TocError::UnmatchedStart.is_missing_delimiters());
        assert!(!TocError::NoHeadingsFound.is_missing_delimiters());
    }

    #[test]
    fn test_io_source_is_exposed() {
        let err = TocError::UnreadableFile {
            path: PathBuf::from("missing.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.md"));
    }
}
