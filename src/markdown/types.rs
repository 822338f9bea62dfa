pub use crate::utils::error::TocResult;

/// A single heading found outside the TOC region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Number of leading `#` characters (1-6)
    pub level: usize,
    /// Trimmed text after the hash markers, kept verbatim
    pub title: String,
    /// Anchor unique within the document
    pub anchor: String,
}

impl Heading {
    pub fn new(level: usize, title: String, anchor: String) -> Self {
        Self { level, title, anchor }
    }
}

/// Line ending style of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// Detect the line ending of a document. Any `\r\n` makes it CRLF.
    pub fn detect(content: &str) -> Self {
        if content.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_line_ending() {
        assert_eq!(LineEnding::detect("# A\n## B\n"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("# A\r\n## B\r\n"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect("no newline"), LineEnding::Lf);
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
    }
}
