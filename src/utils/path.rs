use std::path::{Path, PathBuf};

/// File processed when no target is given
pub const DEFAULT_TARGET: &str = "README.md";

/// Check if a file name marks a Markdown document.
///
/// Matches on the literal `.md` suffix, case-sensitive, so `NOTES.MD` and
/// `page.markdown` are left alone.
pub fn has_markdown_name<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|name| name.to_str())
        .map_or(false, |name| name.ends_with(".md"))
}

/// Resolve the single-file target, falling back to README.md
pub fn single_target(file: Option<&PathBuf>) -> PathBuf {
    file.cloned().unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET))
}
