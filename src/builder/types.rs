use std::fmt;

/// Outcome of processing one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// TOC was regenerated and written back
    Updated,
    /// Regenerating produced identical bytes
    Unchanged,
    /// Check mode: regenerating would change the file
    Stale,
    /// Recursive mode: the file has no TOC markers
    Skipped,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileStatus::Updated => "updated",
            FileStatus::Unchanged => "unchanged",
            FileStatus::Stale => "stale",
            FileStatus::Skipped => "skipped",
        };
        f.write_str(name)
    }
}

/// Totals for a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub updated: usize,
    pub unchanged: usize,
    pub stale: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn record(&mut self, status: FileStatus) {
        match status {
            FileStatus::Updated => self.updated += 1,
            FileStatus::Unchanged => self.unchanged += 1,
            FileStatus::Stale => self.stale += 1,
            FileStatus::Skipped => self.skipped += 1,
        }
    }

    /// Whether check mode saw at least one stale file
    pub fn stale_found(&self) -> bool {
        self.stale > 0
    }
}
