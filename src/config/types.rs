use std::path::PathBuf;

/// Whether changed files are written or only reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Write,
    /// Lint-only; files are never modified
    Check,
}

/// What the run operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// One explicitly named (or defaulted) file
    File(PathBuf),
    /// Every `.md` file under a directory
    Recursive(PathBuf),
}

impl Target {
    pub fn is_recursive(&self) -> bool {
        matches!(self, Target::Recursive(_))
    }
}

/// How much status output goes to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

/// Validated settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: Mode,
    pub target: Target,
    pub verbosity: Verbosity,
    pub debug: bool,
}

impl RunConfig {
    pub fn is_check(&self) -> bool {
        self.mode == Mode::Check
    }
}
