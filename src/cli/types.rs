use clap::Parser;
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "update-markdown-toc")]
#[command(about = "Regenerate the table of contents between TOC markers in Markdown files", long_about = None)]
#[command(version)]
#[command(after_help = "When using --check, a target file or a recursive folder must be specified\n\
explicitly. Unlike normal operation, --check does not default to README.md.")]
pub struct Cli {
    /// Markdown file to update (defaults to README.md)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Do not write files; exit non-zero if any TOC is stale
    #[arg(short, long, default_value_t = false)]
    pub check: bool,

    /// Recursively process all .md files under the given folder
    #[arg(short, long, value_name = "DIR")]
    pub recursive: Option<PathBuf>,

    /// Print status for every file processed
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}
