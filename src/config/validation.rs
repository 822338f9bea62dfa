use crate::cli::types::Cli;
use crate::utils::error::{TocError, TocResult};

/// Reject flag combinations that have no sensible meaning
pub fn validate_cli(cli: &Cli) -> TocResult<()> {
    if cli.quiet && cli.verbose {
        return Err(TocError::InvalidArguments(
            "--quiet and --verbose cannot be used together".to_string(),
        ));
    }

    if cli.check && cli.recursive.is_none() && cli.file.is_none() {
        return Err(TocError::InvalidArguments(
            "--check requires a file or --recursive <path>".to_string(),
        ));
    }

    if cli.recursive.is_some() && cli.file.is_some() {
        return Err(TocError::InvalidArguments(
            "Cannot use --recursive with a file argument".to_string(),
        ));
    }

    Ok(())
}
