mod types;
mod validation;

pub use types::*;

use crate::cli::types::Cli;
use crate::utils::error::TocResult;
use crate::utils::path::single_target;

impl RunConfig {
    /// Build the run configuration from parsed command-line options
    pub fn from_cli(cli: &Cli) -> TocResult<Self> {
        validation::validate_cli(cli)?;

        let mode = if cli.check { Mode::Check } else { Mode::Write };

        let target = match &cli.recursive {
            Some(dir) => Target::Recursive(dir.clone()),
            None => Target::File(single_target(cli.file.as_ref())),
        };

        let verbosity = if cli.quiet {
            Verbosity::Quiet
        } else if cli.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Ok(RunConfig {
            mode,
            target,
            verbosity,
            debug: cli.debug,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::TocError;
    use clap::Parser;
    use std::path::PathBuf;

    fn config(args: &[&str]) -> TocResult<RunConfig> {
        let mut argv = vec!["update-markdown-toc"];
        argv.extend_from_slice(args);
        RunConfig::from_cli(&Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_defaults_to_readme() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.mode, Mode::Write);
        assert_eq!(cfg.target, Target::File(PathBuf::from("README.md")));
        assert_eq!(cfg.verbosity, Verbosity::Normal);
        assert!(!cfg.debug);
    }

    #[test]
    fn test_check_with_file() {
        let cfg = config(&["--check", "docs/guide.md"]).unwrap();
        assert!(cfg.is_check());
        assert_eq!(cfg.target, Target::File(PathBuf::from("docs/guide.md")));
    }

    #[test]
    fn test_check_with_recursive() {
        let cfg = config(&["-c", "-r", "docs", "-v"]).unwrap();
        assert!(cfg.is_check());
        assert!(cfg.target.is_recursive());
        assert_eq!(cfg.verbosity, Verbosity::Verbose);
    }

    #[test]
    fn test_check_does_not_default() {
        let err = config(&["--check"]).unwrap_err();
        assert!(matches!(err, TocError::InvalidArguments(_)));
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        let err = config(&["-q", "-v", "README.md"]).unwrap_err();
        assert!(matches!(err, TocError::InvalidArguments(_)));
    }

    #[test]
    fn test_recursive_with_file_conflict() {
        let err = config(&["-r", "docs", "README.md"]).unwrap_err();
        assert!(matches!(err, TocError::InvalidArguments(_)));
    }

    #[test]
    fn test_quiet() {
        let cfg = config(&["--quiet", "-d"]).unwrap();
        assert_eq!(cfg.verbosity, Verbosity::Quiet);
        assert!(cfg.debug);
    }
}
