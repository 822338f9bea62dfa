pub mod logging;
pub mod status;
pub mod types;

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use log::debug;

use crate::builder::{self, RunSummary};
use crate::config::RunConfig;
use crate::utils::error::TocResult;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = match types::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                return ExitCode::SUCCESS;
            }
            _ => {
                status::print_error(&parse_error_message(&err));
                return ExitCode::FAILURE;
            }
        },
    };

    let config = match RunConfig::from_cli(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            status::print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging system
    logging::init_logging(config.debug);
    debug!("Configuration loaded: {:?}", config);

    let result = execute(&config);
    if let Err(e) = &result {
        status::print_error(e);
    }

    let code = exit_code(&config, &result);
    debug!("exiting with status {}", code);
    ExitCode::from(code)
}

/// Reduce a clap parse error to its one-line message, without the
/// `error:` prefix and usage block clap normally prints
pub fn parse_error_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default().trim();
    first.strip_prefix("error:").unwrap_or(first).trim().to_string()
}

/// Process every target file, printing status lines as files finish
pub fn execute(config: &RunConfig) -> TocResult<RunSummary> {
    let files = builder::processor::resolve_files(&config.target)?;

    let summary = builder::process_files(&files, config, |path, file_status| {
        status::print_status(file_status, path, config.mode, config.verbosity);
    })?;

    debug!(
        "{} updated, {} unchanged, {} stale, {} skipped",
        summary.updated, summary.unchanged, summary.stale, summary.skipped
    );
    Ok(summary)
}

/// Map a run's outcome to the process exit status
pub fn exit_code(config: &RunConfig, result: &TocResult<RunSummary>) -> u8 {
    match result {
        Err(_) => 1,
        Ok(summary) if config.is_check() && summary.stale_found() => {
            debug!("exiting with status 1 due to stale TOC");
            1
        }
        Ok(_) => 0,
    }
}
