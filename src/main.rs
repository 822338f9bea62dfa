use std::process::ExitCode;

// Module declarations
mod builder;
mod cli;
mod config;
mod directory;
mod markdown;
mod utils;

fn main() -> ExitCode {
    // Run the CLI
    cli::run()
}
