//! notekit CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error (filesystem failure)
//! - 2: Invalid arguments (reported by clap)

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod run;

use cli::Cli;

pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the progress lines.
    let default_filter = if cli.verbose {
        "notekit_core=debug,notekit_cli=debug,info"
    } else if cli.quiet {
        "error"
    } else {
        "notekit_core=info,notekit_cli=info,warn"
    };

    let log_result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    match run::execute(&cli) {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(ExitCodes::GENERAL_ERROR)
        }
    }
}
