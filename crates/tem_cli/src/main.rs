//! tem CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Any failure, reported as `Error: <message>` on stderr

use std::io::IsTerminal;
use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod error;

use commands::Command;

/// Exit codes reported to the shell.
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const FAILURE: u8 = 1;
}

fn main() -> ExitCode {
    let result = commands::parse_args(std::env::args_os())
        .map_err(anyhow::Error::from)
        .and_then(|cli| {
            init_logging(cli.verbose);
            Command::try_from(cli)?.run()
        });

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(ExitCodes::FAILURE)
        }
    }
}

/// Log to stderr so stdout only carries command output.
fn init_logging(verbose: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if verbose {
        // Matches both the `tem` binary and `tem_templates` targets.
        filter = filter.add_directive("tem=debug".parse().unwrap());
    }

    let log_result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }
}
