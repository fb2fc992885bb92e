//! CLI entry point.
//!
//! Loads `.env`, parses arguments, installs logging and dispatches to the
//! command handlers. Command failures are reported on stderr and mapped to
//! the process exit code.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use triangles_cli::handlers::classify::ClassifyArgs;
use triangles_cli::{Cli, CliConfig, CliError, Commands, handlers, init_tracing};

fn main() -> Result<ExitCode> {
    // Load environment variables before parsing so TRIANGLES_LOG can come from .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = CliConfig::from_cli(&cli);
    if let Err(err) = init_tracing(&config) {
        return Ok(report(&err));
    }

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command()
            .print_help()
            .context("Failed to print help")?;
        return Ok(ExitCode::SUCCESS);
    };

    let mut stdout = io::stdout().lock();
    let result = match command {
        Commands::Classify {
            ab,
            bc,
            ac,
            details,
        } => handlers::classify::execute(
            &mut stdout,
            ClassifyArgs {
                ab,
                bc,
                ac,
                details,
            },
        ),
        Commands::Shapes => handlers::shapes::execute(&mut stdout),
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            Ok(report(&err))
        }
    }
}

/// Print a command failure to stderr and pick the matching exit code.
fn report(err: &CliError) -> ExitCode {
    eprintln!("Error: {err}");
    ExitCode::from(err.exit_code())
}
