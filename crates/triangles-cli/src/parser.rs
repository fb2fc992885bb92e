//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for validating and classifying triangles.
#[derive(Parser)]
#[command(name = "triangles")]
#[command(about = "Validate edge lengths and classify triangles")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Log filter directive (e.g. "debug", "triangles_core=trace")
    #[arg(long = "log", env = "TRIANGLES_LOG", global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
