//! Available subcommands.

use clap::Subcommand;

/// Available commands for the triangles tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Validate three edge lengths and print the triangle's shape
    #[command(allow_negative_numbers = true)]
    Classify {
        /// Length of the AB edge
        ab: f64,
        /// Length of the BC edge
        bc: f64,
        /// Length of the AC edge
        ac: f64,
        /// Print all edge lengths alongside the shape
        #[arg(short, long)]
        details: bool,
    },

    /// List every shape and the rule that defines it
    Shapes,
}
