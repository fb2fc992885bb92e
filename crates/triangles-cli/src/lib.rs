//! Command-line adapter for `triangles-core`.
//!
//! Parses edge lengths from the command line, builds a
//! [`triangles_core::Triangle`] and prints its classification.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use anyhow as _;
use dotenvy as _;
use tracing as _;

pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use config::{CliConfig, init_tracing};
pub use error::CliError;
pub use parser::Cli;
