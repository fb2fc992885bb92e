//! CLI configuration and logging setup.

use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::parser::Cli;

/// Log filter used when neither `--verbose` nor `--log` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Resolved configuration for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
}

impl CliConfig {
    /// Resolve configuration from parsed arguments.
    ///
    /// `--verbose` wins over `--log` / `TRIANGLES_LOG`, which wins over
    /// [`DEFAULT_LOG_FILTER`].
    pub fn from_cli(cli: &Cli) -> Self {
        let log_filter = if cli.verbose {
            "debug".to_string()
        } else {
            cli.log
                .clone()
                .filter(|filter| !filter.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
        };

        Self { log_filter }
    }
}

/// Install the global `tracing` subscriber, logging to stderr.
///
/// The filter is parsed before anything is installed, so a malformed
/// directive leaves the global subscriber untouched.
pub fn init_tracing(config: &CliConfig) -> Result<(), CliError> {
    let filter = EnvFilter::try_new(&config.log_filter).map_err(|e| {
        CliError::Config(format!("invalid log filter '{}': {e}", config.log_filter))
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::Config(format!("failed to install logger: {e}")))
}
