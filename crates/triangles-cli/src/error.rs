//! CLI-specific error types and exit code mapping.

use thiserror::Error;
use triangles_core::InvalidTriangle;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The supplied edge lengths do not form a triangle.
    #[error("Invalid triangle: {0}")]
    InvalidTriangle(#[from] InvalidTriangle),

    /// Configuration could not be applied (e.g. a malformed log filter).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h:
    /// - 65: Input data was incorrect (`EX_DATAERR`)
    /// - 74: Input/output error (`EX_IOERR`)
    /// - 78: Configuration error (`EX_CONFIG`)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidTriangle(_) => 65, // EX_DATAERR
            Self::Io(_) => 74,              // EX_IOERR
            Self::Config(_) => 78,          // EX_CONFIG
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_triangle_exit_code() {
        let err = CliError::from(InvalidTriangle::InequalityViolated {
            ab: 1.0,
            bc: 2.0,
            ac: 3.0,
        });
        assert_eq!(err.exit_code(), 65);
        assert!(err.to_string().starts_with("Invalid triangle: Longest edge"));
    }

    #[test]
    fn test_io_exit_code() {
        let err = CliError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_config_exit_code() {
        let err = CliError::Config("invalid log filter".to_string());
        assert_eq!(err.exit_code(), 78);
        assert_eq!(err.to_string(), "Configuration error: invalid log filter");
    }
}
