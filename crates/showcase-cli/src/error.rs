//! Error types for showcase-cli

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for showcase-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in showcase-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from showcase-core
    #[error("Core error: {0}")]
    Core(#[from] showcase_core::Error),

    /// Error from showcase-client
    #[error("Client error: {0}")]
    Client(#[from] showcase_client::Error),

    /// Configuration file or value problem
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// I/O error with path context
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A session command could not be understood
    #[error("{message}")]
    Input {
        /// What was wrong with the input
        message: String,
    },

    /// Terminal read or write failed
    #[error("Terminal I/O error: {0}")]
    Terminal(#[source] std::io::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an input error.
    pub fn input(message: impl Into<String>) -> Self {
        Error::Input {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it concerns.
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("bad key");
        assert_eq!(err.to_string(), "Configuration error: bad key");
    }

    #[test]
    fn test_io_with_path_display() {
        let err = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            "/tmp/config.toml",
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/config.toml"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_from_core() {
        let err: Error = showcase_core::Error::CommentsDisabled.into();
        assert!(matches!(err, Error::Core(_)));
    }
}
