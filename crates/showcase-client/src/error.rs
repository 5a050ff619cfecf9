//! Error types for showcase-client

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for showcase-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching projects
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from showcase-core (e.g. a malformed document)
    #[error("Core error: {0}")]
    Core(#[from] showcase_core::Error),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with a non-success status
    #[error("Document store returned HTTP {status} for {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// A local document could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Store configuration is incomplete or invalid
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong
        message: String,
    },

    /// The source is unavailable (used by scripted sources)
    #[error("Source unavailable: {message}")]
    Unavailable {
        /// Why the source could not answer
        message: String,
    },
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an I/O error tied to a path.
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
