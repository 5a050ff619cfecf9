//! Error types for showcase-core.

/// Errors raised by view-state operations and document decoding.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// User input failed validation (e.g. an incomplete comment draft).
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation, if a single one is responsible
        field: Option<String>,
        /// User-facing message
        message: String,
    },

    /// An index pointed outside the sequence it addresses.
    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Length of the addressed sequence
        len: usize,
    },

    /// A project has no images to show.
    #[error("Project '{project}' has no images")]
    EmptyImages {
        /// Identifier of the offending project
        project: String,
    },

    /// An avatar outside the fixed avatar set was selected.
    #[error("Unknown avatar: {url}")]
    UnknownAvatar {
        /// The rejected avatar URL
        url: String,
    },

    /// A comment operation was issued on a view without a comment board.
    #[error("Comments are not enabled for this view")]
    CommentsDisabled,

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` alias for showcase-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a validation error without a field.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a validation error tied to a field.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Returns the message to show the user, when the error is meant for them.
    ///
    /// Validation failures carry a message written for the person at the
    /// keyboard; everything else is diagnostic.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Error::Validation { message, .. } => Some(message),
            _ => None,
        }
    }
}
