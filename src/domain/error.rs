use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for projmeta operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure. The native error is kept intact.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Descriptor could not be encoded as JSON.
    #[error("Failed to serialize descriptor: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No descriptor exists at the resolved location.
    #[error(
        "Failed to access project info for project '{}': descriptor not found at {}",
        .project_id,
        .path.display()
    )]
    ProjectNotFound { project_id: String, path: PathBuf },

    /// Descriptor exists but is not a JSON object.
    #[error("Malformed descriptor {}: {}", .path.display(), .details)]
    MalformedDescriptor { path: PathBuf, details: String },

    /// Operation refused because an argument targets something it must not touch.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        AppError::InvalidArgument(message.into())
    }

    /// Provide an `io::ErrorKind` view so callers can branch on the failure class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::InvalidArgument(_) => io::ErrorKind::InvalidInput,
            AppError::ProjectNotFound { .. } => io::ErrorKind::NotFound,
            AppError::MalformedDescriptor { .. } | AppError::Serialization(_) => {
                io::ErrorKind::InvalidData
            }
        }
    }
}
