//! Storage error types.

use std::path::PathBuf;
use thiserror::Error;

/// Saving an artifact failed. Recoverable: the cycle is abandoned, never retried.
#[derive(Debug, Error)]
pub enum StorageError {
    /// File system operation failed.
    #[error("failed to {operation}: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image encoder failed.
    #[error("failed to encode image: {path}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The configured extension maps to no known image format.
    #[error("unsupported image extension: {extension:?}")]
    UnsupportedFormat { extension: String },

    /// The temporary file could not be moved into place.
    #[error("failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => format!("Could not {} at {}", operation, path.display()),
            Self::Encode { path, .. } => {
                format!("Could not encode the image for {}", path.display())
            }
            Self::UnsupportedFormat { extension } => {
                format!("Images cannot be saved with the extension '{extension}'. Use jpg or png.")
            }
            Self::AtomicWriteFailed { target_path, .. } => format!(
                "Could not save the file to {}. Please check disk space and permissions.",
                target_path.display()
            ),
        }
    }
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
