use std::path::PathBuf;

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Failures reading or writing uploaded documents on disk.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Creating a bucket directory or writing a document failed
    #[error("Failed to write document to {path:?}: {source}")]
    Write {
        /// Directory or file that could not be written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Removing a stored document failed
    #[error("Failed to delete document at {path:?}: {source}")]
    Delete {
        /// File that could not be removed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// A stored path is absolute or escapes the storage root
    #[error("Refusing to resolve document path outside of the storage root: {0:?}")]
    InvalidPath(String),
}

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
