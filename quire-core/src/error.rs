//! Error types for Quire Core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using QuireError
pub type Result<T> = std::result::Result<T, QuireError>;

/// Top-level error type for all Quire operations
#[derive(Debug, Error)]
pub enum QuireError {
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while loading the book manifest
///
/// These are the only unrecoverable input errors: a build never starts
/// without a parsed manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Manifest not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Cannot read manifest {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed manifest {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
