//! Error types for snapshot publishing.

use thiserror::Error;

/// Result type for publishing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur publishing snapshots.
#[derive(Debug, Error)]
pub enum Error {
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
