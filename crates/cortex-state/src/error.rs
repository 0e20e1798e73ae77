//! Error types for the snapshot read model.

use thiserror::Error;

/// Result type for read-model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur reading the snapshot store.
#[derive(Debug, Error)]
pub enum Error {
    /// No reserve-split snapshot exists anywhere in the store
    #[error("No reserve split snapshots found")]
    NoSplitData,

    /// Snapshot file present but not parseable as the expected shape
    #[error("Malformed snapshot for node {node}: {source}")]
    MalformedSnapshot {
        node: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
