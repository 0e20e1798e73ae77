//! Error types for the node daemon.

use thiserror::Error;

/// Result type for daemon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur driving a node.
#[derive(Debug, Error)]
pub enum Error {
    /// Engine rejected the sampled telemetry
    #[error("Engine error: {0}")]
    Engine(#[from] cortex_engine::Error),

    /// Snapshot publishing failed
    #[error("Publish error: {0}")]
    Publish(#[from] cortex_sim::Error),
}
