//! Error types for engine computations.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in engine computations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// Telemetry drove the weight scale factor non-positive or non-finite.
    #[error("Invalid telemetry: weight scale factor {scale} is not positive and finite")]
    InvalidTelemetry { scale: f64 },
}
