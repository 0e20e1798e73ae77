//! Cortex Engine - pure advisory computations for the Cortex mesh.
//!
//! Everything here is deterministic and free of I/O:
//! - **Telemetry**: the observed network-health input record
//! - **Weights**: telemetry-driven normalized emission weight vector
//! - **Split**: market-mode reserve split table with total fallback
//! - **Score**: proof-layer composite scoring against a weight vector
//!
//! # Example
//!
//! ```
//! use cortex_engine::{compute_weights, split_for_tag, Telemetry};
//!
//! let weights = compute_weights(&Telemetry::default())?;
//! assert!((weights.total() - 1.0).abs() < 1e-9);
//!
//! let split = split_for_tag("bull");
//! assert_eq!(split.total(), 100);
//! # Ok::<(), cortex_engine::Error>(())
//! ```

pub mod error;
pub mod score;
pub mod split;
pub mod telemetry;
pub mod weights;

pub use error::{Error, Result};
pub use score::{composite, LayerScores, LAYER_COUNT};
pub use split::{split_for, split_for_tag, MarketMode, ReserveSplit};
pub use telemetry::Telemetry;
pub use weights::{compute_weights, WeightVector, WEIGHT_COUNT};
