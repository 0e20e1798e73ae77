//! Cortex Sim - mock mesh data and snapshot publishing.
//!
//! The write side of a development mesh: a seeded random simulation of peer
//! activity, the pluggable seam that turns it into engine inputs, and the
//! publisher that writes the snapshot files the read model consumes.
//!
//! - **Mesh**: deterministic mock peer mesh (not a validated subsystem)
//! - **Source**: `SignalSource` seam with mesh-backed and fixed feeds
//! - **Publisher**: per-node snapshot file writer

pub mod error;
pub mod mesh;
pub mod publisher;
pub mod source;

pub use error::{Error, Result};
pub use mesh::{MeshConfig, MeshNode, MeshSim, MeshStats};
pub use publisher::SnapshotPublisher;
pub use source::{
    FixedSignalSource, MeshSignalSource, SignalSource, Signals, REFERENCE_LAYERS,
    REFERENCE_TELEMETRY,
};
