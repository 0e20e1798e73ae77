//! Cortex State - snapshot read model for the Cortex mesh.
//!
//! Node processes publish point-in-time JSON snapshots into a shared
//! directory tree; this crate is the read side. It is a stateless layer
//! over externally produced files:
//!
//! - **Field**: explicit known/unknown marker for optional snapshot fields
//! - **Snapshot**: the on-disk advisory and reserve-split records
//! - **Store**: the `SnapshotStore` abstraction and its filesystem backend
//! - **Aggregate**: merge per-node snapshots into one ordered view
//! - **Reader**: locate the protocol-wide reserve split
//!
//! Snapshots are eventually consistent and may be absent, partial, or torn
//! mid-rewrite; every operation here tolerates all three without failing
//! the whole view.

pub mod aggregate;
pub mod error;
pub mod field;
pub mod reader;
pub mod snapshot;
pub mod store;

pub use aggregate::{NodeSummary, ScoreAggregator};
pub use error::{Error, Result};
pub use field::{Field, UNKNOWN_PLACEHOLDER};
pub use reader::{SplitReader, SplitReport};
pub use snapshot::{NodeSnapshot, SplitSnapshot, NODE_SNAPSHOT_FILE, SPLIT_SNAPSHOT_FILE};
pub use store::{FsSnapshotStore, SnapshotStore};
