//! Protocol-wide reserve split lookup across node snapshots.

use crate::error::{Error, Result};
use crate::field::Field;
use crate::snapshot::SplitSnapshot;
use crate::store::SnapshotStore;
use cortex_engine::ReserveSplit;
use serde::{Deserialize, Serialize};

/// The reserve split currently published to the mesh.
///
/// Mirrors the source snapshot verbatim: the mode tag is not re-parsed and
/// the percentages are not re-validated, that is the writer's contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitReport {
    /// Market mode tag the writer used
    #[serde(default)]
    pub mode: Field<String>,

    /// Published percentage split
    #[serde(default)]
    pub split: Field<ReserveSplit>,

    /// Writer-side timestamp, verbatim
    #[serde(default)]
    pub ts: Field<String>,
}

impl From<SplitSnapshot> for SplitReport {
    fn from(snapshot: SplitSnapshot) -> Self {
        Self {
            mode: snapshot.mode,
            split: snapshot.split,
            ts: snapshot.ts,
        }
    }
}

/// Finds the authoritative reserve split among the reporting nodes.
pub struct SplitReader<S> {
    store: S,
}

impl<S: SnapshotStore> SplitReader<S> {
    /// Create a reader over a snapshot store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The first parseable split snapshot in node enumeration order.
    ///
    /// The protocol-wide split is assumed identical across reporting nodes,
    /// so no recency tie-break is attempted. Unreadable candidates are
    /// skipped with a warning; if no node has published one at all, fails
    /// with [`Error::NoSplitData`]. An empty-but-present snapshot is a
    /// success with every field unknown.
    pub fn current_split(&self) -> Result<SplitReport> {
        for node_id in self.store.node_ids()? {
            match self.store.load_split(&node_id) {
                Ok(Some(snapshot)) => {
                    tracing::debug!("Reserve split taken from node {}", node_id);
                    return Ok(SplitReport::from(snapshot));
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("Skipping split snapshot for node {}: {}", node_id, e);
                }
            }
        }

        Err(Error::NoSplitData)
    }
}
