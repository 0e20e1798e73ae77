//! Snapshot publishing into the shared state directory.

use crate::error::Result;
use cortex_state::{NodeSnapshot, SplitSnapshot, NODE_SNAPSHOT_FILE, SPLIT_SNAPSHOT_FILE};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the per-node snapshot files the read model consumes.
///
/// Writes are plain file replacements, pretty-printed for inspection by
/// hand. Durability and write atomicity are out of scope; readers already
/// treat a torn file as absent for the cycle.
#[derive(Debug, Clone)]
pub struct SnapshotPublisher {
    root: PathBuf,
}

impl SnapshotPublisher {
    /// Create a publisher writing under the given state root.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// The state root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Publish a node's latest advisory snapshot.
    pub fn publish_snapshot(&self, node_id: &str, snapshot: &NodeSnapshot) -> Result<()> {
        self.write_json(node_id, NODE_SNAPSHOT_FILE, snapshot)
    }

    /// Publish a node's latest reserve-split snapshot.
    pub fn publish_split(&self, node_id: &str, snapshot: &SplitSnapshot) -> Result<()> {
        self.write_json(node_id, SPLIT_SNAPSHOT_FILE, snapshot)
    }

    fn write_json<T: Serialize>(&self, node_id: &str, file_name: &str, value: &T) -> Result<()> {
        let dir = self.root.join(node_id);
        fs::create_dir_all(&dir)?;

        let contents = serde_json::to_string_pretty(value)?;
        fs::write(dir.join(file_name), contents)?;
        Ok(())
    }
}
