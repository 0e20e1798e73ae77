//! Snapshot store abstraction and its filesystem implementation.

use crate::error::{Error, Result};
use crate::snapshot::{NodeSnapshot, SplitSnapshot, NODE_SNAPSHOT_FILE, SPLIT_SNAPSHOT_FILE};
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read access to externally written node snapshots.
///
/// Implementations are read-only collaborators: an absent snapshot is an
/// `Ok(None)`, never an error, and node enumeration is sorted ascending so
/// aggregation order is stable across calls.
pub trait SnapshotStore {
    /// Known node identifiers, sorted ascending.
    fn node_ids(&self) -> Result<Vec<String>>;

    /// Latest advisory snapshot for a node, if one exists.
    fn load_snapshot(&self, node_id: &str) -> Result<Option<NodeSnapshot>>;

    /// Latest reserve-split snapshot for a node, if one exists.
    fn load_split(&self, node_id: &str) -> Result<Option<SplitSnapshot>>;
}

/// Filesystem-backed snapshot store.
///
/// Layout: one directory per node identifier under the root, each holding
/// at most one [`NODE_SNAPSHOT_FILE`] and one [`SPLIT_SNAPSHOT_FILE`]. The
/// root itself may not exist yet; that is an empty store.
#[derive(Debug, Clone)]
pub struct FsSnapshotStore {
    root: PathBuf,
}

impl FsSnapshotStore {
    /// Create a store over the given root directory.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// The store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read and parse one snapshot file, mapping a missing file to `None`
    /// and unparseable content to [`Error::MalformedSnapshot`].
    fn read_json<T: DeserializeOwned>(&self, node_id: &str, file_name: &str) -> Result<Option<T>> {
        let path = self.root.join(node_id).join(file_name);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let parsed = serde_json::from_str(&contents).map_err(|source| Error::MalformedSnapshot {
            node: node_id.to_string(),
            source,
        })?;
        Ok(Some(parsed))
    }
}

impl SnapshotStore for FsSnapshotStore {
    fn node_ids(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry?;
            // Stray files under the root are not nodes
            if entry.file_type()?.is_dir() {
                ids.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        ids.sort();
        Ok(ids)
    }

    fn load_snapshot(&self, node_id: &str) -> Result<Option<NodeSnapshot>> {
        self.read_json(node_id, NODE_SNAPSHOT_FILE)
    }

    fn load_split(&self, node_id: &str) -> Result<Option<SplitSnapshot>> {
        self.read_json(node_id, SPLIT_SNAPSHOT_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use tempfile::tempdir;

    fn write_node_file(root: &Path, node: &str, file_name: &str, contents: &str) {
        let dir = root.join(node);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file_name), contents).unwrap();
    }

    #[test]
    fn missing_root_is_an_empty_store() {
        let dir = tempdir().unwrap();
        let store = FsSnapshotStore::new(dir.path().join("does-not-exist"));
        assert!(store.node_ids().unwrap().is_empty());
    }

    #[test]
    fn node_ids_are_sorted() {
        let dir = tempdir().unwrap();
        for node in ["C", "A", "B"] {
            fs::create_dir_all(dir.path().join(node)).unwrap();
        }

        let store = FsSnapshotStore::new(dir.path());
        assert_eq!(store.node_ids().unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn stray_files_under_root_are_ignored() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("A")).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a node").unwrap();

        let store = FsSnapshotStore::new(dir.path());
        assert_eq!(store.node_ids().unwrap(), vec!["A"]);
    }

    #[test]
    fn absent_snapshot_is_none() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("A")).unwrap();

        let store = FsSnapshotStore::new(dir.path());
        assert!(store.load_snapshot("A").unwrap().is_none());
        assert!(store.load_split("A").unwrap().is_none());
    }

    #[test]
    fn snapshot_roundtrips_through_disk() {
        let dir = tempdir().unwrap();
        write_node_file(
            dir.path(),
            "A",
            NODE_SNAPSHOT_FILE,
            r#"{"node": "A", "score": 0.81, "ts": "2024-01-01T00:00:00+00:00"}"#,
        );

        let store = FsSnapshotStore::new(dir.path());
        let snapshot = store.load_snapshot("A").unwrap().unwrap();
        assert_eq!(snapshot.node, Field::Known("A".to_string()));
        assert_eq!(snapshot.score, Field::Known(0.81));
        assert!(snapshot.weights.is_unknown());
    }

    #[test]
    fn malformed_snapshot_names_the_node() {
        let dir = tempdir().unwrap();
        write_node_file(dir.path(), "B", NODE_SNAPSHOT_FILE, "{ torn write");

        let store = FsSnapshotStore::new(dir.path());
        let err = store.load_snapshot("B").unwrap_err();
        match err {
            Error::MalformedSnapshot { node, .. } => assert_eq!(node, "B"),
            other => panic!("expected MalformedSnapshot, got {:?}", other),
        }
    }

    #[test]
    fn split_loads_independently_of_advisory_snapshot() {
        let dir = tempdir().unwrap();
        write_node_file(
            dir.path(),
            "A",
            SPLIT_SNAPSHOT_FILE,
            r#"{"mode": "bear", "split": {"innovation": 90, "governance": 10}}"#,
        );

        let store = FsSnapshotStore::new(dir.path());
        assert!(store.load_snapshot("A").unwrap().is_none());
        let split = store.load_split("A").unwrap().unwrap();
        assert_eq!(split.mode, Field::Known("bear".to_string()));
    }
}
