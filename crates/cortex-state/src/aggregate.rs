//! Score aggregation across independently written node snapshots.

use crate::error::Result;
use crate::field::Field;
use crate::snapshot::NodeSnapshot;
use crate::store::SnapshotStore;
use cortex_engine::{Telemetry, WeightVector};
use serde::{Deserialize, Serialize};

/// One node's row in the aggregated view.
///
/// The identifier is always present (the store directory name backs it up
/// when the writer omitted the field); everything else stays an explicit
/// [`Field`] so presentation can render unknowns as placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSummary {
    /// Node identifier, from the snapshot or the directory name
    pub node: String,

    /// Composite proof-layer score
    #[serde(default)]
    pub score: Field<f64>,

    /// Latest weight vector the node reported
    #[serde(default)]
    pub weights: Field<WeightVector>,

    /// Telemetry behind the reported weights
    #[serde(default)]
    pub telemetry: Field<Telemetry>,

    /// Writer-side timestamp, verbatim
    #[serde(default)]
    pub ts: Field<String>,
}

impl NodeSummary {
    fn from_snapshot(dir_name: &str, snapshot: NodeSnapshot) -> Self {
        let NodeSnapshot {
            node,
            score,
            weights,
            telemetry,
            ts,
        } = snapshot;

        Self {
            node: node.known().unwrap_or_else(|| dir_name.to_string()),
            score,
            weights,
            telemetry,
            ts,
        }
    }
}

/// Merges per-node snapshots into one ordered read view.
pub struct ScoreAggregator<S> {
    store: S,
}

impl<S: SnapshotStore> ScoreAggregator<S> {
    /// Create an aggregator over a snapshot store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// One summary per node that has published a readable snapshot, in
    /// node-identifier order.
    ///
    /// Nodes without a snapshot are silently omitted; partial visibility is
    /// normal while nodes update independently. Nodes whose snapshot cannot
    /// be read this cycle are skipped with a warning, never aborting the
    /// whole listing. An empty store yields an empty list.
    pub fn list_nodes(&self) -> Result<Vec<NodeSummary>> {
        let mut summaries = Vec::new();

        for node_id in self.store.node_ids()? {
            match self.store.load_snapshot(&node_id) {
                Ok(Some(snapshot)) => {
                    summaries.push(NodeSummary::from_snapshot(&node_id, snapshot));
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("Skipping snapshot for node {}: {}", node_id, e);
                }
            }
        }

        Ok(summaries)
    }

    /// Weight vector of the first node in the view, the dashboard
    /// convention for "current weights".
    pub fn current_weights(&self) -> Result<Field<WeightVector>> {
        let summaries = self.list_nodes()?;
        Ok(summaries
            .into_iter()
            .next()
            .map(|summary| summary.weights)
            .unwrap_or(Field::Unknown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::NODE_SNAPSHOT_FILE;
    use crate::store::FsSnapshotStore;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_node_file(root: &Path, node: &str, contents: &str) {
        let dir = root.join(node);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(NODE_SNAPSHOT_FILE), contents).unwrap();
    }

    fn aggregator_for(root: &Path) -> ScoreAggregator<FsSnapshotStore> {
        ScoreAggregator::new(FsSnapshotStore::new(root))
    }

    #[test]
    fn empty_store_yields_empty_list() {
        let dir = tempdir().unwrap();
        let summaries = aggregator_for(dir.path()).list_nodes().unwrap();
        assert!(summaries.is_empty());
    }

    #[test]
    fn nodes_without_snapshots_are_omitted() {
        let dir = tempdir().unwrap();
        write_node_file(
            dir.path(),
            "A",
            r#"{"node": "A", "score": 0.79, "weights": {"w0": 0.26, "w1": 0.33, "w2": 0.2, "w3": 0.12, "w4": 0.09}, "telemetry": {}, "ts": "2024-01-01T00:00:00+00:00"}"#,
        );
        fs::create_dir_all(dir.path().join("B")).unwrap();

        let summaries = aggregator_for(dir.path()).list_nodes().unwrap();
        assert_eq!(summaries.len(), 1);

        let summary = &summaries[0];
        assert_eq!(summary.node, "A");
        assert!(summary.score.is_known());
        assert!(summary.weights.is_known());
        assert!(summary.telemetry.is_known());
        assert!(summary.ts.is_known());
    }

    #[test]
    fn summaries_follow_node_identifier_order() {
        let dir = tempdir().unwrap();
        for node in ["C", "A", "B"] {
            write_node_file(dir.path(), node, &format!(r#"{{"node": "{}"}}"#, node));
        }

        let summaries = aggregator_for(dir.path()).list_nodes().unwrap();
        let order: Vec<_> = summaries.iter().map(|s| s.node.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);
    }

    #[test]
    fn directory_name_backs_up_missing_identifier() {
        let dir = tempdir().unwrap();
        write_node_file(dir.path(), "A", r#"{"score": 0.5}"#);

        let summaries = aggregator_for(dir.path()).list_nodes().unwrap();
        assert_eq!(summaries[0].node, "A");
    }

    #[test]
    fn absent_fields_stay_unknown_not_zero() {
        let dir = tempdir().unwrap();
        write_node_file(dir.path(), "A", r#"{"node": "A"}"#);

        let summaries = aggregator_for(dir.path()).list_nodes().unwrap();
        let summary = &summaries[0];
        assert!(summary.score.is_unknown());
        assert!(summary.weights.is_unknown());
        assert!(summary.telemetry.is_unknown());
        assert!(summary.ts.is_unknown());
    }

    #[test]
    fn malformed_node_is_skipped_others_survive() {
        let dir = tempdir().unwrap();
        write_node_file(dir.path(), "A", r#"{"node": "A", "score": 0.7}"#);
        write_node_file(dir.path(), "B", "{ torn write");
        write_node_file(dir.path(), "C", r#"{"node": "C", "score": 0.6}"#);

        let summaries = aggregator_for(dir.path()).list_nodes().unwrap();
        let order: Vec<_> = summaries.iter().map(|s| s.node.as_str()).collect();
        assert_eq!(order, vec!["A", "C"]);
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let dir = tempdir().unwrap();
        write_node_file(dir.path(), "A", r#"{"node": "A", "score": 0.7}"#);

        let aggregator = aggregator_for(dir.path());
        assert_eq!(
            aggregator.list_nodes().unwrap(),
            aggregator.list_nodes().unwrap()
        );
    }

    #[test]
    fn current_weights_come_from_first_node() {
        let dir = tempdir().unwrap();
        write_node_file(
            dir.path(),
            "A",
            r#"{"node": "A", "weights": {"w0": 0.3, "w1": 0.3, "w2": 0.2, "w3": 0.1, "w4": 0.1}}"#,
        );
        write_node_file(
            dir.path(),
            "B",
            r#"{"node": "B", "weights": {"w0": 0.2, "w1": 0.2, "w2": 0.2, "w3": 0.2, "w4": 0.2}}"#,
        );

        let weights = aggregator_for(dir.path()).current_weights().unwrap();
        assert_eq!(weights.known().unwrap().w0, 0.3);
    }

    #[test]
    fn current_weights_unknown_on_empty_store() {
        let dir = tempdir().unwrap();
        let weights = aggregator_for(dir.path()).current_weights().unwrap();
        assert!(weights.is_unknown());
    }
}
