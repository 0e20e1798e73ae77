//! Snapshot records written by external node processes.
//!
//! On disk, each node owns one directory under the store root, holding at
//! most one advisory snapshot and one reserve-split snapshot. Every field is
//! optional: writers may be older, partial, or mid-rewrite, and the read
//! model tolerates all of it.

use crate::field::Field;
use cortex_engine::{MarketMode, ReserveSplit, Telemetry, WeightVector};
use serde::{Deserialize, Serialize};

/// File name of a node's latest advisory snapshot.
pub const NODE_SNAPSHOT_FILE: &str = "aifa_latest.json";

/// File name of a node's latest reserve-split snapshot.
pub const SPLIT_SNAPSHOT_FILE: &str = "ctp_latest.json";

/// A node's latest advisory snapshot.
///
/// An empty JSON object parses to an all-unknown snapshot; unrecognized
/// fields from legacy writers are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// Node identifier as reported by the writer
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub node: Field<String>,

    /// Composite proof-layer score
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub score: Field<f64>,

    /// Weight vector the node computed this tick
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub weights: Field<WeightVector>,

    /// Telemetry the weights were derived from
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub telemetry: Field<Telemetry>,

    /// Writer-side RFC 3339 timestamp, passed through verbatim
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub ts: Field<String>,
}

impl NodeSnapshot {
    /// Create a fully populated snapshot, as the node daemon writes it.
    pub fn new(
        node: impl Into<String>,
        score: f64,
        weights: WeightVector,
        telemetry: Telemetry,
        ts: impl Into<String>,
    ) -> Self {
        Self {
            node: Field::Known(node.into()),
            score: Field::Known(score),
            weights: Field::Known(weights),
            telemetry: Field::Known(telemetry),
            ts: Field::Known(ts.into()),
        }
    }
}

/// A node's latest reserve-split snapshot.
///
/// The mode is kept as the raw tag string; the read model never re-parses
/// or re-validates what the writer published.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SplitSnapshot {
    /// Market mode tag the writer used
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub mode: Field<String>,

    /// Published percentage split, verbatim
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub split: Field<ReserveSplit>,

    /// Writer-side RFC 3339 timestamp, passed through verbatim
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub ts: Field<String>,
}

impl SplitSnapshot {
    /// Create a fully populated split snapshot for a mode.
    pub fn new(mode: MarketMode, split: ReserveSplit, ts: impl Into<String>) -> Self {
        Self {
            mode: Field::Known(mode.as_str().to_string()),
            split: Field::Known(split),
            ts: Field::Known(ts.into()),
        }
    }
}
