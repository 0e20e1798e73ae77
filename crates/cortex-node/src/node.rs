//! The node daemon loop: sample signals, compute, publish.

use crate::config::{NodeConfig, SourceKind};
use crate::error::Result;
use chrono::Utc;
use cortex_engine::{composite, compute_weights, split_for, WeightVector};
use cortex_sim::{
    FixedSignalSource, MeshConfig, MeshSignalSource, SignalSource, SnapshotPublisher,
};
use cortex_state::{NodeSnapshot, SplitSnapshot};
use std::time::Duration;

/// What one tick computed and published.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// Composite proof-layer score published this tick
    pub score: f64,
    /// Weight vector published this tick
    pub weights: WeightVector,
    /// Timestamp stamped into both snapshots
    pub ts: String,
}

/// Drives one simulated node.
///
/// Per tick: sample the signal source, derive the weight vector and the
/// composite score, stamp the time, and publish both snapshot files for
/// the read model.
pub struct NodeRunner<S> {
    config: NodeConfig,
    source: S,
    publisher: SnapshotPublisher,
}

impl NodeRunner<Box<dyn SignalSource>> {
    /// Build a runner with the signal source the config selects.
    pub fn from_config(config: NodeConfig) -> Self {
        let source: Box<dyn SignalSource> = match config.source {
            SourceKind::Mesh => Box::new(MeshSignalSource::new(MeshConfig {
                seed: config.seed,
                ..MeshConfig::default()
            })),
            SourceKind::Fixed => Box::new(FixedSignalSource::default()),
        };
        Self::new(config, source)
    }
}

impl<S: SignalSource> NodeRunner<S> {
    /// Create a runner over an explicit signal source.
    pub fn new(config: NodeConfig, source: S) -> Self {
        let publisher = SnapshotPublisher::new(config.state_root.clone());
        Self {
            config,
            source,
            publisher,
        }
    }

    /// The runner's configuration.
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Run one tick and publish both snapshots.
    pub fn tick(&mut self) -> Result<TickReport> {
        let signals = self.source.sample();
        let weights = compute_weights(&signals.telemetry)?;
        let score = composite(&signals.layers, &weights);
        let ts = Utc::now().to_rfc3339();

        let snapshot = NodeSnapshot::new(
            self.config.node_id.clone(),
            score,
            weights,
            signals.telemetry,
            ts.clone(),
        );
        self.publisher
            .publish_snapshot(&self.config.node_id, &snapshot)?;

        let split = SplitSnapshot::new(self.config.mode, split_for(self.config.mode), ts.clone());
        self.publisher.publish_split(&self.config.node_id, &split)?;

        Ok(TickReport { score, weights, ts })
    }

    /// Run the configured number of ticks on the configured period.
    ///
    /// A failed tick is logged and skipped; the daemon degrades instead of
    /// crashing.
    pub async fn run(mut self) -> Result<()> {
        tracing::info!("Node {} starting", self.config.node_id);
        tracing::info!("  State: {:?}", self.config.state_root);
        tracing::info!("  Mode: {}", self.config.mode);
        tracing::info!(
            "  Ticks: {} every {}ms",
            self.config.ticks,
            self.config.period_ms
        );

        let mut interval = tokio::time::interval(Duration::from_millis(self.config.period_ms));
        for t in 1..=self.config.ticks {
            interval.tick().await;

            match self.tick() {
                Ok(report) => {
                    tracing::info!(
                        "[{}] tick {:03} score={:.4} weights={}",
                        self.config.node_id,
                        t,
                        report.score,
                        report.weights
                    );
                }
                Err(e) => {
                    tracing::warn!("[{}] tick {:03} failed: {}", self.config.node_id, t, e);
                }
            }

            if let Some(line) = self.source.status_line() {
                tracing::debug!("{}", line);
            }
        }

        tracing::info!(
            "Node {} exiting after {} ticks",
            self.config.node_id,
            self.config.ticks
        );
        Ok(())
    }
}
