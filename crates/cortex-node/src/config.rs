//! Node daemon configuration.

use cortex_engine::MarketMode;
use std::path::PathBuf;

/// Which signal source feeds the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Seeded random mesh simulation
    #[default]
    Mesh,
    /// Fixed reference signals
    Fixed,
}

impl SourceKind {
    /// Parse a source tag, falling back to the mesh simulation.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "fixed" => SourceKind::Fixed,
            _ => SourceKind::Mesh,
        }
    }
}

/// Configuration for a node daemon.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Node identifier, also the state directory name
    pub node_id: String,

    /// Root of the shared snapshot tree
    pub state_root: PathBuf,

    /// Market mode published with every split snapshot
    pub mode: MarketMode,

    /// Number of ticks before the daemon exits
    pub ticks: u32,

    /// Milliseconds between ticks
    pub period_ms: u64,

    /// Seed for the mesh simulation
    pub seed: u64,

    /// Which signal source feeds the daemon
    pub source: SourceKind,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl NodeConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let node_id = std::env::var("CORTEX_NODE_ID").unwrap_or_else(|_| "A".to_string());

        let state_root = PathBuf::from(
            std::env::var("CORTEX_STATE_ROOT").unwrap_or_else(|_| "state/nodes".to_string()),
        );

        // Total fallback: an unknown mode tag is a neutral run, not a crash
        let mode = MarketMode::parse(&std::env::var("CORTEX_MODE").unwrap_or_default());
        let source = SourceKind::parse(&std::env::var("CORTEX_SOURCE").unwrap_or_default());

        let ticks = env_parse("CORTEX_TICKS", 80);
        let period_ms = env_parse("CORTEX_PERIOD_MS", 3000);
        let seed = env_parse("CORTEX_SEED", 42);

        Self {
            node_id,
            state_root,
            mode,
            ticks,
            period_ms,
            seed,
            source,
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
