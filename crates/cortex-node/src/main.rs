//! Cortex node daemon binary.
//!
//! Simulates one mesh node: samples signals, derives weights and scores,
//! and publishes snapshots for the read model.

use cortex_node::{NodeConfig, NodeRunner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cortex_node=info,cortex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Cortex node");

    let config = NodeConfig::from_env();
    let runner = NodeRunner::from_config(config);
    runner.run().await?;

    Ok(())
}
