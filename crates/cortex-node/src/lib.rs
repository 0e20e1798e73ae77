//! Cortex Node - simulated mesh node daemon.
//!
//! Each daemon owns one node identity: on a fixed period it samples a
//! signal source, derives the weight vector and composite score, and
//! publishes snapshot files into the shared state tree that the read model
//! and the `cortex-scan` CLI consume.
//!
//! # Example
//!
//! ```no_run
//! use cortex_node::{NodeConfig, NodeRunner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = NodeConfig::default();
//!     NodeRunner::from_config(config).run().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod node;

pub use config::{NodeConfig, SourceKind};
pub use error::{Error, Result};
pub use node::{NodeRunner, TickReport};
