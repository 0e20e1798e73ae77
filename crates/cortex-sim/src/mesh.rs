//! Randomized mock mesh simulation.
//!
//! Generates synthetic peer activity for development runs: per-peer energy
//! and link counts plus derived mesh aggregates. Deterministic for a fixed
//! seed, and explicitly not a validated subsystem. Real deployments replace
//! it through the signal-source seam.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Default number of synthetic peers.
pub const DEFAULT_NODE_COUNT: usize = 11;

/// Peer energy is drawn from `[ENERGY_MIN, ENERGY_MAX)`.
pub const ENERGY_MIN: f64 = 0.5;
pub const ENERGY_MAX: f64 = 1.0;

/// Peer link counts are drawn from `[MIN_LINKS, MAX_LINKS]`.
pub const MIN_LINKS: u32 = 2;
pub const MAX_LINKS: u32 = 6;

/// Mesh stability is drawn from `[STABILITY_MIN, STABILITY_MAX)`.
pub const STABILITY_MIN: f64 = 0.6;
pub const STABILITY_MAX: f64 = 1.0;

/// Power is flux scaled by this factor.
pub const POWER_FACTOR: f64 = 6.0;

/// Rotating status lines for daemon logs.
const STATUS_MESSAGES: [&str; 5] = [
    "Synchronizing mesh resonance",
    "Flux steady, watching entropy",
    "Advisory link engaged",
    "Resonance approaching peak flux",
    "Mesh aligned with cognitive layer",
];

/// Configuration for the mock mesh.
#[derive(Debug, Clone)]
pub struct MeshConfig {
    /// Seed for deterministic simulation
    pub seed: u64,
    /// Number of synthetic peers
    pub node_count: usize,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            node_count: DEFAULT_NODE_COUNT,
        }
    }
}

/// One synthetic peer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshNode {
    /// Peer identifier (`N1`, `N2`, ...)
    pub id: String,
    /// Activity level in `[ENERGY_MIN, ENERGY_MAX)`
    pub energy: f64,
    /// Active link count in `[MIN_LINKS, MAX_LINKS]`
    pub links: u32,
}

/// Derived mesh aggregates for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshStats {
    /// Mean peer energy
    pub flux: f64,
    /// Mesh-wide stability draw
    pub stability: f64,
    /// `1 - stability`
    pub entropy: f64,
    /// `flux * POWER_FACTOR`
    pub power: f64,
}

/// Simulates mesh activity, redrawing peer state each tick.
pub struct MeshSim {
    rng: StdRng,
    nodes: Vec<MeshNode>,
    stability: f64,
    tick: u64,
}

impl MeshSim {
    /// Create a simulation and draw its initial state.
    pub fn new(config: MeshConfig) -> Self {
        let mut sim = Self {
            rng: StdRng::seed_from_u64(config.seed),
            nodes: Vec::with_capacity(config.node_count),
            stability: STABILITY_MIN,
            tick: 0,
        };

        for i in 1..=config.node_count {
            sim.nodes.push(MeshNode {
                id: format!("N{}", i),
                energy: ENERGY_MIN,
                links: MIN_LINKS,
            });
        }
        sim.redraw();
        sim
    }

    fn redraw(&mut self) {
        for node in &mut self.nodes {
            node.energy = self.rng.gen_range(ENERGY_MIN..ENERGY_MAX);
            node.links = self.rng.gen_range(MIN_LINKS..=MAX_LINKS);
        }
        self.stability = self.rng.gen_range(STABILITY_MIN..STABILITY_MAX);
    }

    /// Advance one tick, redrawing every peer and the stability draw.
    pub fn advance(&mut self) {
        self.redraw();
        self.tick += 1;
    }

    /// Current peer states.
    pub fn nodes(&self) -> &[MeshNode] {
        &self.nodes
    }

    /// Ticks advanced so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Mean peer energy.
    pub fn flux(&self) -> f64 {
        let total: f64 = self.nodes.iter().map(|n| n.energy).sum();
        total / self.nodes.len() as f64
    }

    /// Mesh-wide stability for this tick.
    pub fn stability(&self) -> f64 {
        self.stability
    }

    /// Disorder measure, the complement of stability.
    pub fn entropy(&self) -> f64 {
        1.0 - self.stability
    }

    /// Emitted power, flux scaled by [`POWER_FACTOR`].
    pub fn power(&self) -> f64 {
        self.flux() * POWER_FACTOR
    }

    /// Mean link count normalized to [0, 1].
    pub fn connectivity(&self) -> f64 {
        let total: u32 = self.nodes.iter().map(|n| n.links).sum();
        let mean = total as f64 / self.nodes.len() as f64;
        (mean - MIN_LINKS as f64) / (MAX_LINKS - MIN_LINKS) as f64
    }

    /// Spread between the most and least energetic peers.
    pub fn energy_spread(&self) -> f64 {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for node in &self.nodes {
            min = min.min(node.energy);
            max = max.max(node.energy);
        }
        max - min
    }

    /// Current aggregates as one record.
    pub fn stats(&self) -> MeshStats {
        MeshStats {
            flux: self.flux(),
            stability: self.stability(),
            entropy: self.entropy(),
            power: self.power(),
        }
    }

    /// A rotating human-readable status line for logs.
    pub fn status_line(&mut self) -> &'static str {
        STATUS_MESSAGES[self.rng.gen_range(0..STATUS_MESSAGES.len())]
    }
}
