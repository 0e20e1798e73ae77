//! Pluggable sources of per-tick input signals.
//!
//! A node daemon does not care where telemetry and layer scores come from.
//! The [`SignalSource`] seam keeps the randomized mesh mock swappable for a
//! fixed reference feed (tests, reproducible runs) or a real collector.

use crate::mesh::{MeshConfig, MeshSim};
use cortex_engine::{LayerScores, Telemetry};

/// Reference telemetry for fixed-signal runs.
pub const REFERENCE_TELEMETRY: Telemetry = Telemetry {
    volatility: 0.23,
    congestion: 0.18,
    uptime_variance: 0.03,
    treasury_health: 0.88,
};

/// Reference per-layer assessment scores.
pub const REFERENCE_LAYERS: LayerScores = LayerScores {
    continuity: 0.9,
    cognition: 0.8,
    synergy: 0.7,
    adaptation: 0.6,
    integrity: 0.85,
};

/// One sampled set of tick inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    /// Telemetry feeding the weight computation
    pub telemetry: Telemetry,
    /// Layer scores feeding the composite
    pub layers: LayerScores,
}

/// Source of per-tick input signals for a node daemon.
pub trait SignalSource {
    /// Draw the signals for one tick. Both values come from the same
    /// generator state.
    fn sample(&mut self) -> Signals;

    /// Optional human-readable status line for logs.
    fn status_line(&mut self) -> Option<&'static str> {
        None
    }
}

impl<S: SignalSource + ?Sized> SignalSource for Box<S> {
    fn sample(&mut self) -> Signals {
        (**self).sample()
    }

    fn status_line(&mut self) -> Option<&'static str> {
        (**self).status_line()
    }
}

/// Signals derived from the randomized mock mesh.
///
/// Each sample advances the mesh one tick and maps its aggregates onto the
/// unit interval: entropy drives volatility, link density drives
/// congestion, the energy spread drives uptime variance, and stability
/// stands in for treasury health. The mapping is a heuristic for
/// development runs, not a calibrated model.
pub struct MeshSignalSource {
    sim: MeshSim,
}

impl MeshSignalSource {
    /// Create a source over a fresh mesh simulation.
    pub fn new(config: MeshConfig) -> Self {
        Self {
            sim: MeshSim::new(config),
        }
    }

    /// The underlying simulation.
    pub fn sim(&self) -> &MeshSim {
        &self.sim
    }
}

impl SignalSource for MeshSignalSource {
    fn sample(&mut self) -> Signals {
        self.sim.advance();

        let telemetry = Telemetry {
            volatility: unit(self.sim.entropy()),
            congestion: unit(self.sim.connectivity()),
            uptime_variance: unit(self.sim.energy_spread()),
            treasury_health: unit(self.sim.stability()),
        };

        let layers = LayerScores {
            continuity: unit(self.sim.flux()),
            cognition: unit(self.sim.stability()),
            synergy: unit(self.sim.connectivity()),
            adaptation: unit(1.0 - self.sim.energy_spread()),
            integrity: unit((self.sim.flux() + self.sim.stability()) / 2.0),
        };

        Signals { telemetry, layers }
    }

    fn status_line(&mut self) -> Option<&'static str> {
        Some(self.sim.status_line())
    }
}

/// Constant signals for tests and reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedSignalSource {
    signals: Signals,
}

impl FixedSignalSource {
    /// Create a source that always returns the given signals.
    pub fn new(telemetry: Telemetry, layers: LayerScores) -> Self {
        Self {
            signals: Signals { telemetry, layers },
        }
    }
}

impl Default for FixedSignalSource {
    fn default() -> Self {
        Self::new(REFERENCE_TELEMETRY, REFERENCE_LAYERS)
    }
}

impl SignalSource for FixedSignalSource {
    fn sample(&mut self) -> Signals {
        self.signals
    }
}

fn unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
