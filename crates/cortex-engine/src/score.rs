//! Proof-layer composite scoring.
//!
//! Each node carries five assessment-layer scores (continuity, cognition,
//! synergy, adaptation, integrity). The composite published in node
//! snapshots is the dot product of those scores with the current weight
//! vector, layer i weighted by component wi.

use crate::weights::{WeightVector, WEIGHT_COUNT};
use serde::{Deserialize, Serialize};

/// Number of assessment layers.
pub const LAYER_COUNT: usize = 5;

// Layers and weight components pair off one-to-one.
const _: () = assert!(LAYER_COUNT == WEIGHT_COUNT);

/// Per-layer assessment scores, each conventionally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerScores {
    /// Continuity layer
    pub continuity: f64,
    /// Cognition layer
    pub cognition: f64,
    /// Synergy layer
    pub synergy: f64,
    /// Adaptation layer
    pub adaptation: f64,
    /// Integrity layer
    pub integrity: f64,
}

impl LayerScores {
    /// Scores in layer order.
    pub fn as_array(&self) -> [f64; LAYER_COUNT] {
        [
            self.continuity,
            self.cognition,
            self.synergy,
            self.adaptation,
            self.integrity,
        ]
    }
}

/// Weighted composite score of the five layers.
pub fn composite(scores: &LayerScores, weights: &WeightVector) -> f64 {
    scores.continuity * weights.w0
        + scores.cognition * weights.w1
        + scores.synergy * weights.w2
        + scores.adaptation * weights.w3
        + scores.integrity * weights.w4
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::Telemetry;
    use crate::weights::compute_weights;

    fn reference_scores() -> LayerScores {
        LayerScores {
            continuity: 0.9,
            cognition: 0.8,
            synergy: 0.7,
            adaptation: 0.6,
            integrity: 0.85,
        }
    }

    #[test]
    fn composite_in_range_for_unit_scores() {
        let weights = compute_weights(&Telemetry::default()).unwrap();
        let value = composite(&reference_scores(), &weights);

        assert!(value.is_finite());
        assert!((0.0..=1.1).contains(&value));
    }

    #[test]
    fn composite_of_perfect_scores_is_one() {
        let perfect = LayerScores {
            continuity: 1.0,
            cognition: 1.0,
            synergy: 1.0,
            adaptation: 1.0,
            integrity: 1.0,
        };
        let weights = compute_weights(&Telemetry::default()).unwrap();

        // Weights sum to 1, so uniform scores pass through unchanged
        assert!((composite(&perfect, &weights) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn composite_of_zero_scores_is_zero() {
        let zero = LayerScores {
            continuity: 0.0,
            cognition: 0.0,
            synergy: 0.0,
            adaptation: 0.0,
            integrity: 0.0,
        };
        let weights = compute_weights(&Telemetry::default()).unwrap();
        assert_eq!(composite(&zero, &weights), 0.0);
    }

    #[test]
    fn higher_weight_emphasizes_its_layer() {
        // Security-heavy weights reward the cognition layer
        let calm = compute_weights(&Telemetry {
            volatility: 0.0,
            ..Telemetry::default()
        })
        .unwrap();
        let turbulent = compute_weights(&Telemetry {
            volatility: 1.0,
            ..Telemetry::default()
        })
        .unwrap();

        let cognition_only = LayerScores {
            continuity: 0.0,
            cognition: 1.0,
            synergy: 0.0,
            adaptation: 0.0,
            integrity: 0.0,
        };
        assert!(composite(&cognition_only, &calm) > composite(&cognition_only, &turbulent));
    }
}
