//! Normalized emission weight vector derived from telemetry.
//!
//! Five raw terms start from fixed base allocations and earn a bounded boost
//! when their telemetry signal is favorable:
//! - w0 stability: base 0.25, boosted by low uptime variance
//! - w1 security: base 0.30, boosted by low volatility
//! - w2 throughput: base 0.20, boosted by low congestion
//! - w3 reserve: base 0.15, boosted by a weak treasury
//! - w4 experimentation: fixed base 0.10, no telemetry dependence
//!
//! The raw terms are summed to a scale factor and each term is divided by
//! it, so the output sums to 1.0 by construction for any positive finite
//! scale.

use crate::error::{Error, Result};
use crate::telemetry::Telemetry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of weight components.
pub const WEIGHT_COUNT: usize = 5;

/// Base allocation per component before telemetry adjustments.
pub const BASE_WEIGHTS: [f64; WEIGHT_COUNT] = [0.25, 0.30, 0.20, 0.15, 0.10];

/// Uptime variance below this pivot boosts the stability weight.
pub const UPTIME_PIVOT: f64 = 0.5;

/// Boost gain on w0 per unit of uptime-variance headroom.
pub const UPTIME_GAIN: f64 = 0.05;

/// Boost gain on w1 per unit of volatility headroom.
pub const VOLATILITY_GAIN: f64 = 0.10;

/// Boost gain on w2 per unit of congestion headroom.
pub const CONGESTION_GAIN: f64 = 0.05;

/// Boost gain on w3 per unit of treasury shortfall.
pub const TREASURY_GAIN: f64 = 0.05;

/// A normalized weight vector.
///
/// Every component lies in [0, 1] and the components sum to 1.0 within
/// floating-point tolerance. Created fresh per computation; carries no
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightVector {
    /// Stability allocation
    pub w0: f64,
    /// Security allocation
    pub w1: f64,
    /// Throughput allocation
    pub w2: f64,
    /// Reserve allocation
    pub w3: f64,
    /// Experimentation allocation
    pub w4: f64,
}

impl WeightVector {
    /// Components in index order.
    pub fn as_array(&self) -> [f64; WEIGHT_COUNT] {
        [self.w0, self.w1, self.w2, self.w3, self.w4]
    }

    /// Sum of all components (1.0 within tolerance for any computed vector).
    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}, {:.3}, {:.3}, {:.3}]",
            self.w0, self.w1, self.w2, self.w3, self.w4
        )
    }
}

/// Compute the normalized weight vector for a telemetry report.
///
/// Adjustment terms are clamped non-negative, so out-of-range inputs can
/// zero a boost but never push a raw term below its base. Inputs that drive
/// the scale factor non-positive or non-finite fail with
/// [`Error::InvalidTelemetry`] instead of dividing.
pub fn compute_weights(telemetry: &Telemetry) -> Result<WeightVector> {
    let raw = [
        BASE_WEIGHTS[0] + UPTIME_GAIN * f64::max(0.0, UPTIME_PIVOT - telemetry.uptime_variance),
        BASE_WEIGHTS[1] + VOLATILITY_GAIN * f64::max(0.0, 1.0 - telemetry.volatility),
        BASE_WEIGHTS[2] + CONGESTION_GAIN * f64::max(0.0, 1.0 - telemetry.congestion),
        BASE_WEIGHTS[3] + TREASURY_GAIN * f64::max(0.0, 1.0 - telemetry.treasury_health),
        BASE_WEIGHTS[4],
    ];

    let scale: f64 = raw.iter().sum();
    if !scale.is_finite() || scale <= 0.0 {
        return Err(Error::InvalidTelemetry { scale });
    }

    Ok(WeightVector {
        w0: raw[0] / scale,
        w1: raw[1] / scale,
        w2: raw[2] / scale,
        w3: raw[3] / scale,
        w4: raw[4] / scale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn default_telemetry_sums_to_one() {
        let weights = compute_weights(&Telemetry::default()).unwrap();
        assert!((weights.total() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn default_telemetry_is_reproducible() {
        let telemetry = Telemetry::default();
        let first = compute_weights(&telemetry).unwrap();
        let second = compute_weights(&telemetry).unwrap();

        // Bit-for-bit identical, not just approximately equal
        assert_eq!(first.as_array().map(f64::to_bits), second.as_array().map(f64::to_bits));
    }

    #[test]
    fn all_zero_telemetry_sums_to_one() {
        let telemetry = Telemetry {
            volatility: 0.0,
            congestion: 0.0,
            uptime_variance: 0.0,
            treasury_health: 0.0,
        };
        let weights = compute_weights(&telemetry).unwrap();
        assert!((weights.total() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn all_one_telemetry_sums_to_one() {
        let telemetry = Telemetry {
            volatility: 1.0,
            congestion: 1.0,
            uptime_variance: 1.0,
            treasury_health: 1.0,
        };
        let weights = compute_weights(&telemetry).unwrap();
        assert!((weights.total() - 1.0).abs() < TOLERANCE);

        // Every boost is zeroed, so the vector is the normalized bases
        let base_scale: f64 = BASE_WEIGHTS.iter().sum();
        assert!((weights.w0 - BASE_WEIGHTS[0] / base_scale).abs() < TOLERANCE);
        assert!((weights.w4 - BASE_WEIGHTS[4] / base_scale).abs() < TOLERANCE);
    }

    #[test]
    fn favorable_telemetry_boosts_security() {
        let calm = Telemetry {
            volatility: 0.0,
            ..Telemetry::default()
        };
        let turbulent = Telemetry {
            volatility: 1.0,
            ..Telemetry::default()
        };

        let calm_weights = compute_weights(&calm).unwrap();
        let turbulent_weights = compute_weights(&turbulent).unwrap();
        assert!(calm_weights.w1 > turbulent_weights.w1);
    }

    #[test]
    fn out_of_range_inputs_still_normalize() {
        let telemetry = Telemetry {
            volatility: 3.5,
            congestion: -2.0,
            uptime_variance: 9.0,
            treasury_health: -1.0,
        };
        let weights = compute_weights(&telemetry).unwrap();
        assert!((weights.total() - 1.0).abs() < TOLERANCE);
        for w in weights.as_array() {
            assert!((0.0..=1.0).contains(&w));
        }
    }

    #[test]
    fn negative_infinity_input_is_rejected() {
        let telemetry = Telemetry {
            volatility: f64::NEG_INFINITY,
            ..Telemetry::default()
        };
        let err = compute_weights(&telemetry).unwrap_err();
        assert!(matches!(err, Error::InvalidTelemetry { .. }));
    }

    #[test]
    fn nan_input_degrades_to_base_allocation() {
        // The clamp treats an unusable adjustment as zero boost
        let telemetry = Telemetry {
            volatility: f64::NAN,
            ..Telemetry::default()
        };
        let weights = compute_weights(&telemetry).unwrap();
        assert!(weights.as_array().iter().all(|w| w.is_finite()));
        assert!((weights.total() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn serialized_field_names_match_wire_format() {
        let weights = compute_weights(&Telemetry::default()).unwrap();
        let json = serde_json::to_value(&weights).unwrap();
        for key in ["w0", "w1", "w2", "w3", "w4"] {
            assert!(json.get(key).is_some(), "missing field {}", key);
        }
    }

    proptest! {
        #[test]
        fn weights_sum_to_one_over_unit_hypercube(
            volatility in 0.0f64..=1.0,
            congestion in 0.0f64..=1.0,
            uptime_variance in 0.0f64..=1.0,
            treasury_health in 0.0f64..=1.0,
        ) {
            let telemetry = Telemetry {
                volatility,
                congestion,
                uptime_variance,
                treasury_health,
            };
            let weights = compute_weights(&telemetry).unwrap();

            prop_assert!((weights.total() - 1.0).abs() < TOLERANCE);
            for w in weights.as_array() {
                prop_assert!(w >= 0.0);
                prop_assert!(w <= 1.0);
            }
        }
    }
}
