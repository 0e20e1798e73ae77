//! Telemetry input record for weight computation.

use serde::{Deserialize, Serialize};

/// Default market volatility when a report omits the field.
pub const DEFAULT_VOLATILITY: f64 = 0.3;

/// Default network congestion when a report omits the field.
pub const DEFAULT_CONGESTION: f64 = 0.2;

/// Default uptime variance when a report omits the field.
pub const DEFAULT_UPTIME_VARIANCE: f64 = 0.05;

/// Default treasury health when a report omits the field.
pub const DEFAULT_TREASURY_HEALTH: f64 = 0.8;

/// A point-in-time telemetry report from the mesh.
///
/// Fields are conventionally in [0, 1] but are accepted verbatim; the weight
/// computation clamps each adjustment term, not the raw inputs. Missing
/// fields deserialize to the documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    /// Market volatility (low volatility boosts the security weight)
    #[serde(default = "default_volatility")]
    pub volatility: f64,

    /// Network congestion (low congestion boosts the throughput weight)
    #[serde(default = "default_congestion")]
    pub congestion: f64,

    /// Variance in node uptime across the mesh (low variance boosts stability)
    #[serde(default = "default_uptime_variance")]
    pub uptime_variance: f64,

    /// Treasury health indicator (a weak treasury boosts the reserve weight)
    #[serde(default = "default_treasury_health")]
    pub treasury_health: f64,
}

fn default_volatility() -> f64 {
    DEFAULT_VOLATILITY
}

fn default_congestion() -> f64 {
    DEFAULT_CONGESTION
}

fn default_uptime_variance() -> f64 {
    DEFAULT_UPTIME_VARIANCE
}

fn default_treasury_health() -> f64 {
    DEFAULT_TREASURY_HEALTH
}

impl Default for Telemetry {
    fn default() -> Self {
        Self {
            volatility: DEFAULT_VOLATILITY,
            congestion: DEFAULT_CONGESTION,
            uptime_variance: DEFAULT_UPTIME_VARIANCE,
            treasury_health: DEFAULT_TREASURY_HEALTH,
        }
    }
}
