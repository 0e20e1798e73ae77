//! Market-mode reserve split table.
//!
//! A coarse market-regime tag selects a fixed percentage split of reserve
//! emissions between the innovation and governance pools. Unknown tags fall
//! back to neutral so the split lookup is total and always available.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse market regime driving the reserve split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketMode {
    /// Defensive regime, reserves lean heavily toward innovation
    Bear,
    /// Baseline regime
    #[default]
    Neutral,
    /// Expansive regime, governance takes a larger share
    Bull,
}

impl MarketMode {
    /// Parse a mode tag, falling back to [`MarketMode::Neutral`] for
    /// anything unrecognized (empty strings, case variants, garbage).
    ///
    /// Total over all inputs, matching the always-available contract of
    /// the split table.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "bear" => MarketMode::Bear,
            "neutral" => MarketMode::Neutral,
            "bull" => MarketMode::Bull,
            _ => MarketMode::Neutral,
        }
    }

    /// The canonical lowercase tag for this mode.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MarketMode::Bear => "bear",
            MarketMode::Neutral => "neutral",
            MarketMode::Bull => "bull",
        }
    }
}

impl fmt::Display for MarketMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed percentage split of reserve emissions.
///
/// Every defined mode's split sums to 100; records read back from external
/// snapshots are passed through without re-validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveSplit {
    /// Share routed to the innovation pool, in percent
    pub innovation: u32,
    /// Share routed to the governance pool, in percent
    pub governance: u32,
}

impl ReserveSplit {
    /// Sum of both shares (100 for every defined mode).
    pub const fn total(&self) -> u32 {
        self.innovation + self.governance
    }
}

impl fmt::Display for ReserveSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.innovation, self.governance)
    }
}

/// Look up the fixed reserve split for a market mode.
pub const fn split_for(mode: MarketMode) -> ReserveSplit {
    match mode {
        MarketMode::Bear => ReserveSplit {
            innovation: 90,
            governance: 10,
        },
        MarketMode::Neutral => ReserveSplit {
            innovation: 80,
            governance: 20,
        },
        MarketMode::Bull => ReserveSplit {
            innovation: 70,
            governance: 30,
        },
    }
}

/// Look up the reserve split for a raw mode tag.
///
/// Composes the total fallback parse with the table, so this never fails.
pub fn split_for_tag(tag: &str) -> ReserveSplit {
    split_for(MarketMode::parse(tag))
}
