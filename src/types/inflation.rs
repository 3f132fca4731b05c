//! Inflation curve types
//! Shapes match the JSON records staking dashboards exchange (camelCase keys)

use crate::core::constants::{
    DEFAULT_AUCTION_ADJUST, DEFAULT_AUCTION_MAX, DEFAULT_FALLOFF, DEFAULT_MAX_INFLATION,
    DEFAULT_MIN_INFLATION, DEFAULT_STAKE_TARGET,
};
use serde::{Deserialize, Serialize};

/// Coefficients describing the shape of one network's NPoS inflation curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationParams {
    /// Adjustment applied per parachain-slot auction locking supply
    pub auction_adjust: f64,
    /// Cap on the number of auctions counted by `auction_adjust`
    pub auction_max: f64,
    /// Decay steepness once actual stake exceeds `stake_target`
    pub falloff: f64,
    /// Annual inflation ceiling
    pub max_inflation: f64,
    /// Annual inflation floor, never above `max_inflation`
    pub min_inflation: f64,
    /// Fraction of total issuance the network wants staked, in (0, 1)
    pub stake_target: f64,
}

impl InflationParams {
    /// Baseline record used for every network without an override
    pub const fn baseline() -> Self {
        Self {
            auction_adjust: DEFAULT_AUCTION_ADJUST,
            auction_max: DEFAULT_AUCTION_MAX,
            falloff: DEFAULT_FALLOFF,
            max_inflation: DEFAULT_MAX_INFLATION,
            min_inflation: DEFAULT_MIN_INFLATION,
            stake_target: DEFAULT_STAKE_TARGET,
        }
    }

    /// Whether the auction terms have any effect
    pub fn uses_auctions(&self) -> bool {
        self.auction_adjust != 0.0 || self.auction_max != 0.0
    }
}

impl Default for InflationParams {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Per-network deviation from the baseline record.
///
/// Only the coefficients a known network actually varies are representable;
/// a new varying coefficient gets its own field here and its own line in
/// [`ParamsOverride::apply`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamsOverride {
    pub stake_target: f64,
}

impl ParamsOverride {
    pub const fn stake_target(stake_target: f64) -> Self {
        Self { stake_target }
    }

    /// Copy every field of `base`, then overwrite the overridden ones
    pub const fn apply(&self, base: InflationParams) -> InflationParams {
        InflationParams {
            stake_target: self.stake_target,
            ..base
        }
    }
}

/// Output of an inflation curve evaluation for an observed staked fraction.
///
/// Produced by downstream calculators; this crate only defines the record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inflation {
    pub ideal_stake: f64,
    pub ideal_interest: f64,
    pub inflation: f64,
    pub staked_fraction: f64,
    pub staked_return: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_values() {
        let params = InflationParams::default();
        assert_eq!(params.auction_adjust, 0.0);
        assert_eq!(params.auction_max, 0.0);
        assert_eq!(params.falloff, 0.05);
        assert_eq!(params.max_inflation, 0.1);
        assert_eq!(params.min_inflation, 0.025);
        assert_eq!(params.stake_target, 0.5);
        assert!(params.min_inflation <= params.max_inflation);
        assert!(!params.uses_auctions());
    }

    #[test]
    fn test_override_keeps_other_fields() {
        let merged = ParamsOverride::stake_target(0.75).apply(InflationParams::baseline());
        assert_eq!(merged.stake_target, 0.75);
        assert_eq!(
            InflationParams {
                stake_target: 0.5,
                ..merged
            },
            InflationParams::baseline()
        );
    }

    #[test]
    fn test_params_json_keys() {
        let json = serde_json::to_value(InflationParams::baseline()).unwrap();
        assert_eq!(json["stakeTarget"], 0.5);
        assert_eq!(json["minInflation"], 0.025);
        assert_eq!(json["auctionAdjust"], 0.0);
        assert!(json.get("stake_target").is_none());
    }

    #[test]
    fn test_inflation_json_roundtrip() {
        let inflation = Inflation {
            ideal_stake: 0.75,
            ideal_interest: 0.133,
            inflation: 0.1,
            staked_fraction: 0.5,
            staked_return: 0.2,
        };
        let json = serde_json::to_string(&inflation).unwrap();
        assert!(json.contains("\"stakedReturn\":0.2"));
        let back: Inflation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inflation);
    }
}
