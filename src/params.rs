//! Inflation parameter resolution
//!
//! Maps a network's genesis hash to the coefficients of its inflation curve.
//! Networks absent from the known-network table run the baseline curve, so
//! resolution never fails.
//!
//! # Identity encoding
//!
//! Table keys are canonical genesis strings: `0x` followed by 64 lowercase hex
//! digits (see [`GenesisHash::to_hex`]). [`resolve`] matches the raw string
//! exactly; an uppercase or unprefixed rendering of a known hash is treated as
//! an unknown network. Prefer [`resolve_genesis`], which renders the key itself.

use std::collections::HashMap;

use crate::core::constants::{KUSAMA_GENESIS, POLKADOT_GENESIS, RELAY_STAKE_TARGET};
use crate::types::inflation::{InflationParams, ParamsOverride};
use crate::utils::genesis::GenesisHash;

/// Baseline coefficients for networks without an override
pub const DEFAULT_PARAMS: InflationParams = InflationParams::baseline();

lazy_static::lazy_static! {
    /// Known networks, keyed by canonical genesis hash
    static ref KNOWN_PARAMS: HashMap<&'static str, ParamsOverride> = {
        let mut map = HashMap::new();
        map.insert(KUSAMA_GENESIS, ParamsOverride::stake_target(RELAY_STAKE_TARGET));
        map.insert(POLKADOT_GENESIS, ParamsOverride::stake_target(RELAY_STAKE_TARGET));
        map
    };
}

/// Resolve the inflation parameters for a network identity.
///
/// `network_identity` must be the canonical genesis string. Any other value,
/// including the empty string, resolves to [`DEFAULT_PARAMS`].
pub fn resolve(network_identity: &str) -> InflationParams {
    KNOWN_PARAMS
        .get(network_identity)
        .map(|entry| entry.apply(DEFAULT_PARAMS))
        .unwrap_or(DEFAULT_PARAMS)
}

/// Resolve the inflation parameters for a typed genesis hash
pub fn resolve_genesis(genesis: &GenesisHash) -> InflationParams {
    resolve(&genesis.to_hex())
}

/// Whether the identity has an entry in the known-network table
pub fn is_known(network_identity: &str) -> bool {
    KNOWN_PARAMS.contains_key(network_identity)
}

/// All known networks with their fully merged parameters, sorted by genesis hash
pub fn known_networks() -> Vec<(&'static str, InflationParams)> {
    let mut entries: Vec<_> = KNOWN_PARAMS
        .iter()
        .map(|(genesis, entry)| (*genesis, entry.apply(DEFAULT_PARAMS)))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::WESTEND_GENESIS;

    fn relay_params() -> InflationParams {
        InflationParams {
            auction_adjust: 0.0,
            auction_max: 0.0,
            falloff: 0.05,
            max_inflation: 0.1,
            min_inflation: 0.025,
            stake_target: 0.75,
        }
    }

    #[test]
    fn test_kusama_override() {
        assert_eq!(resolve(KUSAMA_GENESIS), relay_params());
    }

    #[test]
    fn test_polkadot_override() {
        assert_eq!(resolve(POLKADOT_GENESIS), relay_params());
        assert_eq!(resolve(POLKADOT_GENESIS), resolve(KUSAMA_GENESIS));
    }

    #[test]
    fn test_unknown_network_gets_defaults() {
        assert_eq!(resolve(WESTEND_GENESIS), DEFAULT_PARAMS);
        assert_eq!(resolve(WESTEND_GENESIS).stake_target, 0.5);
    }

    #[test]
    fn test_empty_and_zero_identity() {
        assert_eq!(resolve(""), DEFAULT_PARAMS);
        assert_eq!(
            resolve_genesis(&GenesisHash::from_bytes([0u8; 32])),
            DEFAULT_PARAMS
        );
    }

    #[test]
    fn test_lookup_is_exact_match() {
        // Non-canonical renderings of a known hash do not hit the table
        assert_eq!(resolve(&KUSAMA_GENESIS.to_uppercase()), DEFAULT_PARAMS);
        assert_eq!(resolve(KUSAMA_GENESIS.trim_start_matches("0x")), DEFAULT_PARAMS);
        assert_eq!(resolve(&KUSAMA_GENESIS[..KUSAMA_GENESIS.len() - 2]), DEFAULT_PARAMS);
    }

    #[test]
    fn test_resolve_genesis_normalizes_via_typed_hash() {
        let upper = format!("0x{}", KUSAMA_GENESIS[2..].to_uppercase());
        let genesis = GenesisHash::from_hex(&upper).unwrap();
        assert_eq!(resolve_genesis(&genesis), relay_params());
    }

    #[test]
    fn test_known_networks_listing() {
        let known = known_networks();
        assert_eq!(known.len(), 2);
        assert_eq!(known[0].0, POLKADOT_GENESIS);
        assert_eq!(known[1].0, KUSAMA_GENESIS);
        assert!(known.iter().all(|(_, p)| *p == relay_params()));
        assert!(is_known(KUSAMA_GENESIS));
        assert!(!is_known(WESTEND_GENESIS));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        for id in [KUSAMA_GENESIS, POLKADOT_GENESIS, WESTEND_GENESIS, "", "garbage"] {
            assert_eq!(resolve(id), resolve(id));
        }
    }
}
