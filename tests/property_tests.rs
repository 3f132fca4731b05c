//! Property-based tests for parameter resolution and genesis encoding.

use npos_inflation::{
    is_known, resolve, resolve_genesis, GenesisHash, DEFAULT_PARAMS, KUSAMA_GENESIS,
    POLKADOT_GENESIS,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_resolve_never_panics(id in ".*") {
        let _ = resolve(&id);
    }

    #[test]
    fn prop_unknown_strings_get_defaults(id in ".*") {
        prop_assume!(id != KUSAMA_GENESIS && id != POLKADOT_GENESIS);
        prop_assert_eq!(resolve(&id), DEFAULT_PARAMS);
        prop_assert!(!is_known(&id));
    }

    #[test]
    fn prop_resolve_is_deterministic(id in "(0x)?[0-9a-fA-F]{0,70}") {
        prop_assert_eq!(resolve(&id), resolve(&id));
    }

    #[test]
    fn prop_genesis_hex_is_canonical(bytes in prop::array::uniform32(any::<u8>())) {
        let genesis = GenesisHash::from_bytes(bytes);
        let hex = genesis.to_hex();
        prop_assert_eq!(hex.len(), 66);
        prop_assert!(hex.starts_with("0x"));
        prop_assert!(hex[2..].chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        prop_assert_eq!(hex.to_uppercase()[2..].parse::<GenesisHash>().unwrap(), genesis);
    }

    #[test]
    fn prop_resolved_params_stay_in_range(bytes in prop::array::uniform32(any::<u8>())) {
        let params = resolve_genesis(&GenesisHash::from_bytes(bytes));
        prop_assert!(params.stake_target > 0.0 && params.stake_target < 1.0);
        prop_assert!(params.min_inflation <= params.max_inflation);
        prop_assert!(params.falloff >= 0.0);
    }
}

#[test]
fn test_known_identities_resolve_with_override() {
    for id in [KUSAMA_GENESIS, POLKADOT_GENESIS] {
        assert_eq!(resolve(id).stake_target, 0.75);
        assert_eq!(resolve_genesis(&id.parse().unwrap()).stake_target, 0.75);
    }
}
