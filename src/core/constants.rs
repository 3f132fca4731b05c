//! Core constants for Substrate NPoS networks
//! Genesis fingerprints, baseline inflation coefficients and public endpoints

/// Kusama genesis hash, canonical `0x`-prefixed lowercase hex
pub const KUSAMA_GENESIS: &str =
    "0xb0a8d493285c2df73290dfb7e61f870f17b41801197a149ca93654499ea3dafe";

/// Polkadot genesis hash, canonical `0x`-prefixed lowercase hex
pub const POLKADOT_GENESIS: &str =
    "0x91b171bb158e2d3848fa23a9f1c25182fb8e20313b2c1eb49219da7a70ce90c3";

/// Westend genesis hash. Westend runs the baseline curve.
pub const WESTEND_GENESIS: &str =
    "0xe143f23803ac50e8f6f8e62695d1ce9e4e1d68aa36c1cd2cfd15340213f3423e";

/// Length in bytes of a genesis fingerprint
pub const GENESIS_HASH_LEN: usize = 32;

/// Compile-time check that the canonical hex form is `0x` + two digits per byte
const _: () = assert!(
    KUSAMA_GENESIS.len() == 2 + GENESIS_HASH_LEN * 2
        && POLKADOT_GENESIS.len() == 2 + GENESIS_HASH_LEN * 2
        && WESTEND_GENESIS.len() == 2 + GENESIS_HASH_LEN * 2,
    "genesis constants must be 0x-prefixed 32-byte hex"
);

/// No auction effect unless overridden
pub const DEFAULT_AUCTION_ADJUST: f64 = 0.0;
pub const DEFAULT_AUCTION_MAX: f64 = 0.0;

/// 5% curve steepness once stake passes the target
pub const DEFAULT_FALLOFF: f64 = 0.05;

/// 10% annual ceiling
pub const DEFAULT_MAX_INFLATION: f64 = 0.1;

/// 2.5% annual floor. Runtime commentary upstream reads "0.25% min"; the literal is authoritative.
pub const DEFAULT_MIN_INFLATION: f64 = 0.025;

/// 50% of issuance targeted as staked
pub const DEFAULT_STAKE_TARGET: f64 = 0.5;

/// Stake target used by the relay chains (Polkadot, Kusama)
pub const RELAY_STAKE_TARGET: f64 = 0.75;

/// Network names
pub const NETWORK_POLKADOT: &str = "polkadot";
pub const NETWORK_KUSAMA: &str = "kusama";
pub const NETWORK_WESTEND: &str = "westend";
pub const NETWORK_LOCAL: &str = "local";

/// Default network
pub const DEFAULT_NETWORK: &str = NETWORK_POLKADOT;

/// Network endpoints
pub const POLKADOT_ENDPOINT: &str = "wss://rpc.polkadot.io";
pub const KUSAMA_ENDPOINT: &str = "wss://kusama-rpc.polkadot.io";
pub const WESTEND_ENDPOINT: &str = "wss://westend-rpc.polkadot.io";
pub const LOCAL_ENDPOINT: &str = "ws://127.0.0.1:9944";

/// Default endpoint
pub const DEFAULT_ENDPOINT: &str = POLKADOT_ENDPOINT;
