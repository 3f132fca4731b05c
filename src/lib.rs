pub mod chain;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod params;
pub mod types;
pub mod utils;

pub use chain::{fetch_inflation_params, ChainClient, GenesisSource};
pub use config::{resolve_endpoint, Config, Network};
pub use error::{Error, Result};

// Re-export logging module
pub use logging::{
    init_default_logging, init_logging, is_initialized, CompactFormatter, LogFormat,
    LoggingConfig, TextFormatter,
};

// Parameter resolution
pub use params::{is_known, known_networks, resolve, resolve_genesis, DEFAULT_PARAMS};

pub use types::*;
pub use utils::genesis::GenesisHash;

// Genesis fingerprints of the well-known networks
pub use crate::core::constants::{KUSAMA_GENESIS, POLKADOT_GENESIS, WESTEND_GENESIS};
