//! Configuration and network settings
//!
//! Network names, endpoint resolution and environment-driven defaults.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    DEFAULT_ENDPOINT, DEFAULT_NETWORK, KUSAMA_ENDPOINT, KUSAMA_GENESIS, LOCAL_ENDPOINT,
    NETWORK_KUSAMA, NETWORK_LOCAL, NETWORK_POLKADOT, NETWORK_WESTEND, POLKADOT_ENDPOINT,
    POLKADOT_GENESIS, WESTEND_ENDPOINT, WESTEND_GENESIS,
};
use crate::error::{Error, Result};
use crate::logging::LoggingConfig;
use crate::utils::genesis::GenesisHash;

/// Supported network names
pub const NETWORKS: &[&str] = &[NETWORK_POLKADOT, NETWORK_KUSAMA, NETWORK_WESTEND, NETWORK_LOCAL];

/// Local endpoint (can be overridden by NPOS_LOCAL_ENDPOINT)
pub fn local_entrypoint() -> String {
    env::var("NPOS_LOCAL_ENDPOINT").unwrap_or_else(|_| LOCAL_ENDPOINT.to_string())
}

/// Network enum for type-safe network selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Polkadot,
    Kusama,
    Westend,
    Local,
}

impl Network {
    /// Get the WebSocket endpoint for this network
    pub fn endpoint(&self) -> String {
        match self {
            Network::Polkadot => POLKADOT_ENDPOINT.to_string(),
            Network::Kusama => KUSAMA_ENDPOINT.to_string(),
            Network::Westend => WESTEND_ENDPOINT.to_string(),
            Network::Local => local_entrypoint(),
        }
    }

    /// Parse network from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "polkadot" | "dot" => Some(Network::Polkadot),
            "kusama" | "ksm" => Some(Network::Kusama),
            "westend" | "wnd" => Some(Network::Westend),
            "local" | "localhost" => Some(Network::Local),
            _ => None,
        }
    }

    /// Get network name
    pub fn name(&self) -> &'static str {
        match self {
            Network::Polkadot => NETWORK_POLKADOT,
            Network::Kusama => NETWORK_KUSAMA,
            Network::Westend => NETWORK_WESTEND,
            Network::Local => NETWORK_LOCAL,
        }
    }

    /// Genesis hash of the public network; dev chains have none fixed
    pub fn expected_genesis(&self) -> Option<GenesisHash> {
        let hex = match self {
            Network::Polkadot => POLKADOT_GENESIS,
            Network::Kusama => KUSAMA_GENESIS,
            Network::Westend => WESTEND_GENESIS,
            Network::Local => return None,
        };
        GenesisHash::from_hex(hex).ok()
    }

    /// Name of the public network with this genesis hash, if any
    pub fn from_genesis(genesis: &GenesisHash) -> Option<Self> {
        [Network::Polkadot, Network::Kusama, Network::Westend]
            .into_iter()
            .find(|n| n.expected_genesis().as_ref() == Some(genesis))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Network::parse(s).ok_or_else(|| {
            Error::invalid_parameter(format!(
                "unknown network '{}', expected one of: {}",
                s,
                NETWORKS.join(", ")
            ))
        })
    }
}

/// Get network endpoint from network name or custom endpoint.
///
/// Precedence: explicit endpoint, then `NPOS_RPC`, then the named network.
/// Anything else is taken to be a URL already.
pub fn resolve_endpoint(network: &str, custom_endpoint: Option<&str>) -> String {
    if let Some(endpoint) = custom_endpoint {
        return endpoint.to_string();
    }

    if let Ok(endpoint) = env::var("NPOS_RPC") {
        return endpoint;
    }

    Network::parse(network)
        .map(|n| n.endpoint())
        .unwrap_or_else(|| network.to_string())
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub network: String,
    pub chain_endpoint: String,
    pub logging: LoggingConfig,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config for a specific network
    pub fn for_network(network: &str) -> Self {
        Self {
            network: network.to_string(),
            chain_endpoint: resolve_endpoint(network, None),
            ..Default::default()
        }
    }

    /// Set network
    pub fn with_network(mut self, network: &str) -> Self {
        self.network = network.to_string();
        self.chain_endpoint = resolve_endpoint(network, None);
        self
    }

    /// Set chain endpoint directly
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.chain_endpoint = endpoint.to_string();
        self
    }

    /// Set debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.logging.debug = debug;
        self
    }

    /// Load config from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(network) = env::var("NPOS_NETWORK") {
            config = config.with_network(&network);
        }

        if let Ok(endpoint) = env::var("NPOS_RPC") {
            config.chain_endpoint = endpoint;
        }

        config.logging = LoggingConfig::from_env();

        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: DEFAULT_NETWORK.to_string(),
            chain_endpoint: DEFAULT_ENDPOINT.to_string(),
            logging: LoggingConfig::default(),
        }
    }
}
