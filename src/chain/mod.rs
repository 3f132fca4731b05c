//! Chain access for parameter resolution
//!
//! The resolver only needs a network's genesis hash. [`GenesisSource`] is the
//! seam: a live [`ChainClient`] reads it from the node, while a [`GenesisHash`]
//! is its own source for offline use and tests.

use async_trait::async_trait;
use subxt::{OnlineClient, PolkadotConfig};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::params;
use crate::types::inflation::InflationParams;
use crate::utils::genesis::GenesisHash;

/// Anything that can report the genesis hash of the network it represents
#[async_trait]
pub trait GenesisSource: Send + Sync {
    async fn genesis_hash(&self) -> Result<GenesisHash>;
}

#[async_trait]
impl GenesisSource for GenesisHash {
    async fn genesis_hash(&self) -> Result<GenesisHash> {
        Ok(*self)
    }
}

/// Client connected to a Substrate node over WebSocket RPC
pub struct ChainClient {
    pub api: OnlineClient<PolkadotConfig>,
    pub rpc_url: String,
}

impl ChainClient {
    /// Connect to the specified RPC endpoint
    pub async fn new(rpc_url: impl Into<String>) -> Result<Self> {
        let url = rpc_url.into();
        let api = OnlineClient::<PolkadotConfig>::from_url(&url)
            .await
            .map_err(|e| Error::connection(format!("{}: {}", url, e)))?;

        info!(endpoint = %url, "Connected to chain");
        Ok(Self { api, rpc_url: url })
    }

    /// Get the underlying subxt API client
    pub fn api(&self) -> &OnlineClient<PolkadotConfig> {
        &self.api
    }

    /// Get the RPC URL
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Genesis hash as fetched by subxt during connection
    pub fn genesis(&self) -> GenesisHash {
        GenesisHash::from_bytes(self.api.genesis_hash().0)
    }

    /// Inflation parameters for the connected network
    pub fn inflation_params(&self) -> InflationParams {
        params::resolve_genesis(&self.genesis())
    }
}

#[async_trait]
impl GenesisSource for ChainClient {
    async fn genesis_hash(&self) -> Result<GenesisHash> {
        Ok(self.genesis())
    }
}

/// Read the network identity from `source` and resolve its inflation parameters.
///
/// Only obtaining the identity can fail; an unrecognized network resolves to
/// the baseline parameters.
pub async fn fetch_inflation_params<S>(source: &S) -> Result<InflationParams>
where
    S: GenesisSource + ?Sized,
{
    let genesis = source.genesis_hash().await?;
    let key = genesis.to_hex();
    let resolved = params::resolve(&key);

    if params::is_known(&key) {
        debug!(genesis = %key, stake_target = resolved.stake_target, "Known network, using override");
    } else {
        debug!(genesis = %key, "Unknown network, using default inflation parameters");
    }

    Ok(resolved)
}
