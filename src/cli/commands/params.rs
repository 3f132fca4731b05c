//! Parameter commands: resolve, fetch, networks, defaults.

use serde::Serialize;

use crate::chain::ChainClient;
use crate::cli::utils::{
    create_table_with_headers, format_genesis, format_percent, params_table, print_info,
    print_json, print_success, print_warning, spinner,
};
use crate::cli::{Cli, OutputFormat};
use crate::config::{resolve_endpoint, Network};
use crate::params::{self, DEFAULT_PARAMS};
use crate::types::inflation::InflationParams;
use crate::utils::genesis::GenesisHash;

/// One resolved network, as printed by `resolve` and `fetch`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub genesis: GenesisHash,
    pub network: Option<Network>,
    pub known: bool,
    pub params: InflationParams,
}

impl Resolution {
    pub fn for_genesis(genesis: GenesisHash) -> Self {
        let key = genesis.to_hex();
        Self {
            genesis,
            network: Network::from_genesis(&genesis),
            known: params::is_known(&key),
            params: params::resolve(&key),
        }
    }
}

/// Resolve parameters for a genesis hash given on the command line
pub fn resolve(genesis: &str, cli: &Cli) -> anyhow::Result<()> {
    let genesis: GenesisHash = genesis
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid genesis hash '{}': {}", genesis, e))?;

    print_resolution(&Resolution::for_genesis(genesis), cli.output)
}

/// Connect to the configured node and resolve parameters for its chain
pub async fn fetch(cli: &Cli) -> anyhow::Result<()> {
    let endpoint = resolve_endpoint(&cli.network, cli.endpoint.as_deref());

    let sp = spinner(&format!("Connecting to {}...", endpoint));
    let client = ChainClient::new(&endpoint).await;
    sp.finish_and_clear();
    let client = client.map_err(|e| anyhow::anyhow!("Failed to connect: {}", e))?;

    let resolution = Resolution::for_genesis(client.genesis());
    if cli.output == OutputFormat::Text {
        print_success(&format!("Connected to {}", client.rpc_url()));
    }
    print_resolution(&resolution, cli.output)
}

/// List networks that carry custom parameters
pub fn networks(cli: &Cli) -> anyhow::Result<()> {
    let known: Vec<Resolution> = params::known_networks()
        .into_iter()
        .filter_map(|(genesis, _)| GenesisHash::from_hex(genesis).ok())
        .map(Resolution::for_genesis)
        .collect();

    if cli.output == OutputFormat::Json {
        return print_json(&known);
    }

    let mut table = create_table_with_headers(&["Network", "Genesis", "Stake Target"]);
    for entry in &known {
        table.add_row(vec![
            entry
                .network
                .map(|n| n.to_string())
                .unwrap_or_else(|| "unnamed".to_string()),
            format_genesis(&entry.genesis),
            format_percent(entry.params.stake_target),
        ]);
    }
    println!("{table}");
    print_info("All other networks use the default parameters");
    Ok(())
}

/// Show the baseline parameters
pub fn defaults(cli: &Cli) -> anyhow::Result<()> {
    match cli.output {
        OutputFormat::Json => print_json(&DEFAULT_PARAMS),
        OutputFormat::Text => {
            println!("{}", params_table(&DEFAULT_PARAMS));
            Ok(())
        }
    }
}

fn print_resolution(resolution: &Resolution, output: OutputFormat) -> anyhow::Result<()> {
    if output == OutputFormat::Json {
        return print_json(resolution);
    }

    let name = resolution
        .network
        .map(|n| n.to_string())
        .unwrap_or_else(|| "unrecognized chain".to_string());
    print_info(&format!("Genesis {} ({})", resolution.genesis, name));

    if !resolution.known {
        print_warning("No custom parameters for this network, using defaults");
    }

    println!("{}", params_table(&resolution.params));
    Ok(())
}
