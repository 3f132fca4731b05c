//! CLI for inspecting NPoS inflation parameters
//!
//! # Commands
//!
//! - `resolve` - Resolve parameters for a genesis hash, offline
//! - `fetch` - Connect to a node and resolve parameters for its chain
//! - `networks` - List networks with custom parameters
//! - `defaults` - Show the baseline parameters

use clap::{Parser, Subcommand, ValueEnum};

use crate::logging::{init_logging, LoggingConfig};

pub mod commands;
pub mod utils;

/// NPoS inflation parameter inspector
#[derive(Parser)]
#[command(name = "npos-params")]
#[command(author = "Cortex Foundation")]
#[command(version = "0.1.0")]
#[command(about = "Resolve NPoS inflation curve parameters by genesis hash", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Network to connect to (polkadot, kusama, westend, local, or custom URL)
    #[arg(short, long, default_value = "polkadot", global = true)]
    pub network: String,

    /// Custom RPC endpoint (overrides --network)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub output: OutputFormat,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve parameters for a genesis hash without connecting
    #[command(alias = "r")]
    Resolve {
        /// Genesis hash as hex, with or without 0x prefix
        genesis: String,
    },

    /// Read the genesis hash from a node and resolve its parameters
    #[command(alias = "f")]
    Fetch,

    /// List networks with custom parameters
    #[command(alias = "ls")]
    Networks,

    /// Show the baseline parameters
    Defaults,
}

/// Run the CLI application
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    logging.debug |= cli.debug;
    init_logging(&logging);

    match &cli.command {
        Commands::Resolve { genesis } => commands::params::resolve(genesis, &cli),
        Commands::Fetch => commands::params::fetch(&cli).await,
        Commands::Networks => commands::params::networks(&cli),
        Commands::Defaults => commands::params::defaults(&cli),
    }
}
