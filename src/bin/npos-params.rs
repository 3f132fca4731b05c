//! npos-params binary entrypoint.
//!
//! Resolves and prints NPoS inflation parameters for a network, either from a
//! genesis hash given on the command line or by asking a live node.

use npos_inflation::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::run().await
}
