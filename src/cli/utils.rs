//! CLI utility functions for terminal output and formatting.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;

use crate::types::inflation::InflationParams;
use crate::utils::genesis::GenesisHash;

/// Create a spinner progress bar with message.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print success message in green.
pub fn print_success(message: &str) {
    let term = Term::stdout();
    let _ = term.write_line(&format!("{} {}", style("✓").green().bold(), message));
}

/// Print info message in blue.
pub fn print_info(message: &str) {
    let term = Term::stdout();
    let _ = term.write_line(&format!("{} {}", style("ℹ").blue().bold(), message));
}

/// Print warning message in yellow.
pub fn print_warning(message: &str) {
    let term = Term::stdout();
    let _ = term.write_line(&format!("{} {}", style("⚠").yellow().bold(), message));
}

/// Create a styled table for CLI output.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Create a table with custom headers.
pub fn create_table_with_headers(headers: &[&str]) -> Table {
    let mut table = create_table();
    table.set_header(headers.iter().map(|h| style(*h).bold().to_string()));
    table
}

/// Format a fraction as a percentage, e.g. 0.025 -> "2.50%"
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Rows of (field, value) for one parameter record, in declaration order
pub fn params_rows(params: &InflationParams) -> Vec<(&'static str, String)> {
    vec![
        ("auctionAdjust", params.auction_adjust.to_string()),
        ("auctionMax", params.auction_max.to_string()),
        ("falloff", format_percent(params.falloff)),
        ("maxInflation", format_percent(params.max_inflation)),
        ("minInflation", format_percent(params.min_inflation)),
        ("stakeTarget", format_percent(params.stake_target)),
    ]
}

/// Two-column table of one parameter record
pub fn params_table(params: &InflationParams) -> Table {
    let mut table = create_table_with_headers(&["Parameter", "Value"]);
    for (field, value) in params_rows(params) {
        table.add_row(vec![field.to_string(), value]);
    }
    table
}

/// Pretty-print any serializable value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Shorten a genesis hash for table display: `0x` and 8 leading digits, 8 trailing digits
pub fn format_genesis(genesis: &GenesisHash) -> String {
    let hex = genesis.to_hex();
    // canonical hex is ASCII, so byte offsets are char offsets
    format!("{}...{}", &hex[..10], &hex[hex.len() - 8..])
}
