// src/main.rs
use candlestick_pattern_scanner::cli::{Cli, Commands};
use candlestick_pattern_scanner::data::load_csv;
use candlestick_pattern_scanner::patterns::scan;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

fn main() -> Result<()> {
    // Initialize environment
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { file, json } => {
            let series = load_csv(&file)
                .with_context(|| format!("failed to load series from {}", file.display()))?;
            let report = scan(&series);
            info!(events = report.len(), "scan finished");

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for event in report.iter() {
                    println!("{}  {}", event.timestamp.format("%Y-%m-%d %H:%M:%S"), event.label);
                }
            }
        }
    }

    Ok(())
}
