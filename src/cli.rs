// src/cli.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pattern-scanner")]
#[command(about = "Candlestick pattern scanner for OHLC series", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan an OHLC CSV file for candlestick patterns
    Scan {
        /// Input file with timestamp,open,high,low,close columns
        #[arg(short, long)]
        file: PathBuf,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
