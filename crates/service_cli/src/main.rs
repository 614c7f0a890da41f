//! fxorders CLI - Command Line Operations for Synthetic FX Order Data
//!
//! This is the operational entry point for the FX order data generator.
//!
//! # Commands
//!
//! - `fxorders generate` - Generate a batch of synthetic orders and persist it
//! - `fxorders check --config <file>` - Validate a generator configuration file

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// Synthetic FX order data generator CLI
#[derive(Parser)]
#[command(name = "fxorders")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a batch of synthetic orders
    Generate {
        /// Number of orders to generate
        #[arg(short, long, default_value = "50000")]
        rows: usize,

        /// Output file path
        #[arg(short, long, default_value = "orders.parquet")]
        output: PathBuf,

        /// Output format (parquet, jsonl)
        #[arg(short, long, default_value = "parquet")]
        format: String,

        /// Seed for reproducible output; random when omitted
        #[arg(short, long)]
        seed: Option<u64>,

        /// Generate across all cores
        #[arg(long)]
        parallel: bool,

        /// Generator configuration file (TOML); built-in defaults when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print batch statistics after writing
        #[arg(long)]
        stats: bool,
    },

    /// Validate a generator configuration file
    Check {
        /// Configuration file to validate
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Generate {
            rows,
            output,
            format,
            seed,
            parallel,
            config,
            stats,
        } => commands::generate::run(commands::generate::GenerateArgs {
            rows,
            output,
            format,
            seed,
            parallel,
            config,
            stats,
        }),
        Commands::Check { config } => commands::check::run(&config),
    }
}
