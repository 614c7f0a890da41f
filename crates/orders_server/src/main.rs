//! Binary entry point for the dataset file server.

use clap::Parser;
use orders_server::config::{build_config, CliArgs, LogLevel, ServerConfig};
use orders_server::server::Server;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Serve a directory of generated order datasets over HTTP.
#[derive(Debug, Parser)]
#[command(name = "orders_server", version)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Interface to bind.
    #[arg(long, env = "FXORDERS_SERVER_HOST")]
    host: Option<String>,

    /// Port to bind.
    #[arg(long, short, env = "FXORDERS_SERVER_PORT")]
    port: Option<u16>,

    /// Directory to serve.
    #[arg(long, env = "FXORDERS_SERVER_ROOT")]
    root_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "FXORDERS_LOG_LEVEL")]
    log_level: Option<String>,
}

fn init_tracing(config: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let log_level = args
        .log_level
        .as_deref()
        .map(str::parse::<LogLevel>)
        .transpose()?;
    let cli = CliArgs {
        config_file: args.config,
        host: args.host,
        port: args.port,
        root_dir: args.root_dir,
        log_level,
    };

    let config = build_config(&cli)?;
    init_tracing(&config);

    Server::new(config).run().await?;
    Ok(())
}
