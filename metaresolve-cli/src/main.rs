//! Looks up smart-contract metadata from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Resolve on a known network
//! metaresolve 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed --network eip155:100
//!
//! # Detect the network from an RPC node
//! metaresolve 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed --rpc-url https://rpc.gnosischain.com
//!
//! # Configure logging level (logs go to stderr)
//! RUST_LOG=debug metaresolve 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed --network gnosis
//! ```
//!
//! The result is printed to stdout as JSON; `metadata` is `null` when no
//! source knows the contract.
//!
//! # Environment Variables
//!
//! - `CONFIG`: path to TOML configuration file (default: `metaresolve.toml`)
//! - `ETHERSCAN_API_KEY`: Etherscan-family API key
//! - `RUST_LOG`: log level filter (default: `info`)

mod chain;
mod config;
mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use metaresolve::address::parse_checksummed;
use metaresolve::{ChainId, ContractMetadata, ContractMetadataResolver, Network, NetworkSource};
use metaresolve_explorers::ExplorerFactory;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::chain::NetworkChoice;
use crate::config::CliConfig;
use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(
    name = "metaresolve",
    about = "Resolve a contract's name and ABI from Sourcify, Etherscan and Blockscout.",
    version
)]
struct Cli {
    /// EIP-55 checksummed contract address
    address: String,

    /// Network as CAIP-2 (`eip155:100`), chain ID or name
    #[arg(long, value_name = "NETWORK", conflicts_with = "rpc_url")]
    network: Option<Network>,

    /// JSON-RPC endpoint to read the chain ID from
    #[arg(long, value_name = "URL")]
    rpc_url: Option<String>,

    /// Path to the configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Etherscan-family API key (overrides config and environment)
    #[arg(long, value_name = "KEY")]
    etherscan_api_key: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    address: String,
    network: &'static str,
    chain_id: ChainId,
    metadata: Option<ContractMetadata>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!("metaresolve failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let address = parse_checksummed(&cli.address)?;

    let mut config = match &cli.config {
        Some(path) => CliConfig::load_from(path)?,
        None => CliConfig::load()?,
    };
    if let Some(key) = cli.etherscan_api_key {
        config.explorers.etherscan_api_key = Some(key);
    }
    if let Some(timeout) = cli.timeout {
        config.explorers.request_timeout_secs = timeout;
    }
    tracing::debug!(config = ?config, "Loaded configuration");

    let source = NetworkChoice::select(
        cli.network,
        cli.rpc_url.as_deref(),
        config.network,
        config.rpc_url.as_deref(),
    )?
    .into_network()
    .await?;
    let network = source.network();
    if let Some(rpc_url) = source.rpc_url() {
        tracing::info!(rpc_url = %rpc_url, network = %network, "Detected network");
    }

    let factory = ExplorerFactory::try_new(&config.explorers)?;
    let resolver = ContractMetadataResolver::new(&source, &factory);
    let metadata = resolver.resolve_address(address).await;
    if metadata.is_none() {
        tracing::info!(contract = %address, network = %network, "No metadata found");
    }

    let report = Report {
        address: address.to_checksum(None),
        network: network.name(),
        chain_id: network.chain_id(),
        metadata,
    };

    let mut stdout = std::io::stdout().lock();
    if cli.compact {
        serde_json::to_writer(&mut stdout, &report)?;
    } else {
        serde_json::to_writer_pretty(&mut stdout, &report)?;
    }
    writeln!(stdout)?;
    Ok(())
}
