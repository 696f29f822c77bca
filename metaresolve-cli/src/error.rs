use metaresolve::error::InvalidAddressError;
use metaresolve_explorers::ConfigurationError;

use crate::config::ConfigError;

/// Errors that abort the command with a non-zero exit status.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The contract address is malformed or not checksummed.
    #[error(transparent)]
    Address(#[from] InvalidAddressError),
    /// Neither a network nor an RPC URL was given.
    #[error("No network configured: pass --network or --rpc-url, or set one in the config file")]
    NoNetwork,
    /// The RPC URL does not parse.
    #[error("Invalid RPC URL {url}: {source}")]
    InvalidRpcUrl {
        /// The offending URL.
        url: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },
    /// The RPC node could not report its chain ID.
    #[error("Failed to read chain ID from {url}: {source}")]
    Rpc {
        /// RPC endpoint queried.
        url: String,
        /// The underlying transport or RPC error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The explorer clients could not be set up.
    #[error(transparent)]
    Explorers(#[from] ConfigurationError),
    /// The result could not be written.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
    /// The result could not be serialized.
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}
