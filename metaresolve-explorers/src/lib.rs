//! Block explorer clients for [`metaresolve`].
//!
//! This crate provides the concrete [`ProviderClient`](metaresolve::ProviderClient)
//! implementations and the [`ExplorerFactory`] that decides which of them can
//! serve a network:
//!
//! - [`SourcifyClient`]: Sourcify v2 contract API;
//! - [`EtherscanClient`]: Etherscan-compatible `getsourcecode` API;
//! - [`BlockscoutClient`]: Blockscout GraphQL `address { smartContract }` query.
//!
//! # Example
//!
//! ```no_run
//! use metaresolve::Network;
//! use metaresolve::networks::GNOSIS;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = metaresolve_explorers::resolver(&Network::new(GNOSIS), None);
//! let metadata = resolver
//!     .resolve("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod blockscout;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod etherscan;
pub mod factory;
pub mod http;
pub mod sourcify;

pub use blockscout::BlockscoutClient;
pub use config::ExplorerConfig;
pub use error::{ConfigurationError, ExplorerError};
pub use etherscan::EtherscanClient;
pub use factory::ExplorerFactory;
pub use sourcify::SourcifyClient;

use metaresolve::{ContractMetadataResolver, NetworkSource};

/// Builds a resolver for `source` with the default explorer configuration.
///
/// If the HTTP client cannot be created, the failure is logged and the
/// resolver only serves overrides.
pub fn resolver<S>(source: &S, etherscan_api_key: Option<String>) -> ContractMetadataResolver
where
    S: NetworkSource + ?Sized,
{
    let config = ExplorerConfig {
        etherscan_api_key,
        ..ExplorerConfig::default()
    };
    resolver_with_config(source, &config)
}

/// Builds a resolver for `source` from an explicit configuration.
///
/// If the HTTP client cannot be created, the failure is logged and the
/// resolver only serves overrides.
pub fn resolver_with_config<S>(source: &S, config: &ExplorerConfig) -> ContractMetadataResolver
where
    S: NetworkSource + ?Sized,
{
    match ExplorerFactory::try_new(config) {
        Ok(factory) => ContractMetadataResolver::new(source, &factory),
        Err(e) => {
            let network = source.network();
            tracing::info!(network = %network, error = %e, "Explorer clients are not available");
            ContractMetadataResolver::from_providers(network, Vec::new())
        }
    }
}
