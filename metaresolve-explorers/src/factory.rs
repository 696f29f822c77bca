//! [`ProviderFactory`] backed by the explorer HTTP clients.

use std::collections::HashSet;

use metaresolve::{ChainId, Network, ProviderClient, ProviderFactory, ProviderKind};
use reqwest::Client;

use crate::blockscout::BlockscoutClient;
use crate::config::ExplorerConfig;
use crate::endpoints::EndpointTable;
use crate::error::ConfigurationError;
use crate::etherscan::EtherscanClient;
use crate::http::build_client;
use crate::sourcify::SourcifyClient;

/// Builds Etherscan, Blockscout and Sourcify clients from an [`ExplorerConfig`].
///
/// All clients share one pooled [`reqwest::Client`], so a factory (and the
/// resolvers it feeds) can be cloned and used concurrently.
#[derive(Debug, Clone)]
pub struct ExplorerFactory {
    etherscan: EndpointTable,
    blockscout: EndpointTable,
    sourcify_url: String,
    sourcify_chains: HashSet<ChainId>,
    etherscan_api_key: Option<String>,
    http: Client,
}

impl ExplorerFactory {
    /// Creates a factory, building the shared HTTP client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::HttpClient`] if the HTTP client cannot be built.
    pub fn try_new(config: &ExplorerConfig) -> Result<Self, ConfigurationError> {
        let http = build_client(config.request_timeout())?;
        Ok(Self::with_client(config, http))
    }

    /// Creates a factory that reuses an existing HTTP client.
    #[must_use]
    pub fn with_client(config: &ExplorerConfig, http: Client) -> Self {
        Self {
            etherscan: config.etherscan_table(),
            blockscout: config.blockscout_table(),
            sourcify_url: config.sourcify_url.clone(),
            sourcify_chains: config.sourcify_chain_set(),
            etherscan_api_key: config.etherscan_api_key.clone(),
            http,
        }
    }

    fn available<C, E>(
        kind: ProviderKind,
        network: Network,
        client: Result<C, E>,
    ) -> Option<Box<dyn ProviderClient>>
    where
        C: ProviderClient + 'static,
        E: std::fmt::Display,
    {
        match client {
            Ok(client) => Some(Box::new(client)),
            Err(e) => {
                tracing::info!(
                    network = %network,
                    provider = %kind,
                    error = %e,
                    "{kind} is not available for current network"
                );
                None
            }
        }
    }
}

impl ProviderFactory for ExplorerFactory {
    fn build_etherscan(&self, network: Network) -> Option<Box<dyn ProviderClient>> {
        Self::available(
            ProviderKind::Etherscan,
            network,
            EtherscanClient::for_network(
                network,
                &self.etherscan,
                self.etherscan_api_key.clone(),
                self.http.clone(),
            ),
        )
    }

    fn build_blockscout(&self, network: Network) -> Option<Box<dyn ProviderClient>> {
        Self::available(
            ProviderKind::Blockscout,
            network,
            BlockscoutClient::for_network(network, &self.blockscout, self.http.clone()),
        )
    }

    fn build_sourcify(&self, network: Network) -> Option<Box<dyn ProviderClient>> {
        let client = if self.sourcify_chains.contains(&network.chain_id()) {
            SourcifyClient::try_new(network, &self.sourcify_url, self.http.clone())
                .map_err(|e| e.to_string())
        } else {
            Err(ConfigurationError::UnsupportedNetwork { network }.to_string())
        };
        Self::available(ProviderKind::Sourcify, network, client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metaresolve::networks::{ENERGY_WEB_CHAIN, GNOSIS, MAINNET};

    fn kinds(factory: &ExplorerFactory, chain_id: ChainId) -> Vec<ProviderKind> {
        let network = Network::new(chain_id);
        ProviderKind::PRECEDENCE
            .into_iter()
            .filter_map(|kind| factory.build(kind, network))
            .map(|client| {
                assert_eq!(client.network(), network);
                client.kind()
            })
            .collect()
    }

    fn factory(config: &ExplorerConfig) -> ExplorerFactory {
        ExplorerFactory::with_client(config, Client::new())
    }

    #[test]
    fn gnosis_has_every_provider() {
        let factory = factory(&ExplorerConfig::default());
        assert_eq!(kinds(&factory, GNOSIS), ProviderKind::PRECEDENCE);
    }

    #[test]
    fn mainnet_has_no_blockscout() {
        let factory = factory(&ExplorerConfig::default());
        assert_eq!(
            kinds(&factory, MAINNET),
            [ProviderKind::Sourcify, ProviderKind::Etherscan]
        );
    }

    #[test]
    fn energy_web_is_blockscout_only() {
        let factory = factory(&ExplorerConfig::default());
        assert_eq!(kinds(&factory, ENERGY_WEB_CHAIN), [ProviderKind::Blockscout]);
    }

    #[test]
    fn unknown_chain_has_no_provider() {
        let factory = factory(&ExplorerConfig::default());
        assert!(kinds(&factory, 999_999).is_empty());
    }

    #[test]
    fn configuration_enables_private_chain() {
        let config: ExplorerConfig = serde_json::from_value(serde_json::json!({
            "etherscan_endpoints": { "eip155:31337": "http://localhost:5000/api" },
            "sourcify_chains": [31337]
        }))
        .unwrap();
        assert_eq!(
            kinds(&factory(&config), 31337),
            [ProviderKind::Sourcify, ProviderKind::Etherscan]
        );
    }

    #[test]
    fn broken_sourcify_url_disables_sourcify() {
        let config = ExplorerConfig {
            sourcify_url: "not a url".into(),
            ..ExplorerConfig::default()
        };
        assert_eq!(
            kinds(&factory(&config), GNOSIS),
            [ProviderKind::Etherscan, ProviderKind::Blockscout]
        );
    }

    #[test]
    fn try_new_builds_client() {
        let factory = ExplorerFactory::try_new(&ExplorerConfig::default()).unwrap();
        assert_eq!(kinds(&factory, GNOSIS).len(), 3);
    }
}
