//! Picks the network to resolve on.

use alloy_provider::{Provider, ProviderBuilder};
use metaresolve::{ChainId, Network, NetworkSource};
use url::Url;

use crate::error::CliError;

/// Where the network comes from, in decreasing priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkChoice {
    /// Given explicitly.
    Fixed(Network),
    /// Detected by asking an RPC node for its chain ID.
    Rpc(Url),
}

impl NetworkChoice {
    /// Picks the first available of: flag network, flag RPC URL, configured
    /// network, configured RPC URL.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NoNetwork`] if nothing is set, or
    /// [`CliError::InvalidRpcUrl`] if the chosen RPC URL does not parse.
    pub fn select(
        flag_network: Option<Network>,
        flag_rpc_url: Option<&str>,
        config_network: Option<Network>,
        config_rpc_url: Option<&str>,
    ) -> Result<Self, CliError> {
        if let Some(network) = flag_network {
            return Ok(Self::Fixed(network));
        }
        if let Some(url) = flag_rpc_url {
            return parse_rpc_url(url).map(Self::Rpc);
        }
        if let Some(network) = config_network {
            return Ok(Self::Fixed(network));
        }
        config_rpc_url
            .ok_or(CliError::NoNetwork)
            .and_then(parse_rpc_url)
            .map(Self::Rpc)
    }

    /// Resolves the choice to a concrete network.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Rpc`] if the RPC node cannot be queried.
    pub async fn into_network(self) -> Result<RpcNetwork, CliError> {
        match self {
            Self::Fixed(network) => Ok(RpcNetwork { network, rpc_url: None }),
            Self::Rpc(url) => {
                let chain_id = detect_chain_id(&url).await?;
                Ok(RpcNetwork {
                    network: Network::new(chain_id),
                    rpc_url: Some(url),
                })
            }
        }
    }
}

/// A network, remembering the RPC endpoint it was detected from.
#[derive(Debug, Clone)]
pub struct RpcNetwork {
    network: Network,
    rpc_url: Option<Url>,
}

impl RpcNetwork {
    /// The RPC endpoint the chain ID was read from, if any.
    #[must_use]
    pub const fn rpc_url(&self) -> Option<&Url> {
        self.rpc_url.as_ref()
    }
}

impl NetworkSource for RpcNetwork {
    fn network(&self) -> Network {
        self.network
    }
}

fn parse_rpc_url(url: &str) -> Result<Url, CliError> {
    url.parse().map_err(|source| CliError::InvalidRpcUrl {
        url: url.to_owned(),
        source,
    })
}

/// Queries `eth_chainId`.
async fn detect_chain_id(rpc_url: &Url) -> Result<ChainId, CliError> {
    let provider = ProviderBuilder::new().connect_http(rpc_url.clone());
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| CliError::Rpc {
            url: rpc_url.to_string(),
            source: Box::new(e),
        })?;
    tracing::debug!(rpc_url = %rpc_url, chain_id, "Detected chain");
    Ok(chain_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    const GNOSIS: Network = Network::new(100);
    const POLYGON: Network = Network::new(137);

    #[test]
    fn flag_network_wins() {
        let choice = NetworkChoice::select(
            Some(GNOSIS),
            Some("http://localhost:8545"),
            Some(POLYGON),
            Some("http://localhost:9545"),
        )
        .unwrap();
        assert_eq!(choice, NetworkChoice::Fixed(GNOSIS));
    }

    #[test]
    fn flag_rpc_beats_configured_network() {
        let choice =
            NetworkChoice::select(None, Some("http://localhost:8545"), Some(POLYGON), None).unwrap();
        assert_eq!(
            choice,
            NetworkChoice::Rpc(Url::parse("http://localhost:8545").unwrap())
        );
    }

    #[test]
    fn configured_network_beats_configured_rpc() {
        let choice =
            NetworkChoice::select(None, None, Some(POLYGON), Some("http://localhost:9545")).unwrap();
        assert_eq!(choice, NetworkChoice::Fixed(POLYGON));
    }

    #[test]
    fn nothing_configured_is_an_error() {
        assert!(matches!(
            NetworkChoice::select(None, None, None, None),
            Err(CliError::NoNetwork)
        ));
    }

    #[test]
    fn bad_rpc_url_is_an_error() {
        assert!(matches!(
            NetworkChoice::select(None, Some("localhost 8545"), None, None),
            Err(CliError::InvalidRpcUrl { .. })
        ));
    }

    #[tokio::test]
    async fn chain_id_is_read_from_rpc() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "method": "eth_chainId" })))
            .respond_with(|request: &Request| {
                let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
                ResponseTemplate::new(200).set_body_json(json!({
                    "jsonrpc": "2.0",
                    "id": body["id"],
                    "result": "0x64"
                }))
            })
            .expect(1)
            .mount(&server)
            .await;

        let url = Url::parse(&server.uri()).unwrap();
        let network = NetworkChoice::Rpc(url.clone()).into_network().await.unwrap();
        assert_eq!(network.network(), GNOSIS);
        assert_eq!(network.rpc_url(), Some(&url));
    }

    #[tokio::test]
    async fn unreachable_rpc_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let url = Url::parse(&server.uri()).unwrap();
        let err = NetworkChoice::Rpc(url).into_network().await.unwrap_err();
        assert!(matches!(err, CliError::Rpc { .. }));
    }
}
