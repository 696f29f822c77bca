//! Client for Blockscout's GraphQL API.

use alloy_json_abi::JsonAbi;
use alloy_primitives::Address;
use metaresolve::provider::{BoxFuture, FetchResult};
use metaresolve::{ContractMetadata, Network, ProviderClient, ProviderKind};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::endpoints::EndpointTable;
use crate::error::{ConfigurationError, ExplorerError};
use crate::http;

const CONTEXT: &str = "POST graphql address.smartContract";

#[derive(Debug, Serialize)]
struct GraphQlRequest {
    query: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<QueryData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    address: Option<AddressNode>,
}

#[derive(Debug, Deserialize)]
struct AddressNode {
    #[serde(rename = "smartContract")]
    smart_contract: Option<SmartContract>,
}

#[derive(Debug, Deserialize)]
struct SmartContract {
    name: Option<String>,
    #[serde(default)]
    abi: serde_json::Value,
}

/// Blockscout explorer client bound to one network.
#[derive(Debug, Clone)]
pub struct BlockscoutClient {
    network: Network,
    graphql_url: Url,
    http: Client,
}

impl BlockscoutClient {
    /// Creates a client for an explicit GraphQL endpoint.
    #[must_use]
    pub fn new(network: Network, graphql_url: Url, http: Client) -> Self {
        Self {
            network,
            graphql_url,
            http,
        }
    }

    /// Creates a client using the endpoint `table` knows for `network`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the network is not in the table or
    /// its endpoint is not a valid URL.
    pub fn for_network(
        network: Network,
        table: &EndpointTable,
        http: Client,
    ) -> Result<Self, ConfigurationError> {
        let url = table
            .get(network.chain_id())
            .ok_or(ConfigurationError::UnsupportedNetwork { network })?;
        Ok(Self::new(network, ConfigurationError::parse_url(url)?, http))
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn graphql_url(&self) -> &Url {
        &self.graphql_url
    }

    /// Queries the verified `smartContract` record of `address`.
    ///
    /// Returns `Ok(None)` if the address is unknown to the explorer or has no
    /// verified contract.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError`] on transport failure, a non-200 status, an
    /// undecodable body or a GraphQL error response.
    #[tracing::instrument(name = "blockscout.smart_contract", skip(self), fields(network = %self.network), err)]
    pub async fn get_contract_metadata(
        &self,
        address: Address,
    ) -> Result<Option<ContractMetadata>, ExplorerError> {
        let request = GraphQlRequest {
            query: format!(
                "{{address(hash: \"{}\") {{hash, smartContract {{name, abi}}}}}}",
                address.to_checksum(None)
            ),
        };
        let response = http::send(
            self.http.post(self.graphql_url.clone()).json(&request),
            CONTEXT,
        )
        .await?;
        let body: GraphQlResponse = http::read_json(response, CONTEXT).await?;

        if !body.errors.is_empty() {
            let message = body
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ExplorerError::Rejected {
                context: CONTEXT,
                message,
            });
        }

        let Some(contract) = body
            .data
            .and_then(|d| d.address)
            .and_then(|a| a.smart_contract)
        else {
            return Ok(None);
        };
        Ok(Some(ContractMetadata {
            name: contract.name.filter(|n| !n.is_empty()),
            abi: parse_abi(contract.abi)?,
            source_available: true,
            partial_match: false,
        }))
    }
}

/// Blockscout instances disagree on whether `abi` is a JSON array or a
/// string holding one.
fn parse_abi(value: serde_json::Value) -> Result<Option<JsonAbi>, ExplorerError> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) if s.is_empty() => Ok(None),
        serde_json::Value::String(s) => serde_json::from_str(&s)
            .map(Some)
            .map_err(|e| ExplorerError::malformed(CONTEXT, e)),
        other => serde_json::from_value(other)
            .map(Some)
            .map_err(|e| ExplorerError::malformed(CONTEXT, e)),
    }
}

impl ProviderClient for BlockscoutClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Blockscout
    }

    fn network(&self) -> Network {
        self.network
    }

    fn fetch(&self, address: Address) -> BoxFuture<'_, FetchResult> {
        Box::pin(async move { Ok(self.get_contract_metadata(address).await?) })
    }
}
