//! Client for Etherscan-compatible `getsourcecode` APIs.
//!
//! Etherscan's v2 API serves every chain of its family (BscScan,
//! PolygonScan, Arbiscan, ...) from one host, keyed by a `chainid` query
//! parameter, so one client covers every entry of
//! [`ETHERSCAN_ENDPOINTS`](crate::endpoints::ETHERSCAN_ENDPOINTS). Requests
//! without an API key are accepted but heavily rate-limited.

use std::fmt;

use alloy_json_abi::JsonAbi;
use alloy_primitives::Address;
use metaresolve::provider::{BoxFuture, FetchResult};
use metaresolve::{ContractMetadata, Network, ProviderClient, ProviderKind};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::endpoints::EndpointTable;
use crate::error::{ConfigurationError, ExplorerError};
use crate::http;

const CONTEXT: &str = "GET getsourcecode";

/// ABI placeholder returned for unverified contracts.
const NOT_VERIFIED_ABI: &str = "Contract source code not verified";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: String,
    #[serde(default)]
    message: String,
    result: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct SourceCode {
    source_code: String,
    #[serde(rename = "ABI")]
    abi: String,
    contract_name: String,
}

/// Etherscan-family explorer client bound to one network.
#[derive(Clone)]
pub struct EtherscanClient {
    network: Network,
    api_url: Url,
    api_key: Option<String>,
    http: Client,
}

impl fmt::Debug for EtherscanClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EtherscanClient")
            .field("network", &self.network)
            .field("api_url", &self.api_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl EtherscanClient {
    /// Creates a client for an explicit API URL.
    #[must_use]
    pub fn new(network: Network, api_url: Url, api_key: Option<String>, http: Client) -> Self {
        Self {
            network,
            api_url,
            api_key,
            http,
        }
    }

    /// Creates a client using the endpoint `table` knows for `network`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the table has no endpoint for the
    /// network or the endpoint is not a valid URL.
    pub fn for_network(
        network: Network,
        table: &EndpointTable,
        api_key: Option<String>,
        http: Client,
    ) -> Result<Self, ConfigurationError> {
        let url = table
            .get(network.chain_id())
            .ok_or(ConfigurationError::UnsupportedNetwork { network })?;
        let api_url = ConfigurationError::parse_url(url)?;
        Ok(Self::new(network, api_url, api_key, http))
    }

    /// Returns the API URL requests are sent to.
    #[must_use]
    pub const fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Looks up verified source metadata for `address`.
    ///
    /// Returns `Ok(None)` if the explorer reports the contract as unverified.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError`] on transport failure, a non-200 status, an
    /// undecodable body or an explorer-side rejection such as a rate limit.
    #[tracing::instrument(name = "etherscan.get_source_code", skip(self), fields(network = %self.network), err)]
    pub async fn get_contract_metadata(
        &self,
        address: Address,
    ) -> Result<Option<ContractMetadata>, ExplorerError> {
        let mut url = self.api_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("chainid", &self.network.chain_id().to_string())
                .append_pair("module", "contract")
                .append_pair("action", "getsourcecode")
                .append_pair("address", &address.to_checksum(None));
            if let Some(key) = &self.api_key {
                query.append_pair("apikey", key);
            }
        }
        let response = http::send(self.http.get(url), CONTEXT).await?;
        let body: ApiResponse = http::read_json(response, CONTEXT).await?;
        metadata_from_response(body)
    }
}

fn metadata_from_response(body: ApiResponse) -> Result<Option<ContractMetadata>, ExplorerError> {
    if body.status != "1" {
        let detail = body.result.as_str().unwrap_or(&body.message);
        if detail.contains("not verified") {
            return Ok(None);
        }
        return Err(ExplorerError::Rejected {
            context: CONTEXT,
            message: format!("{}: {detail}", body.message),
        });
    }

    let entries: Vec<SourceCode> =
        serde_json::from_value(body.result).map_err(|e| ExplorerError::malformed(CONTEXT, e))?;
    let Some(entry) = entries.into_iter().next() else {
        return Ok(None);
    };
    if entry.abi.is_empty() || entry.abi == NOT_VERIFIED_ABI {
        return Ok(None);
    }
    let abi: JsonAbi =
        serde_json::from_str(&entry.abi).map_err(|e| ExplorerError::malformed(CONTEXT, e))?;

    Ok(Some(ContractMetadata {
        name: Some(entry.contract_name).filter(|n| !n.is_empty()),
        abi: Some(abi),
        source_available: !entry.source_code.is_empty(),
        partial_match: false,
    }))
}

impl ProviderClient for EtherscanClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Etherscan
    }

    fn network(&self) -> Network {
        self.network
    }

    fn fetch(&self, address: Address) -> BoxFuture<'_, FetchResult> {
        Box::pin(async move { Ok(self.get_contract_metadata(address).await?) })
    }
}
