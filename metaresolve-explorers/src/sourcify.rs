//! Client for the Sourcify v2 contract API.
//!
//! Sourcify reports how well the submitted sources reproduce the deployed
//! bytecode: `exact_match` when metadata hashes agree as well, `match` when
//! only the executable bytecode does. The latter is surfaced as a partial match.

use alloy_json_abi::JsonAbi;
use alloy_primitives::Address;
use metaresolve::provider::{BoxFuture, FetchResult};
use metaresolve::{ContractMetadata, Network, ProviderClient, ProviderKind};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::error::ExplorerError;
use crate::http;

const CONTEXT: &str = "GET v2/contract";

/// Public Sourcify server.
pub const DEFAULT_SOURCIFY_URL: &str = "https://sourcify.dev/server/";

#[derive(Debug, Deserialize)]
struct ContractResponse {
    #[serde(rename = "match")]
    match_kind: Option<MatchKind>,
    #[serde(default)]
    abi: Option<JsonAbi>,
    #[serde(default)]
    compilation: Option<Compilation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum MatchKind {
    ExactMatch,
    Match,
}

#[derive(Debug, Deserialize)]
struct Compilation {
    name: Option<String>,
}

/// Sourcify client bound to one network.
#[derive(Debug, Clone)]
pub struct SourcifyClient {
    network: Network,
    base_url: Url,
    http: Client,
}

impl SourcifyClient {
    /// Creates a client for a Sourcify server.
    ///
    /// `base_url` is normalized to end with a single `/` so that API paths
    /// are joined below it.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::UrlParse`] if the normalized URL is invalid.
    pub fn try_new(network: Network, base_url: &str, http: Client) -> Result<Self, ExplorerError> {
        let mut normalized = base_url.trim_end_matches('/').to_owned();
        normalized.push('/');
        let base_url = Url::parse(&normalized).map_err(|e| ExplorerError::UrlParse {
            context: "Failed to parse Sourcify base url",
            source: e,
        })?;
        Ok(Self {
            network,
            base_url,
            http,
        })
    }

    /// Returns the normalized server URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the verified contract record for `address`.
    ///
    /// Returns `Ok(None)` if Sourcify has no match for the address.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError`] on transport failure, an unexpected status or
    /// an undecodable body.
    #[tracing::instrument(name = "sourcify.contract", skip(self), fields(network = %self.network), err)]
    pub async fn get_contract_metadata(
        &self,
        address: Address,
    ) -> Result<Option<ContractMetadata>, ExplorerError> {
        let mut url = self
            .base_url
            .join(&format!(
                "v2/contract/{}/{}",
                self.network.chain_id(),
                address.to_checksum(None)
            ))
            .map_err(|e| ExplorerError::UrlParse {
                context: "Failed to construct v2/contract URL",
                source: e,
            })?;
        url.set_query(Some("fields=abi,compilation"));

        let response = http::send(self.http.get(url), CONTEXT).await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::trace!("Contract not verified on Sourcify");
            return Ok(None);
        }
        let body: ContractResponse = http::read_json(response, CONTEXT).await?;

        let Some(match_kind) = body.match_kind else {
            return Ok(None);
        };
        Ok(Some(ContractMetadata {
            name: body
                .compilation
                .and_then(|c| c.name)
                .filter(|n| !n.is_empty()),
            abi: body.abi,
            source_available: true,
            partial_match: match_kind == MatchKind::Match,
        }))
    }
}

impl ProviderClient for SourcifyClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Sourcify
    }

    fn network(&self) -> Network {
        self.network
    }

    fn fetch(&self, address: Address) -> BoxFuture<'_, FetchResult> {
        Box::pin(async move { Ok(self.get_contract_metadata(address).await?) })
    }
}
