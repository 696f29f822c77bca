//! Explorer configuration.
//!
//! Everything here has a working default: the built-in endpoint tables, the
//! public Sourcify server and no API key. Endpoint maps are keyed by CAIP-2
//! identifiers (`eip155:100`) and add to or replace built-in entries.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::time::Duration;

use metaresolve::ChainId;
use metaresolve::networks::parse_caip2;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::endpoints::{EndpointTable, SOURCIFY_CHAINS};
use crate::sourcify::DEFAULT_SOURCIFY_URL;

/// Settings for the explorer clients built by
/// [`ExplorerFactory`](crate::ExplorerFactory).
#[derive(Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// API key sent to Etherscan-family explorers.
    #[serde(default)]
    pub etherscan_api_key: Option<String>,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Sourcify server base URL.
    #[serde(default = "default_sourcify_url")]
    pub sourcify_url: String,

    /// Chains to query on Sourcify in addition to the built-in list.
    #[serde(default)]
    pub sourcify_chains: Vec<ChainId>,

    /// Etherscan-family API URLs keyed by CAIP-2 network.
    #[serde(default)]
    pub etherscan_endpoints: HashMap<String, Url>,

    /// Blockscout GraphQL URLs keyed by CAIP-2 network.
    #[serde(default)]
    pub blockscout_endpoints: HashMap<String, Url>,
}

const fn default_request_timeout_secs() -> u64 {
    10
}

fn default_sourcify_url() -> String {
    DEFAULT_SOURCIFY_URL.to_owned()
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            etherscan_api_key: None,
            request_timeout_secs: default_request_timeout_secs(),
            sourcify_url: default_sourcify_url(),
            sourcify_chains: Vec::new(),
            etherscan_endpoints: HashMap::new(),
            blockscout_endpoints: HashMap::new(),
        }
    }
}

impl fmt::Debug for ExplorerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExplorerConfig")
            .field(
                "etherscan_api_key",
                &self.etherscan_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("sourcify_url", &self.sourcify_url)
            .field("sourcify_chains", &self.sourcify_chains)
            .field("etherscan_endpoints", &self.etherscan_endpoints)
            .field("blockscout_endpoints", &self.blockscout_endpoints)
            .finish()
    }
}

impl ExplorerConfig {
    /// Returns the per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Builder-style method: sets the Etherscan API key.
    #[must_use]
    pub fn with_etherscan_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.etherscan_api_key = Some(api_key.into());
        self
    }

    /// The built-in Etherscan table with configured entries applied.
    #[must_use]
    pub fn etherscan_table(&self) -> EndpointTable {
        merge(EndpointTable::etherscan(), &self.etherscan_endpoints)
    }

    /// The built-in Blockscout table with configured entries applied.
    #[must_use]
    pub fn blockscout_table(&self) -> EndpointTable {
        merge(EndpointTable::blockscout(), &self.blockscout_endpoints)
    }

    /// Chains to query on Sourcify.
    #[must_use]
    pub fn sourcify_chain_set(&self) -> HashSet<ChainId> {
        SOURCIFY_CHAINS
            .iter()
            .chain(&self.sourcify_chains)
            .copied()
            .collect()
    }
}

fn merge(mut table: EndpointTable, extra: &HashMap<String, Url>) -> EndpointTable {
    for (network, url) in extra {
        if let Some(chain_id) = parse_caip2(network) {
            table.insert(chain_id, url.as_str());
        } else {
            tracing::warn!(network = %network, url = %url, "Skipping endpoint with invalid CAIP-2 network");
        }
    }
    table
}
