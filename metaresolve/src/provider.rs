//! Metadata provider abstraction.
//!
//! A [`ProviderClient`] wraps one external metadata API (an Etherscan-style
//! explorer, a Blockscout instance, Sourcify) bound to one [`Network`].
//! A [`ProviderFactory`] decides which of the three [`ProviderKind`]s can be
//! built for a network; unavailable kinds come back as `None`.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use alloy_primitives::Address;

use crate::metadata::ContractMetadata;
use crate::networks::Network;

/// Boxed error type carried by [`ProviderError::Transport`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A boxed, `Send` future, used to keep [`ProviderClient`] object-safe.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Result of a single provider lookup: `Ok(None)` means the provider answered
/// and has no metadata for the address.
pub type FetchResult = Result<Option<ContractMetadata>, ProviderError>;

/// The three families of metadata providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Sourcify, verifying sources against deployed bytecode.
    Sourcify,
    /// Etherscan and its API-compatible family of explorers.
    Etherscan,
    /// Blockscout explorers (GraphQL API).
    Blockscout,
}

impl ProviderKind {
    /// Every kind, in resolver precedence order.
    pub const PRECEDENCE: [Self; 3] = [Self::Sourcify, Self::Etherscan, Self::Blockscout];

    /// Returns the client name used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sourcify => "SourcifyClient",
            Self::Etherscan => "EtherscanClient",
            Self::Blockscout => "BlockscoutClient",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single provider lookup.
///
/// Every variant is transport/IO-class from the resolver's point of view: it
/// is logged and the next provider is tried.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Connection failure, timeout, or other transport error.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The provider answered with an unexpected HTTP status.
    #[error("unexpected HTTP status {status}: {body}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The response could not be interpreted.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The provider refused the request (rate limit, invalid API key, ...).
    #[error("request rejected: {0}")]
    Rejected(String),
}

impl ProviderError {
    /// Wraps any error as a transport failure.
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Self::Transport(err.into())
    }
}

/// A client for one external metadata API, bound to one network.
///
/// Implementations must be safe to share across concurrent lookups; any
/// connection handle they hold is pooled or created per call.
pub trait ProviderClient: Send + Sync + fmt::Debug {
    /// Returns which provider family this client belongs to.
    fn kind(&self) -> ProviderKind;

    /// Returns the network this client was built for.
    fn network(&self) -> Network;

    /// Fetches metadata for a contract.
    ///
    /// Returns `Ok(None)` when the provider has no metadata for the address
    /// (e.g., the contract is not verified).
    fn fetch(&self, address: Address) -> BoxFuture<'_, FetchResult>;
}

impl<T: ProviderClient + ?Sized> ProviderClient for Box<T> {
    fn kind(&self) -> ProviderKind {
        (**self).kind()
    }

    fn network(&self) -> Network {
        (**self).network()
    }

    fn fetch(&self, address: Address) -> BoxFuture<'_, FetchResult> {
        (**self).fetch(address)
    }
}

/// Builds provider clients for a network.
///
/// Construction is total: a kind that cannot be built for the network (no
/// endpoint, unsupported chain, broken configuration) is reported as `None`.
/// Implementations log why a kind is unavailable.
pub trait ProviderFactory {
    /// Builds an Etherscan-compatible client, if one is configured for `network`.
    fn build_etherscan(&self, network: Network) -> Option<Box<dyn ProviderClient>>;

    /// Builds a Blockscout client, if `network` has a known GraphQL endpoint.
    fn build_blockscout(&self, network: Network) -> Option<Box<dyn ProviderClient>>;

    /// Builds a Sourcify client, if Sourcify serves `network`.
    fn build_sourcify(&self, network: Network) -> Option<Box<dyn ProviderClient>>;

    /// Builds the client of the given kind.
    fn build(&self, kind: ProviderKind, network: Network) -> Option<Box<dyn ProviderClient>> {
        match kind {
            ProviderKind::Sourcify => self.build_sourcify(network),
            ProviderKind::Etherscan => self.build_etherscan(network),
            ProviderKind::Blockscout => self.build_blockscout(network),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_is_sourcify_etherscan_blockscout() {
        assert_eq!(
            ProviderKind::PRECEDENCE,
            [
                ProviderKind::Sourcify,
                ProviderKind::Etherscan,
                ProviderKind::Blockscout
            ]
        );
    }

    #[test]
    fn transport_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline elapsed");
        let err = ProviderError::transport(io);
        assert_eq!(err.to_string(), "transport error: deadline elapsed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
