//! The resolution service.
//!
//! [`ContractMetadataResolver`] is built once per network and then only read:
//! the provider list, its order and the override table are fixed at
//! construction, so a single instance can serve concurrent lookups without
//! locking.
//!
//! A lookup goes through three steps:
//!
//! 1. the override table, with no network I/O;
//! 2. each enabled provider in precedence order (Sourcify, Etherscan,
//!    Blockscout), stopping at the first one that returns metadata. A failing
//!    provider is logged and skipped;
//! 3. `None` when nobody knows the contract.

use std::fmt;
use std::sync::Arc;

use alloy_primitives::Address;

use crate::address::parse_checksummed;
use crate::error::ResolveError;
use crate::metadata::ContractMetadata;
use crate::networks::{Network, NetworkSource};
use crate::overrides::OverrideRegistry;
use crate::provider::{ProviderClient, ProviderFactory, ProviderKind};

/// Resolves contract metadata for one network from overrides and providers.
pub struct ContractMetadataResolver {
    network: Network,
    providers: Vec<Box<dyn ProviderClient>>,
    overrides: Arc<OverrideRegistry>,
}

impl fmt::Debug for ContractMetadataResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let providers: Vec<ProviderKind> = self.enabled_providers().collect();
        f.debug_struct("ContractMetadataResolver")
            .field("network", &self.network)
            .field("providers", &providers)
            .field("overrides_count", &self.overrides.len())
            .finish()
    }
}

impl ContractMetadataResolver {
    /// Builds a resolver for the network reported by `source`.
    ///
    /// Every [`ProviderKind`] is requested from `factory`; kinds the factory
    /// cannot build are dropped, the rest are kept in precedence order. A
    /// resolver without providers is valid and only serves overrides.
    ///
    /// The built-in override table is installed; use [`Self::with_overrides`]
    /// to replace it.
    pub fn new<S, F>(source: &S, factory: &F) -> Self
    where
        S: NetworkSource + ?Sized,
        F: ProviderFactory + ?Sized,
    {
        let network = source.network();
        let providers = ProviderKind::PRECEDENCE
            .into_iter()
            .filter_map(|kind| factory.build(kind, network))
            .collect();
        Self::from_providers(network, providers)
    }

    /// Builds a resolver from already constructed providers.
    ///
    /// `providers` is consulted in the given order.
    #[must_use]
    pub fn from_providers(network: Network, providers: Vec<Box<dyn ProviderClient>>) -> Self {
        for provider in &providers {
            if provider.network() != network {
                tracing::warn!(
                    network = %network,
                    provider = %provider.kind(),
                    provider_network = %provider.network(),
                    "Provider is bound to a different network than the resolver"
                );
            }
        }
        let resolver = Self {
            network,
            providers,
            overrides: Arc::new(OverrideRegistry::builtin()),
        };
        tracing::info!(
            network = %network,
            providers = ?resolver.enabled_providers().collect::<Vec<_>>(),
            "Contract metadata resolver ready"
        );
        resolver
    }

    /// Replaces the override table.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Arc<OverrideRegistry>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Returns the network this resolver is bound to.
    #[must_use]
    pub const fn network(&self) -> Network {
        self.network
    }

    /// Returns the enabled provider kinds, in the order they are consulted.
    pub fn enabled_providers(&self) -> impl Iterator<Item = ProviderKind> + '_ {
        self.providers.iter().map(|p| p.kind())
    }

    /// Returns the override table in use.
    #[must_use]
    pub fn overrides(&self) -> &OverrideRegistry {
        &self.overrides
    }

    /// Resolves metadata for a checksummed address string.
    ///
    /// `Ok(None)` means no override exists and no provider has metadata for
    /// the contract.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidAddress`] if `address` is not a valid
    /// EIP-55 checksummed address; no provider is contacted in that case.
    pub async fn resolve(&self, address: &str) -> Result<Option<ContractMetadata>, ResolveError> {
        let address = parse_checksummed(address)?;
        Ok(self.resolve_address(address).await)
    }

    /// Resolves metadata for an already validated address.
    #[tracing::instrument(level = "debug", skip(self), fields(network = %self.network))]
    pub async fn resolve_address(&self, address: Address) -> Option<ContractMetadata> {
        if let Some(metadata) = self.overrides.get(&address) {
            tracing::trace!("Serving metadata from override table");
            return Some(metadata.clone());
        }

        for provider in &self.providers {
            match provider.fetch(address).await {
                Ok(Some(metadata)) => {
                    tracing::debug!(provider = %provider.kind(), "Metadata found");
                    return Some(metadata);
                }
                Ok(None) => {
                    tracing::trace!(provider = %provider.kind(), "No metadata from provider");
                }
                Err(err) => {
                    tracing::debug!(
                        contract = %address,
                        network = %self.network.name(),
                        provider = %provider.kind(),
                        error = %err,
                        "Cannot get metadata for contract"
                    );
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::networks::GNOSIS;
    use crate::overrides::{BUTTER_ROUTER_V2, butter_router_v2_metadata};
    use crate::provider::{BoxFuture, FetchResult, ProviderError};
    use alloy_json_abi::JsonAbi;
    use alloy_primitives::address;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const CONTRACT: Address = address!("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");

    #[derive(Debug, Clone)]
    enum Answer {
        Found(ContractMetadata),
        NotFound,
        Fail,
    }

    #[derive(Debug)]
    struct MockProvider {
        kind: ProviderKind,
        network: Network,
        answer: Answer,
        calls: Arc<AtomicUsize>,
    }

    impl ProviderClient for MockProvider {
        fn kind(&self) -> ProviderKind {
            self.kind
        }

        fn network(&self) -> Network {
            self.network
        }

        fn fetch(&self, _address: Address) -> BoxFuture<'_, FetchResult> {
            Box::pin(async move {
                self.calls.fetch_add(1, Ordering::SeqCst);
                match &self.answer {
                    Answer::Found(metadata) => Ok(Some(metadata.clone())),
                    Answer::NotFound => Ok(None),
                    Answer::Fail => Err(ProviderError::transport(std::io::Error::new(
                        std::io::ErrorKind::TimedOut,
                        "timed out",
                    ))),
                }
            })
        }
    }

    /// Factory handing out mock providers for the kinds it was given.
    #[derive(Default)]
    struct MockFactory {
        answers: HashMap<ProviderKind, Answer>,
        calls: HashMap<ProviderKind, Arc<AtomicUsize>>,
    }

    impl MockFactory {
        fn with(mut self, kind: ProviderKind, answer: Answer) -> Self {
            self.answers.insert(kind, answer);
            self.calls.insert(kind, Arc::new(AtomicUsize::new(0)));
            self
        }

        fn calls(&self, kind: ProviderKind) -> usize {
            self.calls
                .get(&kind)
                .map_or(0, |c| c.load(Ordering::SeqCst))
        }

        fn make(&self, kind: ProviderKind, network: Network) -> Option<Box<dyn ProviderClient>> {
            let answer = self.answers.get(&kind)?.clone();
            Some(Box::new(MockProvider {
                kind,
                network,
                answer,
                calls: Arc::clone(&self.calls[&kind]),
            }))
        }
    }

    impl ProviderFactory for MockFactory {
        fn build_etherscan(&self, network: Network) -> Option<Box<dyn ProviderClient>> {
            self.make(ProviderKind::Etherscan, network)
        }

        fn build_blockscout(&self, network: Network) -> Option<Box<dyn ProviderClient>> {
            self.make(ProviderKind::Blockscout, network)
        }

        fn build_sourcify(&self, network: Network) -> Option<Box<dyn ProviderClient>> {
            self.make(ProviderKind::Sourcify, network)
        }
    }

    fn named(name: &str) -> ContractMetadata {
        ContractMetadata {
            name: Some(name.to_owned()),
            abi: Some(JsonAbi::new()),
            source_available: true,
            partial_match: false,
        }
    }

    fn gnosis() -> Network {
        Network::new(GNOSIS)
    }

    fn checksummed(address: Address) -> String {
        address.to_checksum(None)
    }

    #[tokio::test]
    async fn providers_are_kept_in_precedence_order() {
        let factory = MockFactory::default()
            .with(ProviderKind::Blockscout, Answer::NotFound)
            .with(ProviderKind::Etherscan, Answer::NotFound)
            .with(ProviderKind::Sourcify, Answer::NotFound);
        let resolver = ContractMetadataResolver::new(&gnosis(), &factory);
        assert_eq!(
            resolver.enabled_providers().collect::<Vec<_>>(),
            ProviderKind::PRECEDENCE
        );
        assert_eq!(resolver.network(), gnosis());
    }

    #[tokio::test]
    async fn override_wins_without_provider_calls() {
        let factory = MockFactory::default()
            .with(ProviderKind::Sourcify, Answer::Found(named("Sourcify")))
            .with(ProviderKind::Etherscan, Answer::Found(named("Etherscan")))
            .with(ProviderKind::Blockscout, Answer::Found(named("Blockscout")));
        let resolver = ContractMetadataResolver::new(&gnosis(), &factory);

        let metadata = resolver
            .resolve(&checksummed(BUTTER_ROUTER_V2))
            .await
            .unwrap();

        assert_eq!(metadata, Some(butter_router_v2_metadata()));
        for kind in ProviderKind::PRECEDENCE {
            assert_eq!(factory.calls(kind), 0, "{kind} must not be called");
        }
    }

    #[tokio::test]
    async fn override_works_without_any_provider() {
        let resolver = ContractMetadataResolver::new(&gnosis(), &MockFactory::default());
        assert_eq!(resolver.enabled_providers().count(), 0);

        let hit = resolver.resolve_address(BUTTER_ROUTER_V2).await;
        assert_eq!(hit, Some(butter_router_v2_metadata()));
        assert_eq!(resolver.resolve_address(CONTRACT).await, None);
    }

    #[tokio::test]
    async fn empty_override_falls_through_to_providers() {
        let factory =
            MockFactory::default().with(ProviderKind::Etherscan, Answer::Found(named("Real")));
        let overrides = OverrideRegistry::new().with_entry(CONTRACT, ContractMetadata::default());
        let resolver = ContractMetadataResolver::new(&gnosis(), &factory)
            .with_overrides(Arc::new(overrides));

        let metadata = resolver.resolve_address(CONTRACT).await;

        assert_eq!(metadata, Some(named("Real")));
        assert_eq!(factory.calls(ProviderKind::Etherscan), 1);
    }

    #[tokio::test]
    async fn sourcify_success_short_circuits() {
        let factory = MockFactory::default()
            .with(ProviderKind::Sourcify, Answer::Found(named("Sourcify")))
            .with(ProviderKind::Etherscan, Answer::Found(named("Etherscan")))
            .with(ProviderKind::Blockscout, Answer::Found(named("Blockscout")));
        let resolver = ContractMetadataResolver::new(&gnosis(), &factory);

        let metadata = resolver.resolve(&checksummed(CONTRACT)).await.unwrap();

        assert_eq!(metadata, Some(named("Sourcify")));
        assert_eq!(factory.calls(ProviderKind::Sourcify), 1);
        assert_eq!(factory.calls(ProviderKind::Etherscan), 0);
        assert_eq!(factory.calls(ProviderKind::Blockscout), 0);
    }

    #[tokio::test]
    async fn transport_failure_falls_through_to_next_provider() {
        let factory = MockFactory::default()
            .with(ProviderKind::Sourcify, Answer::Fail)
            .with(ProviderKind::Etherscan, Answer::Found(named("Etherscan")))
            .with(ProviderKind::Blockscout, Answer::Found(named("Blockscout")));
        let resolver = ContractMetadataResolver::new(&gnosis(), &factory);

        let metadata = resolver.resolve(&checksummed(CONTRACT)).await.unwrap();

        assert_eq!(metadata, Some(named("Etherscan")));
        assert_eq!(factory.calls(ProviderKind::Sourcify), 1);
        assert_eq!(factory.calls(ProviderKind::Etherscan), 1);
        assert_eq!(factory.calls(ProviderKind::Blockscout), 0);
    }

    #[tokio::test]
    async fn exhausted_providers_yield_not_found() {
        let factory = MockFactory::default()
            .with(ProviderKind::Sourcify, Answer::Fail)
            .with(ProviderKind::Etherscan, Answer::NotFound)
            .with(ProviderKind::Blockscout, Answer::Fail);
        let resolver = ContractMetadataResolver::new(&gnosis(), &factory);

        let metadata = resolver.resolve(&checksummed(CONTRACT)).await.unwrap();

        assert_eq!(metadata, None);
        for kind in ProviderKind::PRECEDENCE {
            assert_eq!(factory.calls(kind), 1);
        }
    }

    #[tokio::test]
    async fn etherscan_miss_then_blockscout_hit() {
        let router = ContractMetadata {
            name: Some("Router".into()),
            abi: Some(
                serde_json::from_str(
                    r#"[{"type":"function","name":"swap","inputs":[],"outputs":[],"stateMutability":"nonpayable"}]"#,
                )
                .unwrap(),
            ),
            source_available: true,
            partial_match: false,
        };
        let factory = MockFactory::default()
            .with(ProviderKind::Etherscan, Answer::NotFound)
            .with(ProviderKind::Blockscout, Answer::Found(router.clone()));
        let resolver = ContractMetadataResolver::new(&gnosis(), &factory)
            .with_overrides(Arc::new(OverrideRegistry::new()));
        assert_eq!(
            resolver.enabled_providers().collect::<Vec<_>>(),
            vec![ProviderKind::Etherscan, ProviderKind::Blockscout]
        );

        let metadata = resolver.resolve(&checksummed(CONTRACT)).await.unwrap();

        assert_eq!(metadata, Some(router));
        assert_eq!(factory.calls(ProviderKind::Etherscan), 1);
        assert_eq!(factory.calls(ProviderKind::Blockscout), 1);
    }

    #[tokio::test]
    async fn malformed_address_is_rejected_without_provider_calls() {
        let factory = MockFactory::default()
            .with(ProviderKind::Sourcify, Answer::Found(named("Sourcify")))
            .with(ProviderKind::Etherscan, Answer::Found(named("Etherscan")));
        let resolver = ContractMetadataResolver::new(&gnosis(), &factory);

        let lowercase = checksummed(CONTRACT).to_lowercase();
        for input in ["0x1234", "not an address", lowercase.as_str()] {
            let err = resolver.resolve(input).await.unwrap_err();
            assert!(matches!(err, ResolveError::InvalidAddress(_)), "{input}");
        }
        assert_eq!(factory.calls(ProviderKind::Sourcify), 0);
        assert_eq!(factory.calls(ProviderKind::Etherscan), 0);
    }

    #[tokio::test]
    async fn concurrent_lookups_share_one_resolver() {
        let factory = MockFactory::default()
            .with(ProviderKind::Blockscout, Answer::Found(named("Blockscout")));
        let resolver = Arc::new(ContractMetadataResolver::new(&gnosis(), &factory));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let resolver = Arc::clone(&resolver);
                tokio::spawn(async move { resolver.resolve_address(CONTRACT).await })
            })
            .collect();
        for task in tasks {
            assert_eq!(task.await.unwrap(), Some(named("Blockscout")));
        }
        assert_eq!(factory.calls(ProviderKind::Blockscout), 8);
    }
}
