//! Hand-curated metadata that bypasses every provider.
//!
//! The registry is filled once at startup and shared read-only (behind an
//! `Arc`) by every resolver. Entries whose metadata [`is_empty`] are kept but
//! never returned, so they behave exactly like missing entries.
//!
//! [`is_empty`]: ContractMetadata::is_empty

use std::collections::HashMap;
use std::sync::LazyLock;

use alloy_json_abi::JsonAbi;
use alloy_primitives::{Address, address};

use crate::metadata::ContractMetadata;

/// ButterRouterV2 cross-chain router.
pub const BUTTER_ROUTER_V2: Address = address!("EE030ec6F4307411607E55aCD08e628Ae6655B86");

/// Contract name reported for [`BUTTER_ROUTER_V2`].
pub const BUTTER_ROUTER_V2_NAME: &str = "ButterRouterV2";

static BUTTER_ROUTER_V2_ABI: LazyLock<JsonAbi> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../data/butter_router_v2.json"))
        .expect("bundled ButterRouterV2 ABI is valid JSON ABI")
});

/// Metadata served for [`BUTTER_ROUTER_V2`] without contacting any explorer.
#[must_use]
pub fn butter_router_v2_metadata() -> ContractMetadata {
    ContractMetadata::new(BUTTER_ROUTER_V2_NAME, BUTTER_ROUTER_V2_ABI.clone())
}

/// Static mapping from contract address to pre-known metadata.
#[derive(Debug, Clone, Default)]
pub struct OverrideRegistry {
    entries: HashMap<Address, ContractMetadata>,
}

impl OverrideRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates a registry holding the built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new().with_entry(BUTTER_ROUTER_V2, butter_router_v2_metadata())
    }

    /// Adds or replaces an entry, returning the previous metadata.
    pub fn insert(
        &mut self,
        address: Address,
        metadata: ContractMetadata,
    ) -> Option<ContractMetadata> {
        self.entries.insert(address, metadata)
    }

    /// Builder-style method: adds an entry and returns `self`.
    #[must_use]
    pub fn with_entry(mut self, address: Address, metadata: ContractMetadata) -> Self {
        self.insert(address, metadata);
        self
    }

    /// Returns the override for `address`, ignoring empty entries.
    #[must_use]
    pub fn get(&self, address: &Address) -> Option<&ContractMetadata> {
        self.entries.get(address).filter(|m| !m.is_empty())
    }

    /// Returns the number of stored entries, empty ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Address, ContractMetadata)> for OverrideRegistry {
    fn from_iter<I: IntoIterator<Item = (Address, ContractMetadata)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
