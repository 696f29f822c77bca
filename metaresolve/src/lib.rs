#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Smart-contract metadata resolution.
//!
//! Given a contract address on some network, this crate finds its
//! human-readable metadata (name, ABI, whether sources are verified) by asking
//! several independent explorer services in a fixed order and returning the
//! first usable answer.
//!
//! # Overview
//!
//! - [`ContractMetadataResolver`] is bound to one [`Network`]. It consults the
//!   [`OverrideRegistry`] first and then every enabled [`ProviderClient`] in
//!   precedence order: Sourcify, Etherscan, Blockscout.
//! - A [`ProviderFactory`] decides which providers exist for a network. Concrete
//!   HTTP clients live in the `metaresolve-explorers` crate.
//! - Provider failures never fail a lookup. Only malformed addresses are
//!   reported as errors; "no metadata" is `Ok(None)`.
//!
//! # Modules
//!
//! - [`address`] - Checksummed address parsing
//! - [`error`] - Resolution errors
//! - [`metadata`] - The [`ContractMetadata`] value object
//! - [`networks`] - Network identifiers and catalog
//! - [`overrides`] - Hand-curated metadata table
//! - [`provider`] - Provider client and factory traits
//! - [`resolver`] - The resolution service

pub mod address;
pub mod error;
pub mod metadata;
pub mod networks;
pub mod overrides;
pub mod provider;
pub mod resolver;

pub use error::ResolveError;
pub use metadata::ContractMetadata;
pub use networks::{ChainId, Network, NetworkSource};
pub use overrides::OverrideRegistry;
pub use provider::{ProviderClient, ProviderError, ProviderFactory, ProviderKind};
pub use resolver::ContractMetadataResolver;

pub use alloy_json_abi::JsonAbi;
pub use alloy_primitives::Address;
