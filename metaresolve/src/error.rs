//! Errors surfaced by [`ContractMetadataResolver::resolve`](crate::ContractMetadataResolver::resolve).
//!
//! Provider failures are absorbed by the resolver and never appear here; the
//! only way a resolution fails is bad input.

pub use crate::address::InvalidAddressError;

/// Error returned when a resolution could not be attempted.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The address is malformed or not EIP-55 checksummed.
    #[error("{0}")]
    InvalidAddress(#[from] InvalidAddressError),
}
