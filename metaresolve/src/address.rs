//! Contract address parsing at the resolver boundary.
//!
//! Addresses must be 20-byte hex strings in EIP-55 mixed-case checksum form.
//! Lower-case or otherwise non-checksummed input is rejected rather than
//! silently normalized, so a typo never turns into a lookup for a different
//! contract.

use alloy_primitives::{Address, AddressError};

/// Error returned when a string is not a valid checksummed contract address.
#[derive(Debug, thiserror::Error)]
#[error("Invalid contract address {input}: {source}")]
pub struct InvalidAddressError {
    input: String,
    #[source]
    source: AddressError,
}

impl InvalidAddressError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parses a `0x`-prefixed EIP-55 checksummed address.
///
/// # Errors
///
/// Returns [`InvalidAddressError`] if the input lacks the prefix, has the wrong length, is not
/// hex, or does not match its EIP-55 checksum.
pub fn parse_checksummed(input: &str) -> Result<Address, InvalidAddressError> {
    Address::parse_checksummed(input, None).map_err(|source| InvalidAddressError {
        input: input.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const ROUTER: Address = address!("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");

    fn flip_first_letter(s: &str) -> String {
        let mut flipped = false;
        s.char_indices()
            .map(|(i, c)| {
                if !flipped && i > 1 && c.is_ascii_alphabetic() {
                    flipped = true;
                    if c.is_ascii_lowercase() {
                        c.to_ascii_uppercase()
                    } else {
                        c.to_ascii_lowercase()
                    }
                } else {
                    c
                }
            })
            .collect()
    }

    #[test]
    fn accepts_checksummed_address() {
        let input = ROUTER.to_checksum(None);
        assert_eq!(parse_checksummed(&input).unwrap(), ROUTER);
    }

    #[test]
    fn rejects_wrong_checksum() {
        let input = flip_first_letter(&ROUTER.to_checksum(None));
        let err = parse_checksummed(&input).unwrap_err();
        assert_eq!(err.input(), input);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(parse_checksummed("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeA").is_err());
        assert!(parse_checksummed("").is_err());
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        let checksummed = ROUTER.to_checksum(None);
        assert!(parse_checksummed(&format!("  {checksummed}\n")).is_err());
        assert!(parse_checksummed(&format!("{checksummed} ")).is_err());
    }

    #[test]
    fn rejects_non_hex() {
        assert!(parse_checksummed("0xZZAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").is_err());
    }
}
