//! Contract metadata value object.

use alloy_json_abi::JsonAbi;
use serde::{Deserialize, Serialize};

/// Human-readable metadata for a deployed contract.
///
/// Produced by metadata providers or taken from the override table, and handed
/// to callers by value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractMetadata {
    /// Contract name as published by the explorer (e.g., `"GnosisSafeProxy"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contract ABI, if published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<JsonAbi>,

    /// Whether verified source code is available from the provider.
    #[serde(default)]
    pub source_available: bool,

    /// Whether the verification only partially matched the deployed bytecode
    /// (Sourcify "match" as opposed to "exact_match").
    #[serde(default)]
    pub partial_match: bool,
}

impl ContractMetadata {
    /// Creates metadata with a name and ABI and verified source.
    #[must_use]
    pub fn new(name: impl Into<String>, abi: JsonAbi) -> Self {
        Self {
            name: Some(name.into()),
            abi: Some(abi),
            source_available: true,
            partial_match: false,
        }
    }

    /// Sets the partial-match flag.
    #[must_use]
    pub const fn with_partial_match(mut self, partial_match: bool) -> Self {
        self.partial_match = partial_match;
        self
    }

    /// Returns `true` if the value carries no usable information: no name, no
    /// ABI items and no source.
    ///
    /// Empty values are treated like absent ones when they appear in the
    /// override table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let no_name = self.name.as_deref().is_none_or(str::is_empty);
        let no_abi = self.abi.as_ref().is_none_or(JsonAbi::is_empty);
        no_name && no_abi && !self.source_available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer_abi() -> JsonAbi {
        serde_json::from_str(
            r#"[{"type":"function","name":"transfer","inputs":[{"name":"to","type":"address"},{"name":"amount","type":"uint256"}],"outputs":[{"name":"","type":"bool"}],"stateMutability":"nonpayable"}]"#,
        )
        .unwrap()
    }

    #[test]
    fn default_is_empty() {
        assert!(ContractMetadata::default().is_empty());
    }

    #[test]
    fn empty_name_and_abi_is_empty() {
        let metadata = ContractMetadata {
            name: Some(String::new()),
            abi: Some(JsonAbi::new()),
            ..ContractMetadata::default()
        };
        assert!(metadata.is_empty());
    }

    #[test]
    fn any_field_makes_it_non_empty() {
        assert!(!ContractMetadata::new("Token", transfer_abi()).is_empty());
        let name_only = ContractMetadata {
            name: Some("Token".into()),
            ..ContractMetadata::default()
        };
        assert!(!name_only.is_empty());
        let source_only = ContractMetadata {
            source_available: true,
            ..ContractMetadata::default()
        };
        assert!(!source_only.is_empty());
    }

    #[test]
    fn serializes_camel_case_and_skips_missing() {
        let metadata = ContractMetadata {
            name: Some("Token".into()),
            ..ContractMetadata::default()
        };
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Token", "sourceAvailable": false, "partialMatch": false})
        );
    }
}
