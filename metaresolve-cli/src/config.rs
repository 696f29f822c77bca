//! Command-line configuration file.
//!
//! Loads a TOML file with support for environment variable expansion in the
//! raw text. Variables use `$VAR` or `${VAR}` syntax; unresolved ones are left
//! untouched.
//!
//! # Example Configuration
//!
//! ```toml
//! network = "eip155:100"
//! rpc_url = "https://rpc.gnosischain.com"
//!
//! [explorers]
//! etherscan_api_key = "$ETHERSCAN_API_KEY"
//! request_timeout_secs = 5
//!
//! [explorers.blockscout_endpoints]
//! "eip155:31337" = "http://localhost:4000/api/v1/graphql"
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG`: path to the configuration file (default: `metaresolve.toml`)
//! - `ETHERSCAN_API_KEY`: overrides `explorers.etherscan_api_key`

use std::path::{Path, PathBuf};

use metaresolve::Network;
use metaresolve_explorers::ExplorerConfig;
use serde::{Deserialize, Serialize};

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = "metaresolve.toml";

/// Errors raised while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or does not match the schema.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// JSON-RPC endpoint used to detect the chain ID.
    #[serde(default)]
    pub rpc_url: Option<String>,

    /// Network to resolve on, as CAIP-2 (`eip155:100`), chain ID or name.
    #[serde(default)]
    pub network: Option<Network>,

    /// Explorer client settings.
    #[serde(default)]
    pub explorers: ExplorerConfig,
}

impl CliConfig {
    /// Loads configuration from the path in `CONFIG`, falling back to
    /// [`DEFAULT_CONFIG_PATH`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
        Self::load_from(&path)
    }

    /// Loads configuration from a specific path. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = if path.exists() {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_owned(),
                source,
            })?
        } else {
            tracing::debug!(path = %path.display(), "No configuration file, using defaults");
            String::new()
        };
        Self::parse(&content, |name| std::env::var(name).ok()).map_err(|source| {
            ConfigError::Parse {
                path: path.to_owned(),
                source,
            }
        })
    }

    /// Parses TOML text, expanding variables and applying overrides through `lookup`.
    fn parse<F>(content: &str, lookup: F) -> Result<Self, toml::de::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let expanded = expand_vars(content, &lookup);
        let mut config: Self = toml::from_str(&expanded)?;

        if let Some(key) = lookup("ETHERSCAN_API_KEY").filter(|k| !k.is_empty()) {
            config.explorers.etherscan_api_key = Some(key);
        }
        // An unexpanded reference means the variable is not set.
        if config
            .explorers
            .etherscan_api_key
            .as_deref()
            .is_some_and(|k| k.is_empty() || k.starts_with('$'))
        {
            tracing::warn!("Ignoring unresolved etherscan_api_key");
            config.explorers.etherscan_api_key = None;
        }

        Ok(config)
    }
}

/// Expands `$VAR` and `${VAR}` patterns using `lookup`.
///
/// Unresolved variables are left as-is.
fn expand_vars<F>(input: &str, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        let braced = chars.next_if_eq(&'{').is_some();
        let mut var_name = String::new();
        let mut closed = false;
        while let Some(&c) = chars.peek() {
            if braced && c == '}' {
                chars.next();
                closed = true;
                break;
            }
            if !c.is_ascii_alphanumeric() && c != '_' {
                break;
            }
            var_name.push(c);
            chars.next();
        }

        match lookup(&var_name) {
            Some(value) if !var_name.is_empty() => result.push_str(&value),
            _ => {
                result.push('$');
                if braced {
                    result.push('{');
                }
                result.push_str(&var_name);
                if closed {
                    result.push('}');
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn expands_plain_and_braced_variables() {
        let lookup = env(&[("HOST", "rpc.example"), ("PORT", "8545")]);
        assert_eq!(
            expand_vars("https://$HOST:${PORT}/v1", &lookup),
            "https://rpc.example:8545/v1"
        );
    }

    #[test]
    fn leaves_unresolved_variables() {
        let lookup = env(&[]);
        assert_eq!(expand_vars("key = \"${MISSING}\"", &lookup), "key = \"${MISSING}\"");
        assert_eq!(expand_vars("cost: $5 or $", &lookup), "cost: $5 or $");
    }

    #[test]
    fn empty_file_is_default() {
        let config = CliConfig::parse("", env(&[])).unwrap();
        assert!(config.network.is_none());
        assert!(config.rpc_url.is_none());
        assert_eq!(config.explorers.request_timeout_secs, 10);
    }

    #[test]
    fn parses_full_document() {
        let toml = r#"
            network = "eip155:100"
            rpc_url = "https://rpc.gnosischain.com"

            [explorers]
            etherscan_api_key = "$SCAN_KEY"
            request_timeout_secs = 3
            sourcify_chains = [31337]

            [explorers.blockscout_endpoints]
            "eip155:31337" = "http://localhost:4000/api/v1/graphql"
        "#;
        let config = CliConfig::parse(toml, env(&[("SCAN_KEY", "abc123")])).unwrap();

        assert_eq!(config.network, Some(Network::new(100)));
        assert_eq!(config.rpc_url.as_deref(), Some("https://rpc.gnosischain.com"));
        assert_eq!(config.explorers.etherscan_api_key.as_deref(), Some("abc123"));
        assert_eq!(config.explorers.request_timeout_secs, 3);
        assert_eq!(
            config.explorers.blockscout_table().get(31337),
            Some("http://localhost:4000/api/v1/graphql")
        );
    }

    #[test]
    fn environment_key_overrides_file() {
        let toml = "[explorers]\netherscan_api_key = \"from-file\"\n";
        let config = CliConfig::parse(toml, env(&[("ETHERSCAN_API_KEY", "from-env")])).unwrap();
        assert_eq!(config.explorers.etherscan_api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn unresolved_key_is_dropped() {
        let toml = "[explorers]\netherscan_api_key = \"$NOT_SET\"\n";
        let config = CliConfig::parse(toml, env(&[])).unwrap();
        assert!(config.explorers.etherscan_api_key.is_none());
    }

    #[test]
    fn network_accepts_names() {
        let config = CliConfig::parse("network = \"polygon\"\n", env(&[])).unwrap();
        assert_eq!(config.network, Some(Network::new(137)));
    }

    #[test]
    fn invalid_network_is_parse_error() {
        assert!(CliConfig::parse("network = \"eip155:abc\"\n", env(&[])).is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("metaresolve-missing-config.toml");
        let config = CliConfig::load_from(&path).unwrap();
        assert!(config.network.is_none());
    }
}
