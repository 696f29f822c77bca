//! Explorer client errors.
//!
//! [`ExplorerError`] describes a failed request with the context in which it
//! failed; it is folded into [`ProviderError`] at the `ProviderClient`
//! boundary. [`ConfigurationError`] is what a client constructor returns when
//! it cannot be built for a network.

use metaresolve::{Network, ProviderError};
use reqwest::StatusCode;

/// Errors that can occur while talking to an explorer API.
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    /// URL construction error.
    #[error("URL parse error: {context}: {source}")]
    UrlParse {
        /// Human-readable context.
        context: &'static str,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },
    /// HTTP transport error, timeouts included.
    #[error("HTTP error: {context}: {source}")]
    Http {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// JSON deserialization error.
    #[error("Failed to deserialize JSON: {context}: {source}")]
    JsonDeserialization {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// Unexpected HTTP status code.
    #[error("Unexpected HTTP status {status}: {context}: {body}")]
    HttpStatus {
        /// Human-readable context.
        context: &'static str,
        /// The HTTP status code.
        status: StatusCode,
        /// The response body.
        body: String,
    },
    /// Failed to read response body.
    #[error("Failed to read response body as text: {context}: {source}")]
    ResponseBodyRead {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// The response was well-formed JSON but not in the expected shape.
    #[error("Malformed response: {context}: {message}")]
    MalformedResponse {
        /// Human-readable context.
        context: &'static str,
        /// What was wrong with it.
        message: String,
    },
    /// The explorer refused the request (rate limit, bad API key, query error).
    #[error("Request rejected: {context}: {message}")]
    Rejected {
        /// Human-readable context.
        context: &'static str,
        /// Message reported by the explorer.
        message: String,
    },
}

impl ExplorerError {
    pub(crate) fn malformed(context: &'static str, message: impl ToString) -> Self {
        Self::MalformedResponse {
            context,
            message: message.to_string(),
        }
    }
}

impl From<ExplorerError> for ProviderError {
    fn from(err: ExplorerError) -> Self {
        match err {
            ExplorerError::HttpStatus { status, body, .. } => Self::HttpStatus {
                status: status.as_u16(),
                body,
            },
            ExplorerError::Rejected { message, .. } => Self::Rejected(message),
            ExplorerError::JsonDeserialization { .. } | ExplorerError::MalformedResponse { .. } => {
                Self::MalformedResponse(err.to_string())
            }
            ExplorerError::UrlParse { .. }
            | ExplorerError::Http { .. }
            | ExplorerError::ResponseBodyRead { .. } => Self::transport(err),
        }
    }
}

/// Reasons a client cannot be built for a network.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// No endpoint is known for the network.
    #[error("{network} is not supported")]
    UnsupportedNetwork {
        /// The requested network.
        network: Network,
    },
    /// The configured endpoint is not a valid URL.
    #[error("Invalid endpoint URL {url}: {source}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },
    /// The shared HTTP client could not be created.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl ConfigurationError {
    pub(crate) fn parse_url(url: &str) -> Result<url::Url, Self> {
        url::Url::parse(url).map_err(|source| Self::InvalidUrl {
            url: url.to_owned(),
            source,
        })
    }
}
