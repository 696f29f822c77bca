//! Request plumbing shared by the explorer clients.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{ConfigurationError, ExplorerError};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the pooled HTTP client shared by every explorer client.
///
/// # Errors
///
/// Returns [`ConfigurationError::HttpClient`] if the TLS backend cannot be initialized.
pub fn build_client(timeout: Duration) -> Result<Client, ConfigurationError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(ConfigurationError::HttpClient)
}

/// Sends a request, mapping transport failures to [`ExplorerError::Http`].
pub(crate) async fn send(
    request: RequestBuilder,
    context: &'static str,
) -> Result<Response, ExplorerError> {
    request
        .send()
        .await
        .map_err(|e| ExplorerError::Http { context, source: e })
}

/// Decodes a `200 OK` JSON body; any other status becomes [`ExplorerError::HttpStatus`].
pub(crate) async fn read_json<R>(response: Response, context: &'static str) -> Result<R, ExplorerError>
where
    R: DeserializeOwned,
{
    let status = response.status();
    tracing::trace!(context, status = %status, "Explorer responded");
    if status == StatusCode::OK {
        response
            .json::<R>()
            .await
            .map_err(|e| ExplorerError::JsonDeserialization { context, source: e })
    } else {
        let body = response
            .text()
            .await
            .map_err(|e| ExplorerError::ResponseBodyRead { context, source: e })?;
        Err(ExplorerError::HttpStatus {
            context,
            status,
            body,
        })
    }
}
