//! Async HTTP client for the ORCID public API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{response::BufferedResponse, Error, HttpError};

pub(crate) const DEFAULT_BASE_URL: &str = "https://pub.orcid.org/v3.0";
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Async HTTP client for the ORCID public API.
///
/// Non-success responses are classified into an [`HttpError`] and returned
/// as [`Error::Http`]. Nothing is retried here.
pub struct Client {
    /// Base URL for the API. Defaults to `https://pub.orcid.org/v3.0`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the public ORCID API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    /// Fetches `path` and decodes the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = build_url(&self.base_api_url, path)?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let success = resp.status().is_success();
        let resp = BufferedResponse::from_async(resp).await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;
        decode(resp, success)
    }
}

pub(crate) fn build_url(base: &str, path: &str) -> Result<Url, Error> {
    let joined = format!("{}/{}", base, path.trim_start_matches('/'));
    Url::parse(&joined).map_err(|e| {
        tracing::error!("Invalid URL constructed: {}", e);
        Error::RequestFailed
    })
}

/// Shared tail of both clients: classify failures, decode successes.
pub(crate) fn decode<T: DeserializeOwned>(resp: BufferedResponse, success: bool) -> Result<T, Error> {
    if !success {
        let error = HttpError::from_response(&resp, None);
        tracing::error!("Request failed with {} ({})", error.status(), error.kind());
        return Err(error.into());
    }

    serde_json::from_slice::<T>(resp.body()).map_err(|e| {
        tracing::error!("Failed to parse resource: {}", e);
        Error::RequestFailed
    })
}
