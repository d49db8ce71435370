//! Blocking counterpart of [`crate::Client`].
//!
//! Must not be used from inside an async runtime; reqwest's blocking client
//! panics there.

use serde::de::DeserializeOwned;

use crate::client::{build_url, decode, DEFAULT_BASE_URL, REQUEST_TIMEOUT};
use crate::{response::BufferedResponse, Error};

/// Blocking HTTP client for the ORCID public API.
pub struct Client {
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches `path` and decodes the JSON body.
    pub fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = build_url(&self.base_api_url, path)?;
        let client = reqwest::blocking::Client::builder()
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
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let success = resp.status().is_success();
        let resp = BufferedResponse::from_blocking(resp).map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;
        decode(resp, success)
    }
}
