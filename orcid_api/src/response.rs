//! Adapters over the responses of the async and blocking transports.

use reqwest::StatusCode;
use serde_json::Value;

/// A response the registry answered with, as seen by the classifier.
pub trait FailedResponse {
    fn status_code(&self) -> u16;

    fn reason(&self) -> &str;

    /// Decodes the body as JSON.
    fn json(&self) -> Result<Value, serde_json::Error>;
}

/// A response whose body has been read into memory.
///
/// Built from either transport so both feed the classifier the same way.
#[derive(Clone, Debug, PartialEq)]
pub struct BufferedResponse {
    status: u16,
    reason: String,
    body: Vec<u8>,
}

impl BufferedResponse {
    pub fn new(status: u16, reason: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            reason: reason.to_string(),
            body: body.into(),
        }
    }

    /// Reads the body of an async response.
    pub async fn from_async(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let body = response.bytes().await?;
        Ok(Self::from_parts(status, body.to_vec()))
    }

    /// Reads the body of a blocking response.
    pub fn from_blocking(response: reqwest::blocking::Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let body = response.bytes()?;
        Ok(Self::from_parts(status, body.to_vec()))
    }

    fn from_parts(status: StatusCode, body: Vec<u8>) -> Self {
        Self {
            status: status.as_u16(),
            reason: reason_phrase(status.as_u16()).to_string(),
            body,
        }
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl FailedResponse for BufferedResponse {
    fn status_code(&self) -> u16 {
        self.status
    }

    fn reason(&self) -> &str {
        &self.reason
    }

    fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Canonical reason phrase for a status code, `"Unknown"` when there is none.
pub fn reason_phrase(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown")
}
