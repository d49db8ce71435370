//! Error types for the API client.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::classify::ApiErrorEntry;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable response).
    #[error("Request failed")]
    RequestFailed,
    /// The registry answered with a non-success status.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl Error {
    /// The failure category, if the registry answered at all.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::RequestFailed => None,
            Self::Http(e) => Some(e.kind()),
        }
    }

    /// The HTTP status the registry answered with, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed => None,
            Self::Http(e) => Some(e.status()),
        }
    }
}

/// Category of a failed response, one per relevant HTTP status group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// HTTP 400.
    BadRequest,
    /// HTTP 401.
    Unauthorized,
    /// HTTP 403.
    Forbidden,
    /// HTTP 404.
    NotFound,
    /// HTTP 429.
    TooManyRequests,
    /// Any 5xx status.
    InternalServerError,
    /// Any other non-success status.
    Other,
}

impl ErrorKind {
    pub fn for_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::TooManyRequests,
            500..=599 => Self::InternalServerError,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BadRequest => "bad request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not found",
            Self::TooManyRequests => "too many requests",
            Self::InternalServerError => "internal server error",
            Self::Other => "http error",
        };
        f.write_str(name)
    }
}

/// A failed registry response, classified.
///
/// Built once from the response through [`HttpError::new`] or
/// [`HttpError::from_response`] and never modified afterwards. The display
/// text is the composed summary: the status line followed by one line per
/// registry error entry.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Serialize)]
#[error("{summary}")]
pub struct HttpError {
    pub(crate) kind: ErrorKind,
    pub(crate) status: u16,
    pub(crate) reason: String,
    pub(crate) api_errors: Vec<ApiErrorEntry>,
    pub(crate) api_codes: Vec<Value>,
    pub(crate) api_messages: Vec<String>,
    pub(crate) summary: String,
}

impl HttpError {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Registry error entries in the order the body listed them.
    pub fn api_errors(&self) -> &[ApiErrorEntry] {
        &self.api_errors
    }

    /// Codes of the entries that carried one, as the registry sent them.
    pub fn api_codes(&self) -> &[Value] {
        &self.api_codes
    }

    /// Messages of the entries that carried one, or the body's `detail`.
    pub fn api_messages(&self) -> &[String] {
        &self.api_messages
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}
