//! Typed failures for the ORCID REST API.
//!
//! A failed registry response is classified into an [`HttpError`] carrying
//! the status, the registry's error entries, their codes and messages, and a
//! readable summary. Callers branch on [`ErrorKind`] instead of parsing
//! bodies themselves.

pub mod blocking;
mod classify;
mod client;
mod errors;
mod response;
pub use self::classify::ApiErrorEntry;
pub use self::client::Client;
pub use self::errors::{Error, ErrorKind, HttpError};
pub use self::response::{reason_phrase, BufferedResponse, FailedResponse};
