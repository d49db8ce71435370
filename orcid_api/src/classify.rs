//! Classification of failed registry responses.
//!
//! The registry reports failures in several body shapes: an `errors` array
//! of strings or `{code, message}` objects, a singular `error` field, or a
//! bare `detail` string. All of them are folded into one [`HttpError`].

use std::borrow::Cow;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{ErrorKind, HttpError};
use crate::response::FailedResponse;

/// One element of the registry's error list, kept verbatim.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiErrorEntry {
    /// A bare message string.
    Text(String),
    /// An object that may carry `code` and `message` fields.
    Structured(Map<String, Value>),
    /// Anything else the registry put in the list.
    Other(Value),
}

impl ApiErrorEntry {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text.clone()),
            Value::Object(fields) => Self::Structured(fields.clone()),
            other => Self::Other(other.clone()),
        }
    }

    /// The registry error code, verbatim, when the entry carries a `code`.
    pub fn code(&self) -> Option<&Value> {
        match self {
            Self::Structured(fields) => fields.get("code").filter(|code| !code.is_null()),
            _ => None,
        }
    }

    /// The entry's message: the string itself, or a string `message` field.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Structured(fields) => fields.get("message").and_then(Value::as_str),
            Self::Other(_) => None,
        }
    }

    fn summary_line(&self) -> Option<String> {
        match (self.code(), self.message()) {
            (Some(code), Some(message)) => Some(format!("{} - {}", value_text(code), message)),
            (None, Some(message)) => Some(message.to_string()),
            _ => None,
        }
    }
}

impl HttpError {
    /// Classifies a failed response, picking the kind from its status.
    ///
    /// `body` is the already decoded response body, if the caller has it.
    /// Without it the response body is decoded here.
    pub fn from_response<R>(response: &R, body: Option<&Value>) -> Self
    where
        R: FailedResponse + ?Sized,
    {
        Self::new(ErrorKind::for_status(response.status_code()), response, body)
    }

    /// Classifies a failed response as the given kind.
    ///
    /// Never fails: a body that is not a JSON object yields an error whose
    /// summary is only the status line.
    pub fn new<R>(kind: ErrorKind, response: &R, body: Option<&Value>) -> Self
    where
        R: FailedResponse + ?Sized,
    {
        let status = response.status_code();
        let reason = response.reason().to_string();
        let mut error = Self {
            kind,
            status,
            summary: format!("{} {}", status, reason),
            reason,
            api_errors: Vec::new(),
            api_codes: Vec::new(),
            api_messages: Vec::new(),
        };

        let body = match body {
            Some(body) => Cow::Borrowed(body),
            None => match response.json() {
                Ok(body) => Cow::Owned(body),
                Err(e) => {
                    tracing::debug!("Failure body of HTTP {} is not JSON: {}", status, e);
                    return error;
                }
            },
        };
        let Value::Object(fields) = body.as_ref() else {
            tracing::debug!("Failure body of HTTP {} is not a JSON object", status);
            return error;
        };

        let mut lines = Vec::new();
        for entry in collect_entries(fields) {
            if let Some(code) = entry.code() {
                error.api_codes.push(code.clone());
            }
            if let Some(message) = entry.message() {
                error.api_messages.push(message.to_string());
            }
            if let Some(line) = entry.summary_line() {
                lines.push(line);
            }
            error.api_errors.push(entry);
        }

        if lines.is_empty() {
            if let Some(detail) = fields.get("detail").filter(|d| !d.is_null()).map(value_text) {
                error.api_messages.push(detail.clone());
                lines.push(detail);
            }
        }

        for line in lines {
            error.summary.push('\n');
            error.summary.push_str(&line);
        }
        error
    }
}

/// Gathers `errors` followed by the singular `error` into a fresh list.
fn collect_entries(fields: &Map<String, Value>) -> Vec<ApiErrorEntry> {
    let mut entries: Vec<ApiErrorEntry> = match fields.get("errors") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(ApiErrorEntry::from_value).collect(),
        Some(single) => vec![ApiErrorEntry::from_value(single)],
    };
    match fields.get("error") {
        None | Some(Value::Null) => {}
        Some(error) => entries.push(ApiErrorEntry::from_value(error)),
    }
    entries
}

/// Strings as-is, anything else as compact JSON.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(value: Value) -> ApiErrorEntry {
        ApiErrorEntry::from_value(&value)
    }

    #[test]
    fn text_entry_is_its_own_message() {
        let e = entry(json!("plain text"));
        assert_eq!(e.message(), Some("plain text"));
        assert_eq!(e.code(), None);
        assert_eq!(e.summary_line().as_deref(), Some("plain text"));
    }

    #[test]
    fn structured_entry_lines() {
        let both = entry(json!({"code": 9016, "message": "Invalid ORCID"}));
        assert_eq!(both.summary_line().as_deref(), Some("9016 - Invalid ORCID"));

        let message_only = entry(json!({"message": "Invalid ORCID"}));
        assert_eq!(message_only.summary_line().as_deref(), Some("Invalid ORCID"));

        let code_only = entry(json!({"code": 9016}));
        assert_eq!(code_only.code(), Some(&json!(9016)));
        assert_eq!(code_only.summary_line(), None);
    }

    #[test]
    fn non_integer_codes_are_kept() {
        let text = entry(json!({"code": "9016", "message": "Invalid ORCID"}));
        assert_eq!(text.code(), Some(&json!("9016")));
        assert_eq!(text.summary_line().as_deref(), Some("9016 - Invalid ORCID"));

        let float = entry(json!({"code": 9016.5, "message": "Invalid ORCID"}));
        assert_eq!(float.summary_line().as_deref(), Some("9016.5 - Invalid ORCID"));
    }

    #[test]
    fn null_code_is_absent() {
        let e = entry(json!({"code": null, "message": "Invalid ORCID"}));
        assert_eq!(e.code(), None);
        assert_eq!(e.summary_line().as_deref(), Some("Invalid ORCID"));
    }

    #[test]
    fn scalar_entries_contribute_nothing() {
        let e = entry(json!(42));
        assert_eq!(e, ApiErrorEntry::Other(json!(42)));
        assert_eq!(e.code(), None);
        assert_eq!(e.message(), None);
        assert_eq!(e.summary_line(), None);
    }

    #[test]
    fn errors_then_error_order() {
        let body = json!({"errors": ["first"], "error": "second"});
        let entries = collect_entries(body.as_object().unwrap());
        assert_eq!(
            entries,
            vec![
                ApiErrorEntry::Text("first".to_string()),
                ApiErrorEntry::Text("second".to_string()),
            ]
        );
    }

    #[test]
    fn null_fields_are_absent() {
        let body = json!({"errors": null, "error": null});
        assert!(collect_entries(body.as_object().unwrap()).is_empty());
    }

    #[test]
    fn non_string_values_are_rendered_as_json() {
        assert_eq!(value_text(&json!("Y")), "Y");
        assert_eq!(value_text(&json!({"field": "bad"})), r#"{"field":"bad"}"#);
        assert_eq!(value_text(&json!(18446744073709551615u64)), "18446744073709551615");
    }
}
