//! Structured request failure type.
//!
//! The backend reports failures as a JSON body with a `detail` field that is
//! either a plain string (auth/business errors) or a list of field
//! validation items. Both shapes are preserved here so the message
//! translator in `util::messages` can produce display strings from them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// One entry of a structured validation error list.
///
/// `loc` mixes strings and integers (`["body", "username"]`,
/// `["body", "items", 0, "name"]`), so elements stay as raw JSON values.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ValidationItem {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    #[serde(default)]
    pub msg: String,
}

impl ValidationItem {
    /// Field key with the leading location segment (`body`/`query`) dropped,
    /// remaining segments joined with `.`.
    pub fn field_key(&self) -> String {
        let parts: Vec<String> = self
            .loc
            .iter()
            .skip(1)
            .map(|v| match v.as_str() {
                Some(s) => s.to_owned(),
                None => v.to_string(),
            })
            .collect();
        parts.join(".")
    }
}

/// The `detail` payload of an error body.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Validation(Vec<ValidationItem>),
    Other(serde_json::Value),
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

/// Failure of a backend request.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: no response, aborted request, bad JSON.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response with whatever `detail` the body carried.
    #[error("request failed with status {status}")]
    Api {
        status: u16,
        detail: Option<ErrorDetail>,
    },
    /// Request attempted outside a browser build.
    #[error("requests are only available in the browser")]
    Unsupported,
}

impl ApiError {
    /// The plain-string `detail`, if the backend sent one.
    pub fn detail_text(&self) -> Option<&str> {
        match self {
            Self::Api {
                detail: Some(ErrorDetail::Message(text)),
                ..
            } => Some(text),
            _ => None,
        }
    }

    /// The validation item list, if the backend sent one.
    pub fn validation_items(&self) -> Option<&[ValidationItem]> {
        match self {
            Self::Api {
                detail: Some(ErrorDetail::Validation(items)),
                ..
            } => Some(items),
            _ => None,
        }
    }

    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
