//! Error types for the centralHub API client.
//!
//! # Design
//! All four failure channels get their own variant so callers can tell them
//! apart statically: a response with a bad status (`Http`), no response at
//! all (`Transport`), and the two JSON codec failures. `Http` carries the
//! backend's raw error body as an opaque `serde_json::Value` — validation
//! detail shapes belong to the backend, the client only passes them through.

use std::fmt;

/// Errors returned by `ApiClient` and `CentralHub` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The server responded with a status outside 200–299.
    ///
    /// `message` is always `"Error HTTP <status>"`. `details` holds the
    /// error body parsed as JSON, or `None` when the body is not valid JSON;
    /// a body that fails to parse never masks the HTTP failure itself.
    Http {
        status: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// The exchange itself failed (connect, DNS, broken read) — no response
    /// was received. Never folded into `Http`.
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// A success-status response body could not be deserialized into the
    /// expected type. Indicates the server broke the wire contract.
    Deserialization(String),
}

impl ApiError {
    /// Build the `Http` variant for a non-success response, attempting a
    /// best-effort parse of the error body for diagnostic detail.
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Http {
            status,
            message: format!("Error HTTP {status}"),
            details: serde_json::from_str(body).ok(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { message, .. } => write!(f, "{message}"),
            ApiError::Transport(msg) => write!(f, "transport failure: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
