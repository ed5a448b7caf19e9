// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the storefront client
//!
//! Every error that leaves the gateway carries enough context (URL, status,
//! response body) for the session-expiry handler to decide what to do and
//! for the caller to show something meaningful.

use bytes::Bytes;
use thiserror::Error;

/// Result type alias for storefront operations
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown when a failure carries no usable message of its own
pub const FALLBACK_MESSAGE: &str = "Network request failed, please try again later";

/// Main error type for the storefront client
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failed before any response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Request exceeded the configured timeout
    #[error("Request to {url} timed out after {duration_ms}ms")]
    Timeout { url: String, duration_ms: u64 },

    /// Server answered with a non-2xx status
    #[error("Request to {url} failed with status {status}")]
    Status {
        status: u16,
        url: String,
        message: Option<String>,
        body: Bytes,
    },

    /// Body could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An interceptor aborted the request
    #[error("Request aborted: {0}")]
    Aborted(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a status error from a response body, extracting its message
    pub fn status(status: u16, url: impl Into<String>, body: Bytes) -> Self {
        let message = extract_message(&body);
        Error::Status {
            status,
            url: url.into(),
            message,
            body,
        }
    }

    /// Create a timeout error
    pub fn timeout(url: impl Into<String>, duration_ms: u64) -> Self {
        Error::Timeout {
            url: url.into(),
            duration_ms,
        }
    }

    /// HTTP status code, if a response was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the server rejected our credentials (401)
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Timeout { .. } => true,
            Error::Http(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Check if this is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        self.status_code()
            .map(|s| (400..500).contains(&s))
            .unwrap_or(false)
    }

    /// Check if this is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.status_code()
            .map(|s| (500..600).contains(&s))
            .unwrap_or(false)
    }

    /// Check if this is recoverable (can retry)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Timeout { .. } => true,
            Error::Status { status, .. } => *status == 429 || (500..600).contains(status),
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Request URL, if known
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Status { url, .. } | Error::Timeout { url, .. } => Some(url),
            Error::Http(e) => e.url().map(|u| u.as_str()),
            _ => None,
        }
    }

    /// Message the server put into the error body, if any
    pub fn response_message(&self) -> Option<&str> {
        match self {
            Error::Status {
                message: Some(m), ..
            } => Some(m.as_str()),
            _ => None,
        }
    }

    /// Message suitable for showing to the user
    ///
    /// Never fails: errors without a response (or without a message in the
    /// response) fall back to [`FALLBACK_MESSAGE`].
    pub fn user_message(&self) -> String {
        self.response_message()
            .unwrap_or(FALLBACK_MESSAGE)
            .to_string()
    }
}

/// Pull `message` (or `msg`) out of a JSON error body
fn extract_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    ["message", "msg"]
        .iter()
        .filter_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|m| !m.is_empty())
        .map(str::to_string)
}
