// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP request descriptor

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use url::Url;

use crate::error::Result;

/// Per-call request description
///
/// The path is resolved against the client's base address when the request
/// is sent, so the same descriptor can be replayed on retry.
#[derive(Debug, Clone)]
pub struct Request {
    /// Request method
    pub method: Method,
    /// Path relative to the base address (or an absolute URL)
    pub path: String,
    /// Query parameters, in insertion order
    pub query: Vec<(String, String)>,
    /// Request headers
    pub headers: HeaderMap,
    /// Per-request timeout override
    pub timeout: Option<Duration>,
}

impl Request {
    /// Create a new GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a new request with arbitrary method
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            timeout: None,
        }
    }

    /// Append a query parameter
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Append several query parameters
    pub fn query_pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set a header (invalid names or values are ignored)
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Look up a query parameter
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Current `Authorization` header, if any
    pub fn authorization(&self) -> Option<&str> {
        self.headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok())
    }

    /// Whether replaying this request is free of side effects
    pub fn is_idempotent(&self) -> bool {
        matches!(self.method, Method::GET | Method::HEAD | Method::OPTIONS)
    }

    /// Resolve the full URL against a base address
    ///
    /// Any path prefix on the base is kept (`https://host/api` + `/home/new`
    /// gives `https://host/api/home/new`).
    pub fn resolve(&self, base: &Url) -> Result<Url> {
        let mut url = if self.path.starts_with("http://") || self.path.starts_with("https://") {
            Url::parse(&self.path)?
        } else {
            let joined = format!(
                "{}/{}",
                base.as_str().trim_end_matches('/'),
                self.path.trim_start_matches('/')
            );
            Url::parse(&joined)?
        };

        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        Ok(url)
    }
}
