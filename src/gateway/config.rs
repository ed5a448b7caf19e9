// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Gateway configuration

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RetryPolicy, DEFAULT_USER_AGENT};
use crate::ui::LOGIN_PATH;

/// Backend the storefront talks to unless told otherwise
pub const DEFAULT_BASE_URL: &str = "https://pcapi-xiaotuxian-front-devtest.itheima.net";

/// Env var overriding the base address
pub const BASE_URL_ENV: &str = "STOREFRONT_BASE_URL";

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base address of the backend
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Retry behaviour for idempotent requests
    pub retry: RetryPolicy,
    /// Where to send the user when the session has expired
    pub login_path: String,
    /// User agent string
    pub user_agent: String,
    /// Proxy URL
    pub proxy: Option<String>,
    /// Extra headers sent with every request
    pub default_headers: Vec<(String, String)>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(5000),
            retry: RetryPolicy::default(),
            login_path: LOGIN_PATH.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            proxy: None,
            default_headers: vec![],
        }
    }
}

impl GatewayConfig {
    /// Create a new gateway config
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config, with the base address taken from
    /// `STOREFRONT_BASE_URL` when set
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::default().base_url(url.trim()),
            _ => Self::default(),
        }
    }

    /// Set base address
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set retry policy
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Disable retries
    pub fn no_retry(mut self) -> Self {
        self.retry = RetryPolicy::none();
        self
    }

    /// Set login path
    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set proxy
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Add default header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Transport configuration derived from this config
    pub fn http_config(&self) -> Result<HttpClientConfig> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("Invalid base URL '{}': {}", self.base_url, e)))?;

        let mut http = HttpClientConfig::new(base_url);
        http.timeout = self.timeout;
        http.user_agent = self.user_agent.clone();
        http.proxy = self.proxy.clone();

        for (name, value) in &self.default_headers {
            let name = reqwest::header::HeaderName::try_from(name.as_str())
                .map_err(|e| Error::Config(format!("Invalid header name '{}': {}", name, e)))?;
            let value = reqwest::header::HeaderValue::try_from(value.as_str())
                .map_err(|e| Error::Config(format!("Invalid header value: {}", e)))?;
            http.default_headers.insert(name, value);
        }

        Ok(http)
    }
}
