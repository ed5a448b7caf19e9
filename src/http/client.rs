// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use url::Url;

use super::request::Request;
use super::response::Response;
use super::retry::RetryPolicy;
use super::DEFAULT_USER_AGENT;
use crate::error::{Error, Result};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base address every relative path is resolved against
    pub base_url: Url,
    /// User agent string
    pub user_agent: String,
    /// Default timeout
    pub timeout: Duration,
    /// Default headers
    pub default_headers: HeaderMap,
    /// Proxy URL
    pub proxy: Option<String>,
}

impl HttpClientConfig {
    /// Create a config for the given base address
    pub fn new(base_url: Url) -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("accept", HeaderValue::from_static("application/json"));

        Self {
            base_url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(5),
            default_headers,
            proxy: None,
        }
    }
}

/// Thin transport over `reqwest`
///
/// Sends one [`Request`] per call and hands back the raw [`Response`]
/// whatever its status; status classification is left to the caller.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .default_headers(config.default_headers.clone());

        if let Some(ref proxy_url) = config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?,
            );
        }

        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Base address requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Execute a request once
    pub async fn execute(&self, request: &Request) -> Result<Response> {
        let start = Instant::now();
        let url = request.resolve(&self.config.base_url)?;

        let mut builder = self.client.request(request.method.clone(), url.clone());

        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }

        let timeout = request.timeout.unwrap_or(self.config.timeout);
        if request.timeout.is_some() {
            builder = builder.timeout(timeout);
        }

        tracing::debug!(target: "storefront::http", method = %request.method, url = %url, "sending request");

        let response = builder
            .send()
            .await
            .map_err(|e| classify_send_error(e, &url, timeout))?;

        let final_url = response.url().clone();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| classify_send_error(e, &url, timeout))?;
        let response_time = start.elapsed().as_millis() as u64;

        tracing::debug!(target: "storefront::http", url = %final_url, status = status.as_u16(), time_ms = response_time, "response received");

        Ok(Response::new(status, headers, body, final_url, response_time))
    }

    /// Execute a request, turning non-2xx statuses into errors and retrying
    /// transient failures according to `policy`
    pub async fn execute_checked(&self, request: &Request, policy: &RetryPolicy) -> Result<Response> {
        policy
            .run(request, || async move {
                self.execute(request).await?.error_for_status()
            })
            .await
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

fn classify_send_error(error: reqwest::Error, url: &Url, timeout: Duration) -> Error {
    if error.is_timeout() {
        Error::timeout(url.as_str(), timeout.as_millis() as u64)
    } else {
        Error::Http(error)
    }
}
