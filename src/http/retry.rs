// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Fixed-delay retry for idempotent requests
//!
//! Only GET/HEAD/OPTIONS are replayed, and only for failures that
//! [`Error::is_recoverable`] accepts (connect errors, timeouts, 429, 5xx).

use std::future::Future;
use std::time::Duration;

use backoff::backoff::Backoff;

use super::request::Request;
use crate::error::{Error, Result};

/// Retry configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one
    pub max_retries: u32,
    /// Wait between attempts
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Create a new retry policy
    pub const fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// Policy that never retries
    pub const fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Set maximum retries
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Set delay between attempts
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Whether `request` may be retried at all
    pub fn applies_to(&self, request: &Request) -> bool {
        self.max_retries > 0 && request.is_idempotent()
    }

    fn backoff(&self) -> CappedConstant {
        CappedConstant {
            delay: self.delay,
            max_retries: self.max_retries,
            remaining: self.max_retries,
        }
    }

    /// Run `operation`, retrying transient failures of idempotent requests
    pub async fn run<F, Fut, T>(&self, request: &Request, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if !self.applies_to(request) {
            return operation().await;
        }

        backoff::future::retry_notify(
            self.backoff(),
            || {
                let attempt = operation();
                async move {
                    attempt.await.map_err(|e| {
                        if e.is_recoverable() {
                            backoff::Error::transient(e)
                        } else {
                            backoff::Error::permanent(e)
                        }
                    })
                }
            },
            |err: Error, wait: Duration| {
                tracing::warn!(
                    target: "storefront::http",
                    path = %request.path,
                    wait_ms = wait.as_millis() as u64,
                    error = %err,
                    "retrying request"
                );
            },
        )
        .await
    }
}

/// Constant delay, giving up after a fixed number of retries
#[derive(Debug, Clone)]
struct CappedConstant {
    delay: Duration,
    max_retries: u32,
    remaining: u32,
}

impl Backoff for CappedConstant {
    fn reset(&mut self) {
        self.remaining = self.max_retries;
    }

    fn next_backoff(&mut self) -> Option<Duration> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use reqwest::Method;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast(retries: u32) -> RetryPolicy {
        RetryPolicy::new(retries, Duration::from_millis(1))
    }

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 2);
        assert_eq!(policy.delay, Duration::from_secs(1));
    }

    #[test]
    fn test_backoff_is_capped() {
        let mut backoff = fast(2).backoff();
        assert!(backoff.next_backoff().is_some());
        assert!(backoff.next_backoff().is_some());
        assert!(backoff.next_backoff().is_none());
        backoff.reset();
        assert!(backoff.next_backoff().is_some());
    }

    #[tokio::test]
    async fn test_transient_errors_are_retried_until_cap() {
        let calls = AtomicU32::new(0);
        let request = Request::get("/home/hot");

        let result: Result<()> = fast(2)
            .run(&request, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(Error::status(503, "u", Bytes::new()))
            })
            .await;

        assert_eq!(result.unwrap_err().status_code(), Some(503));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_recovers_after_transient_failure() {
        let calls = AtomicU32::new(0);
        let request = Request::get("/home/new");

        let result = fast(2)
            .run(&request, || async {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(Error::timeout("u", 5000))
                } else {
                    Ok("ok")
                }
            })
            .await;

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_permanent_errors_are_not_retried() {
        let calls = AtomicU32::new(0);
        let request = Request::get("/home/goods");

        let result: Result<()> = fast(2)
            .run(&request, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(Error::status(401, "u", Bytes::new()))
            })
            .await;

        assert!(result.unwrap_err().is_unauthorized());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_non_idempotent_requests_are_not_retried() {
        let calls = AtomicU32::new(0);
        let request = Request::new(Method::POST, "/member/order");

        let result: Result<()> = fast(2)
            .run(&request, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(Error::timeout("u", 5000))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
