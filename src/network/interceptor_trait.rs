// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request/response interceptor chain
//!
//! Outbound hooks may edit or short-circuit a request before it is sent,
//! inbound hooks see every successful response and error hooks see every
//! failure. The gateway runs each stage exactly once per call.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::http::{Request, Response};
use crate::session::SessionStore;
use crate::ui::{Navigator, Notifier};

/// Request interceptor trait
///
/// # Example
///
/// ```rust,no_run
/// use storefront::network::{RequestInterceptor, InterceptAction};
/// use storefront::http::Request;
/// use async_trait::async_trait;
///
/// struct ChannelTag;
///
/// #[async_trait]
/// impl RequestInterceptor for ChannelTag {
///     async fn before_request(&self, req: &mut Request) -> InterceptAction {
///         req.headers.insert("x-channel", "pc".parse().unwrap());
///         InterceptAction::Continue
///     }
/// }
/// ```
#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    /// Called before a request is sent
    ///
    /// Can modify the request or abort it entirely.
    async fn before_request(&self, _request: &mut Request) -> InterceptAction {
        InterceptAction::Continue
    }

    /// Called after a successful (2xx) response is received
    async fn after_response(&self, _request: &Request, _response: &mut Response) -> Result<()> {
        Ok(())
    }

    /// Called when the request fails, for any reason
    async fn on_error(&self, _request: &Request, _error: &Error) {}

    /// Filter - return true if this interceptor should handle the request
    fn should_intercept(&self, _request: &Request) -> bool {
        true
    }

    /// Priority - higher priority interceptors run first
    fn priority(&self) -> i32 {
        0
    }
}

/// Action to take after interception
#[derive(Debug, Clone)]
pub enum InterceptAction {
    /// Continue with the (possibly modified) request
    Continue,
    /// Abort the request with an error
    Abort(String),
    /// Return a canned response instead of making the actual request
    MockResponse(Response),
}

/// Attaches `Authorization: Bearer <token>` from the session
///
/// A missing or empty token just means the request goes out without the
/// header; it never fails the request.
pub struct BearerTokenInjector {
    session: Arc<dyn SessionStore>,
}

impl BearerTokenInjector {
    /// Create an injector reading tokens from `session`
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl RequestInterceptor for BearerTokenInjector {
    async fn before_request(&self, request: &mut Request) -> InterceptAction {
        let Some(token) = self.session.token().filter(|t| !t.is_empty()) else {
            return InterceptAction::Continue;
        };

        match reqwest::header::HeaderValue::try_from(format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request
                    .headers
                    .insert(reqwest::header::AUTHORIZATION, value);
            }
            Err(_) => {
                tracing::warn!(target: "storefront::http", "session token is not a valid header value, sending without it");
            }
        }
        InterceptAction::Continue
    }

    fn priority(&self) -> i32 {
        100 // auth injection runs before anything that inspects headers
    }
}

/// Reacts to failed requests: notifies the user, and on 401 drops the
/// session and sends the user to the login view
pub struct SessionExpiryHandler {
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    login_path: String,
}

impl SessionExpiryHandler {
    /// Create a handler that redirects to `login_path` on 401
    pub fn new(
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        login_path: impl Into<String>,
    ) -> Self {
        Self {
            session,
            navigator,
            notifier,
            login_path: login_path.into(),
        }
    }
}

#[async_trait]
impl RequestInterceptor for SessionExpiryHandler {
    async fn on_error(&self, request: &Request, error: &Error) {
        self.notifier.warn(&error.user_message());

        if error.is_unauthorized() {
            tracing::info!(target: "storefront::http", path = %request.path, "session expired, redirecting to login");
            self.session.clear_token();
            self.navigator.go_to(&self.login_path);
        }
    }

    fn priority(&self) -> i32 {
        100
    }
}

/// Request logger interceptor
#[derive(Default)]
pub struct RequestLogger {
    /// Log response bodies
    pub log_responses: bool,
    /// Filter by path substring
    pub path_filter: Option<String>,
}

#[async_trait]
impl RequestInterceptor for RequestLogger {
    fn should_intercept(&self, request: &Request) -> bool {
        match self.path_filter {
            Some(ref filter) => request.path.contains(filter.as_str()),
            None => true,
        }
    }

    async fn before_request(&self, request: &mut Request) -> InterceptAction {
        tracing::info!(
            method = %request.method,
            path = %request.path,
            query = ?request.query,
            "Request"
        );
        InterceptAction::Continue
    }

    async fn after_response(&self, request: &Request, response: &mut Response) -> Result<()> {
        tracing::info!(
            path = %request.path,
            status = %response.status,
            time_ms = response.response_time_ms,
            "Response"
        );

        if self.log_responses {
            tracing::debug!(body = %response.text_lossy(), "Response body");
        }

        Ok(())
    }

    async fn on_error(&self, request: &Request, error: &Error) {
        tracing::info!(path = %request.path, status = ?error.status_code(), error = %error, "Request failed");
    }

    fn priority(&self) -> i32 {
        -100 // Low priority - run logging last
    }
}

/// Interceptor chain - manages multiple interceptors
#[derive(Clone, Default)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl InterceptorChain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self {
            interceptors: Vec::new(),
        }
    }

    /// Add an interceptor
    pub fn add<I: RequestInterceptor + 'static>(&mut self, interceptor: I) {
        self.add_shared(Arc::new(interceptor));
    }

    /// Add an interceptor the caller keeps a handle to
    pub fn add_shared(&mut self, interceptor: Arc<dyn RequestInterceptor>) {
        self.interceptors.push(interceptor);
        // stable sort: equal priorities keep registration order
        self.interceptors
            .sort_by(|a, b| b.priority().cmp(&a.priority()));
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Process request through all interceptors
    pub async fn process_request(&self, request: &mut Request) -> InterceptAction {
        for interceptor in &self.interceptors {
            if !interceptor.should_intercept(request) {
                continue;
            }

            match interceptor.before_request(request).await {
                InterceptAction::Continue => continue,
                action => return action,
            }
        }
        InterceptAction::Continue
    }

    /// Process response through all interceptors
    pub async fn process_response(&self, request: &Request, response: &mut Response) -> Result<()> {
        for interceptor in &self.interceptors {
            if !interceptor.should_intercept(request) {
                continue;
            }
            interceptor.after_response(request, response).await?;
        }
        Ok(())
    }

    /// Notify interceptors of an error
    pub async fn notify_error(&self, request: &Request, error: &Error) {
        for interceptor in &self.interceptors {
            if interceptor.should_intercept(request) {
                interceptor.on_error(request, error).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;
    use crate::ui::{NotificationLog, RouteHistory};
    use bytes::Bytes;

    fn handler(
        session: &MemorySessionStore,
        nav: &RouteHistory,
        log: &NotificationLog,
    ) -> SessionExpiryHandler {
        SessionExpiryHandler::new(
            Arc::new(session.clone()),
            Arc::new(nav.clone()),
            Arc::new(log.clone()),
            "/login",
        )
    }

    #[tokio::test]
    async fn test_bearer_injected_when_token_present() {
        let injector = BearerTokenInjector::new(Arc::new(MemorySessionStore::with_token("abc")));
        let mut req = Request::get("/home/new");

        assert!(matches!(
            injector.before_request(&mut req).await,
            InterceptAction::Continue
        ));
        assert_eq!(req.authorization(), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn test_no_header_without_token() {
        let injector = BearerTokenInjector::new(Arc::new(MemorySessionStore::new()));
        let mut req = Request::get("/home/new");

        assert!(matches!(
            injector.before_request(&mut req).await,
            InterceptAction::Continue
        ));
        assert_eq!(req.authorization(), None);
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session_and_redirects() {
        let session = MemorySessionStore::with_token("stale");
        let nav = RouteHistory::new();
        let log = NotificationLog::new();
        let handler = handler(&session, &nav, &log);

        let err = Error::status(401, "u", Bytes::from(r#"{"message":"token expired"}"#));
        handler.on_error(&Request::get("/home/hot"), &err).await;

        assert_eq!(log.messages(), vec!["token expired".to_string()]);
        assert_eq!(session.token(), None);
        assert_eq!(nav.current(), "/login");
    }

    #[tokio::test]
    async fn test_other_errors_only_notify() {
        let session = MemorySessionStore::with_token("fine");
        let nav = RouteHistory::new();
        let log = NotificationLog::new();
        let handler = handler(&session, &nav, &log);

        let err = Error::status(500, "u", Bytes::from(r#"{"message":"server busy"}"#));
        handler.on_error(&Request::get("/home/hot"), &err).await;

        assert_eq!(log.last().as_deref(), Some("server busy"));
        assert_eq!(session.token().as_deref(), Some("fine"));
        assert_eq!(nav.history(), vec!["/".to_string()]);
    }

    #[tokio::test]
    async fn test_error_without_response_uses_fallback() {
        let session = MemorySessionStore::with_token("fine");
        let nav = RouteHistory::new();
        let log = NotificationLog::new();
        let handler = handler(&session, &nav, &log);

        handler
            .on_error(&Request::get("/home/hot"), &Error::timeout("u", 5000))
            .await;

        assert_eq!(log.last().as_deref(), Some(crate::error::FALLBACK_MESSAGE));
        assert_eq!(session.token().as_deref(), Some("fine"));
    }

    #[test]
    fn test_interceptor_chain_ordering() {
        let mut chain = InterceptorChain::new();
        chain.add(RequestLogger::default());
        chain.add(BearerTokenInjector::new(Arc::new(MemorySessionStore::new())));

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.interceptors[0].priority(), 100);
        assert_eq!(chain.interceptors[1].priority(), -100);
    }

    #[tokio::test]
    async fn test_chain_stops_on_abort() {
        struct Deny;

        #[async_trait]
        impl RequestInterceptor for Deny {
            async fn before_request(&self, _request: &mut Request) -> InterceptAction {
                InterceptAction::Abort("maintenance".to_string())
            }
        }

        let mut chain = InterceptorChain::new();
        chain.add(Deny);
        let mut req = Request::get("/home/goods");

        match chain.process_request(&mut req).await {
            InterceptAction::Abort(reason) => assert_eq!(reason, "maintenance"),
            other => panic!("expected abort, got {:?}", other),
        }
    }
}
