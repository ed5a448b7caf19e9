// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request gateway implementation

use std::sync::Arc;

use serde_json::Value;

use super::config::GatewayConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, Request, Response};
use crate::network::{
    BearerTokenInjector, InterceptAction, InterceptorChain, RequestInterceptor,
    SessionExpiryHandler,
};
use crate::session::SessionStore;
use crate::ui::{Navigator, Notifier, RouteHistory, TracingNotifier};

/// Shared entry point for every backend call
///
/// Each call runs the outbound interceptors once, sends the request
/// (retrying idempotent ones on transient failures), then runs either the
/// response interceptors or the error interceptors once before handing the
/// body payload or the error back.
#[derive(Clone)]
pub struct Gateway {
    config: GatewayConfig,
    client: HttpClient,
    interceptors: InterceptorChain,
}

impl Gateway {
    /// Create a gateway wired to the given collaborators
    pub fn new(
        config: GatewayConfig,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self> {
        let client = HttpClient::with_config(config.http_config()?)?;

        let mut interceptors = InterceptorChain::new();
        interceptors.add(BearerTokenInjector::new(session.clone()));
        interceptors.add(SessionExpiryHandler::new(
            session,
            navigator,
            notifier,
            config.login_path.clone(),
        ));

        Ok(Self {
            config,
            client,
            interceptors,
        })
    }

    /// Gateway with headless defaults: failures are reported through
    /// `tracing` and navigation is recorded in a [`RouteHistory`]
    pub fn with_defaults(config: GatewayConfig, session: Arc<dyn SessionStore>) -> Result<Self> {
        Self::new(
            config,
            session,
            Arc::new(RouteHistory::new()),
            Arc::new(TracingNotifier),
        )
    }

    /// Register an extra interceptor
    pub fn add_interceptor<I: RequestInterceptor + 'static>(&mut self, interceptor: I) {
        self.interceptors.add(interceptor);
    }

    /// Gateway configuration
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Issue a GET for `path` with the given query parameters
    pub async fn get<I, K, V>(&self, path: &str, query: I) -> Result<Value>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.send(Request::get(path).query_pairs(query)).await
    }

    /// Send a request and return its body payload
    pub async fn send(&self, mut request: Request) -> Result<Value> {
        let outcome = match self.interceptors.process_request(&mut request).await {
            InterceptAction::Continue => self.exchange(&request).await,
            InterceptAction::MockResponse(response) => self.unwrap_response(&request, response).await,
            InterceptAction::Abort(reason) => Err(Error::Aborted(reason)),
        };

        if let Err(ref error) = outcome {
            self.interceptors.notify_error(&request, error).await;
        }
        outcome
    }

    async fn exchange(&self, request: &Request) -> Result<Value> {
        let response = self
            .client
            .execute_checked(request, &self.config.retry)
            .await?;
        self.unwrap_response(request, response).await
    }

    async fn unwrap_response(&self, request: &Request, response: Response) -> Result<Value> {
        // mocked responses skip execute_checked, so check status here too
        let mut response = response.error_for_status()?;
        self.interceptors
            .process_response(request, &mut response)
            .await?;
        Ok(response.into_payload())
    }
}
