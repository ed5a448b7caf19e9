// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Storefront - home page API client
//!
//! Data-access layer for the storefront backend. Every call goes through a
//! shared [`Gateway`] that attaches the session's bearer token, unwraps the
//! response body and, when the server answers 401, clears the session and
//! sends the user back to the login view.
//!
//! ## Features
//!
//! - Home endpoints: banners, new arrivals, popular items, product modules
//! - Bearer token injection from an injected session store
//! - Session-expiry handling with injected navigator and notifier
//! - Fixed-delay retry for idempotent requests
//! - Pluggable request/response interceptors
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storefront::{api, BannerParams, Gateway, GatewayConfig, MemorySessionStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Arc::new(MemorySessionStore::with_token("token"));
//!     let gateway = Gateway::with_defaults(GatewayConfig::default(), session)?;
//!
//!     let banners = api::get_banner(&gateway, BannerParams::default()).await?;
//!     println!("{}", banners);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod gateway;
pub mod http;
pub mod network;
pub mod session;
pub mod ui;

// Re-exports for convenience

// Endpoints
pub use api::{BannerParams, DistributionSite, HomeApi};

// Errors
pub use error::{Error, Result};

// Gateway
pub use gateway::{Gateway, GatewayConfig};

// HTTP
pub use http::{HttpClient, HttpClientConfig, Request, Response, RetryPolicy};

// Network
pub use network::{
    BearerTokenInjector, InterceptAction, InterceptorChain, RequestInterceptor, RequestLogger,
    SessionExpiryHandler,
};

// Session and UI collaborators
pub use session::{MemorySessionStore, SessionStore, UserInfo};
pub use ui::{Navigator, NotificationLog, Notifier, RouteHistory, TracingNotifier};

/// Storefront client version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
