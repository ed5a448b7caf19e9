// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP transport layer
//!
//! Request descriptors, the raw response envelope, a `reqwest`-backed
//! client and the retry adapter wrapped around it.

mod client;
mod request;
mod response;
mod retry;

pub use client::{HttpClient, HttpClientConfig};
pub use request::Request;
pub use response::Response;
pub use retry::RetryPolicy;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("storefront/", env!("CARGO_PKG_VERSION"));
