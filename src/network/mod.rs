// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request interception
//!
//! Cross-cutting request/response handling shared by every endpoint call.

mod interceptor_trait;

pub use interceptor_trait::{
    BearerTokenInjector, InterceptAction, InterceptorChain, RequestInterceptor, RequestLogger,
    SessionExpiryHandler,
};
