// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request gateway
//!
//! One configured transport plus the interceptors every endpoint call goes
//! through: bearer-token injection on the way out, payload unwrapping and
//! session-expiry handling on the way back.

mod config;
mod gateway;

pub use config::{GatewayConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use gateway::Gateway;
