// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! User session state
//!
//! The gateway only needs two things from the session: the current token,
//! and a way to drop it once the server says it is no longer valid.

mod store;

pub use store::{MemorySessionStore, UserInfo};

/// Session state consumed by the gateway
pub trait SessionStore: Send + Sync {
    /// Current auth token, if the user is logged in
    fn token(&self) -> Option<String>;

    /// Forget the token. Must tolerate being called when already cleared.
    fn clear_token(&self);
}
