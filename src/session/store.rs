// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! In-memory session store

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::SessionStore;

/// Logged-in user as returned by the login endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub token: String,
}

/// Process-local session, shareable across clones
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    user: Arc<RwLock<Option<UserInfo>>>,
}

impl MemorySessionStore {
    /// Create an empty (logged out) session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session holding only a token
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set_token(token);
        store
    }

    /// Store the logged-in user
    pub fn set_user(&self, user: UserInfo) {
        *self.user.write() = Some(user);
    }

    /// Replace just the token, keeping any other user fields
    pub fn set_token(&self, token: impl Into<String>) {
        let mut user = self.user.write();
        user.get_or_insert_with(UserInfo::default).token = token.into();
    }

    /// Current user, if any
    pub fn user(&self) -> Option<UserInfo> {
        self.user.read().clone()
    }

    /// Drop the whole user record
    pub fn clear_user(&self) {
        *self.user.write() = None;
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.user
            .read()
            .as_ref()
            .map(|u| u.token.clone())
            .filter(|t| !t.is_empty())
    }

    fn clear_token(&self) {
        self.clear_user();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        let store = MemorySessionStore::with_token("abc");
        assert_eq!(store.token().as_deref(), Some("abc"));

        store.clear_token();
        assert_eq!(store.token(), None);
        // clearing twice is harmless
        store.clear_token();
        assert!(store.user().is_none());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let store = MemorySessionStore::with_token("");
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemorySessionStore::new();
        let other = store.clone();
        store.set_user(UserInfo {
            account: "xiaotuxian001".to_string(),
            token: "t0k".to_string(),
            ..Default::default()
        });
        assert_eq!(other.token().as_deref(), Some("t0k"));
        assert_eq!(other.user().map(|u| u.account), Some("xiaotuxian001".to_string()));
    }

    #[test]
    fn test_user_info_from_login_payload() {
        let user: UserInfo = serde_json::from_str(
            r#"{"id":"1","account":"a","nickname":"n","avatar":"","token":"tk","mobile":"1"}"#,
        )
        .unwrap();
        assert_eq!(user.token, "tk");
    }
}
