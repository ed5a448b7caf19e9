// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Notifier implementations

use std::sync::Arc;

use parking_lot::RwLock;

use super::Notifier;

/// Emits notifications as `tracing` warnings
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "storefront::notify", "{}", message);
    }
}

/// Keeps every message it is handed
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    messages: Arc<RwLock<Vec<String>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.messages.read().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.messages.read().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.read().is_empty()
    }
}

impl Notifier for NotificationLog {
    fn warn(&self, message: &str) {
        self.messages.write().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_log() {
        let log = NotificationLog::new();
        assert!(log.is_empty());

        log.warn("token expired");
        log.warn("server busy");

        assert_eq!(log.len(), 2);
        assert_eq!(log.last().as_deref(), Some("server busy"));
        assert_eq!(log.messages()[0], "token expired");
    }
}
