// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Route history navigator

use std::sync::Arc;

use parking_lot::RwLock;

use super::Navigator;

/// Navigator that records where the application was sent
///
/// Stands in for a real router in headless use (CLI, tests).
#[derive(Debug, Clone)]
pub struct RouteHistory {
    routes: Arc<RwLock<Vec<String>>>,
}

impl Default for RouteHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteHistory {
    /// Start at `/`
    pub fn new() -> Self {
        Self {
            routes: Arc::new(RwLock::new(vec!["/".to_string()])),
        }
    }

    /// Current route
    pub fn current(&self) -> String {
        self.routes
            .read()
            .last()
            .cloned()
            .unwrap_or_else(|| "/".to_string())
    }

    /// Every route visited, oldest first
    pub fn history(&self) -> Vec<String> {
        self.routes.read().clone()
    }
}

impl Navigator for RouteHistory {
    fn go_to(&self, path: &str) {
        tracing::info!(target: "storefront::ui", path, "navigating");
        self.routes.write().push(path.to_string());
    }
}
