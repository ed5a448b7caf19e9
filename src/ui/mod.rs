// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! UI-side collaborators used by the gateway
//!
//! Navigation and user notifications live in the view layer; the gateway
//! only talks to them through these traits.

mod navigator;
mod notifier;

pub use navigator::RouteHistory;
pub use notifier::{NotificationLog, TracingNotifier};

/// Path of the login view
pub const LOGIN_PATH: &str = "/login";

/// Moves the application to another view
pub trait Navigator: Send + Sync {
    /// Navigate to `path`
    fn go_to(&self, path: &str);
}

/// Non-blocking user notifications
pub trait Notifier: Send + Sync {
    /// Show a warning
    fn warn(&self, message: &str);
}
