// SPDX-License-Identifier: MPL-2.0
//! Crash event types.

use chrono::{DateTime, Utc};
use std::fmt;

/// Granularity at which a render failure escaped all boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashScope {
    /// A failure that replaced the current screen.
    Route,
    /// A failure that replaced the entire application view.
    Application,
}

impl CrashScope {
    /// Prefix used when the crash is echoed to the console.
    #[must_use]
    pub fn log_prefix(&self) -> &'static str {
        match self {
            CrashScope::Route => "Route error",
            CrashScope::Application => "Application error",
        }
    }
}

/// One render failure that reached a crash surface.
#[derive(Debug, Clone, PartialEq)]
pub struct CrashEvent {
    scope: CrashScope,
    message: String,
    occurred_at: DateTime<Utc>,
}

impl CrashEvent {
    /// Creates an event stamped with the current wall-clock time.
    pub fn new(scope: CrashScope, message: impl Into<String>) -> Self {
        Self {
            scope,
            message: message.into(),
            occurred_at: Utc::now(),
        }
    }

    /// Returns the scope at which the failure surfaced.
    #[must_use]
    pub fn scope(&self) -> CrashScope {
        self.scope
    }

    /// Returns the failure's message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when the failure was recorded.
    #[must_use]
    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

impl fmt::Display for CrashEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.occurred_at.to_rfc3339(),
            self.scope.log_prefix(),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_scope_prefix_and_message() {
        let event = CrashEvent::new(CrashScope::Route, "boom");
        let rendered = event.to_string();
        assert!(rendered.contains("Route error"));
        assert!(rendered.contains("boom"));
    }

    #[test]
    fn scopes_have_distinct_prefixes() {
        assert_ne!(
            CrashScope::Route.log_prefix(),
            CrashScope::Application.log_prefix()
        );
    }
}
