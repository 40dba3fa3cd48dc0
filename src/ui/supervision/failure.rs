// SPDX-License-Identifier: MPL-2.0
//! Render failure capture.
//!
//! A render failure is a panic raised while a view builder computes its
//! output. [`capture`] runs a builder and converts such a panic into a
//! [`RenderFailure`] value carrying the payload's message text.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Message shown when a panic payload carries no text.
pub const UNKNOWN_FAILURE_MESSAGE: &str = "unknown render failure";

/// A failure caught while building view output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    message: String,
}

impl RenderFailure {
    /// Wraps a failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure's message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RenderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Runs `build`, converting a panic into a [`RenderFailure`].
///
/// View builders only borrow state immutably, so a caught panic cannot leave
/// them torn; the `AssertUnwindSafe` below relies on that.
pub fn capture<T>(build: impl FnOnce() -> T) -> Result<T, RenderFailure> {
    panic::catch_unwind(AssertUnwindSafe(build))
        .map_err(|payload| RenderFailure::new(panic_message(payload.as_ref())))
}

/// Extracts the message text from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        UNKNOWN_FAILURE_MESSAGE.to_string()
    }
}
