// SPDX-License-Identifier: MPL-2.0
//! In-memory crash log.
//!
//! `DiagnosticsLog` is a cheap, cloneable handle to a shared ring buffer of
//! [`CrashEvent`]s. Crash surfaces record through it at the moment a failure
//! is caught; there is no background collection in this application.

use super::buffer::CircularBuffer;
use super::events::{CrashEvent, CrashScope};
use std::sync::{Arc, Mutex};

/// Default number of crash events retained.
pub const DEFAULT_CRASH_LOG_CAPACITY: usize = 256;

/// Handle to the shared crash event buffer.
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    events: Arc<Mutex<CircularBuffer<CrashEvent>>>,
}

impl DiagnosticsLog {
    /// Creates a log with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CRASH_LOG_CAPACITY)
    }

    /// Creates a log with an explicit capacity (useful for tests).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    /// Records a crash and echoes it to the console.
    pub fn record_crash(&self, scope: CrashScope, message: &str) {
        let event = CrashEvent::new(scope, message);
        eprintln!("{event}");
        self.record(event);
    }

    /// Records an already-built event without console output.
    pub fn record(&self, event: CrashEvent) {
        let Ok(mut events) = self.events.lock() else {
            return;
        };
        events.push(event);
    }

    /// Returns a snapshot of the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<CrashEvent> {
        match self.events.lock() {
            Ok(events) => events.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    /// Returns whether no events have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::new()
    }
}
