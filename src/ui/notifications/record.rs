// SPDX-License-Identifier: MPL-2.0
//! Core error record data structures.
//!
//! An [`ErrorRecord`] is one reported error held by the notification store:
//! an opaque id, a human-readable message, and optional structured metadata
//! for debugging context.

use serde_json::{Map, Value};

/// Structured context attached to a reported error (string keys, JSON values).
pub type Metadata = Map<String, Value>;

/// Unique identifier for an error record.
///
/// Ids come from a process-wide counter, so they stay unique for the lifetime
/// of the session even under rapid back-to-back pushes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(u64);

impl RecordId {
    /// Creates a new unique record ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

/// One reported error instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    id: RecordId,
    message: String,
    metadata: Option<Metadata>,
}

impl ErrorRecord {
    /// Creates a record with a fresh id.
    pub fn new(message: impl Into<String>, metadata: Option<Metadata>) -> Self {
        Self {
            id: RecordId::new(),
            message: message.into(),
            metadata,
        }
    }

    /// Returns the record's unique ID.
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the structured metadata, if any was attached.
    #[must_use]
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// Pretty-printed JSON rendering of the metadata for the toast's
    /// secondary block. `None` when the record carries no metadata.
    #[must_use]
    pub fn metadata_pretty(&self) -> Option<String> {
        self.metadata
            .as_ref()
            .and_then(|meta| serde_json::to_string_pretty(meta).ok())
    }

    /// Text assistive technology announces when the record's toast mounts.
    #[must_use]
    pub fn announcement(&self) -> String {
        format!("Error: {}", self.message)
    }
}
