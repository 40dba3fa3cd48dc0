// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior of the notification store and reporting capability.

use iced_primer::ui::notifications::{ErrorRecord, Metadata, NotificationStore};
use serde_json::json;

fn endpoint_metadata(endpoint: &str) -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert("endpoint".to_string(), json!(endpoint));
    metadata
}

#[test]
fn reported_error_shows_and_dismisses() {
    // A component reports a fetch failure with contextual metadata.
    let mut store = NotificationStore::new();
    store.push(
        "Failed to fetch user data",
        Some(endpoint_metadata("/api/user")),
    );

    assert_eq!(store.len(), 1);
    let record = store.errors().next().expect("one record should be live");
    assert_eq!(record.message(), "Failed to fetch user data");
    assert_eq!(record.announcement(), "Error: Failed to fetch user data");

    let pretty = record.metadata_pretty().expect("metadata should render");
    assert!(pretty.contains("\"endpoint\": \"/api/user\""));

    // Closing the toast removes the record; nothing remains to render.
    let id = record.id();
    store.dismiss(id);
    assert!(store.is_empty());
}

#[test]
fn successive_reports_stack_newest_first() {
    let mut store = NotificationStore::new();
    store.push("A", None);
    store.push("B", None);
    store.push("C", None);

    let top_to_bottom: Vec<_> = store.errors().map(ErrorRecord::message).collect();
    assert_eq!(top_to_bottom, vec!["C", "B", "A"]);
}

#[test]
fn every_push_yields_exactly_one_record() {
    let mut store = NotificationStore::new();
    for i in 0..50 {
        store.push(format!("error {i}"), None);
        assert_eq!(store.len(), i + 1);
        assert_eq!(
            store.errors().next().map(ErrorRecord::message),
            Some(format!("error {i}").as_str())
        );
    }
}

#[test]
fn dismissal_is_exact_and_idempotent() {
    let mut store = NotificationStore::new();
    store.push("first", None);
    store.push("second", None);
    store.push("third", None);

    let ids: Vec<_> = store.errors().map(ErrorRecord::id).collect();

    // Removing the middle record leaves the others in relative order.
    store.dismiss(ids[1]);
    let remaining: Vec<_> = store.errors().map(ErrorRecord::message).collect();
    assert_eq!(remaining, vec!["third", "first"]);

    // Dismissing the same id again changes nothing.
    store.dismiss(ids[1]);
    assert_eq!(store.len(), 2);

    // Dismissing an id that never belonged to the store changes nothing.
    let foreign = ErrorRecord::new("foreign", None).id();
    store.dismiss(foreign);
    assert_eq!(store.len(), 2);
}

#[test]
fn reporter_capability_reaches_the_same_store() {
    let mut store = NotificationStore::new();

    // A handler that only holds the capability can still report.
    {
        let mut reporter = store.reporter();
        reporter.push("reported through the capability", None);
    }

    let record = store.errors().next().expect("record should be live");
    assert_eq!(record.message(), "reported through the capability");

    let id = record.id();
    store.reporter().dismiss(id);
    assert!(store.is_empty());
}

#[test]
fn display_order_is_push_order_filtered_by_dismissals() {
    let mut store = NotificationStore::new();
    for message in ["a", "b", "c", "d", "e"] {
        store.push(message, None);
    }
    let ids: Vec<_> = store.errors().map(ErrorRecord::id).collect();

    // Dismiss "e" (newest) and "b".
    store.dismiss(ids[0]);
    store.dismiss(ids[3]);

    let remaining: Vec<_> = store.errors().map(ErrorRecord::message).collect();
    assert_eq!(remaining, vec!["d", "c", "a"]);
}
