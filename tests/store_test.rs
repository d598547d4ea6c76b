mod common;

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Map, Value};

use good_addresses_core::infrastructure::store::{
    DocumentStore, MemoryStore, Predicate, SnapshotEvent, SortOrder,
};

fn fields(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

#[tokio::test]
async fn write_assigns_and_preserves_timestamps() {
    let store = MemoryStore::new();

    let first = store
        .write("addresses", "a1", fields(&[("name", json!("Spot"))]))
        .await
        .unwrap();
    assert_eq!(first.created_at, first.updated_at);

    tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;
    let second = store
        .write("addresses", "a1", fields(&[("name", json!("Renamed"))]))
        .await
        .unwrap();

    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at > first.updated_at);
    assert_eq!(second.fields.get("name"), Some(&json!("Renamed")));
}

#[tokio::test]
async fn client_supplied_timestamps_are_ignored() {
    let store = MemoryStore::new();

    let doc = store
        .write(
            "addresses",
            "a1",
            fields(&[("name", json!("Spot")), ("createdAt", json!("1999-01-01T00:00:00Z"))]),
        )
        .await
        .unwrap();

    assert!(!doc.fields.contains_key("createdAt"));
    assert!(doc.created_at.timestamp() > 946_684_800); // past 2000
}

#[tokio::test]
async fn read_returns_none_for_missing_documents() {
    let store = MemoryStore::new();
    assert!(store.read("addresses", "ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn query_filters_and_sorts_newest_first() {
    let store = MemoryStore::new();

    store
        .write("addresses", "old", fields(&[("userId", json!("u1")), ("isPublic", json!(true))]))
        .await
        .unwrap();
    tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;
    store
        .write("addresses", "new", fields(&[("userId", json!("u1")), ("isPublic", json!(false))]))
        .await
        .unwrap();
    store
        .write("addresses", "other", fields(&[("userId", json!("u2")), ("isPublic", json!(true))]))
        .await
        .unwrap();

    let mine = store
        .query("addresses", &Predicate::UserIdEq("u1".to_string()), SortOrder::CreatedAtDesc)
        .await
        .unwrap();
    let ids: Vec<&str> = mine.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "old"]);

    let public = store
        .query("addresses", &Predicate::IsPublicEq(true), SortOrder::CreatedAtDesc)
        .await
        .unwrap();
    assert_eq!(public.len(), 2);

    let everything = store
        .query("addresses", &Predicate::All, SortOrder::Unspecified)
        .await
        .unwrap();
    assert_eq!(everything.len(), 3);
}

#[tokio::test]
async fn delete_is_a_no_op_for_missing_documents() {
    let store = MemoryStore::new();
    store.delete("addresses", "ghost").await.unwrap();
}

#[tokio::test]
async fn subscribe_delivers_connect_snapshot_then_changes() {
    let store = MemoryStore::new();
    store
        .write("addresses", "a1", fields(&[("userId", json!("u1"))]))
        .await
        .unwrap();

    let mut subscription = store.subscribe(
        "addresses",
        Predicate::UserIdEq("u1".to_string()),
        SortOrder::CreatedAtDesc,
    );

    match subscription.recv().await {
        Some(SnapshotEvent::Snapshot(docs)) => assert_eq!(docs.len(), 1),
        other => panic!("expected connect snapshot, got {:?}", other),
    }

    store
        .write("addresses", "a2", fields(&[("userId", json!("u1"))]))
        .await
        .unwrap();

    match subscription.recv().await {
        Some(SnapshotEvent::Snapshot(docs)) => assert_eq!(docs.len(), 2),
        other => panic!("expected change snapshot, got {:?}", other),
    }
}

#[tokio::test]
async fn connect_snapshot_never_misses_a_concurrent_write() {
    for round in 0..20 {
        let store = Arc::new(MemoryStore::new());
        let writer = {
            let store = store.clone();
            let id = format!("a{}", round);
            tokio::spawn(async move {
                store
                    .write("addresses", &id, fields(&[("name", json!("Racer"))]))
                    .await
                    .unwrap();
            })
        };

        let mut subscription =
            store.subscribe("addresses", Predicate::All, SortOrder::CreatedAtDesc);
        writer.await.unwrap();

        // The write lands either in the connect snapshot or in a follow-up
        // delivery; with no further writes, one write produces at most two
        // events, and one of them must carry the document.
        let mut seen = false;
        for _ in 0..2 {
            let event = tokio::time::timeout(Duration::from_millis(200), subscription.recv())
                .await
                .expect("subscription fell silent before delivering the write");
            match event {
                Some(SnapshotEvent::Snapshot(docs)) if !docs.is_empty() => {
                    seen = true;
                    break;
                }
                Some(SnapshotEvent::Snapshot(_)) => {}
                other => panic!("unexpected event {:?}", other),
            }
        }
        assert!(seen, "round {}: write never reached the subscriber", round);
    }
}

#[tokio::test]
async fn unsubscribe_discards_buffered_deliveries() {
    let store = MemoryStore::new();

    let mut subscription = store.subscribe("addresses", Predicate::All, SortOrder::CreatedAtDesc);
    let handle = subscription.handle();

    // Buffer a delivery behind the connect snapshot, then cancel before
    // either is consumed: nothing may come through.
    store
        .write("addresses", "a1", fields(&[("name", json!("Late"))]))
        .await
        .unwrap();
    handle.unsubscribe();

    assert!(subscription.recv().await.is_none());
    assert!(subscription.recv().await.is_none());
}

#[tokio::test]
async fn injected_errors_reach_live_listeners() {
    let store = MemoryStore::new();

    let mut subscription = store.subscribe("addresses", Predicate::All, SortOrder::CreatedAtDesc);
    // Drain the connect snapshot first.
    assert!(matches!(subscription.recv().await, Some(SnapshotEvent::Snapshot(_))));

    store.inject_subscription_error("addresses", "permission denied");

    match subscription.recv().await {
        Some(SnapshotEvent::Error(message)) => assert!(message.contains("permission denied")),
        other => panic!("expected subscription error, got {:?}", other),
    }
}
