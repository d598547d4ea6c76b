use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use tokio::sync::mpsc;

use crate::core::error::AppResult;
use crate::infrastructure::constant::{FIELD_CREATED_AT, FIELD_ID, FIELD_UPDATED_AT};
use crate::infrastructure::store::document::{Document, Predicate, SnapshotEvent, SortOrder};
use crate::infrastructure::store::subscription::{Subscription, SubscriptionHandle};
use crate::infrastructure::store::DocumentStore;

struct Listener {
    collection: String,
    predicate: Predicate,
    order: SortOrder,
    sender: mpsc::UnboundedSender<SnapshotEvent>,
    handle: SubscriptionHandle,
}

/// In-memory [`DocumentStore`] with the provider's push-on-change,
/// full-snapshot live-query semantics. Backs the integration tests and the
/// sandbox binary; the mobile shell swaps in the real provider adapter.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, HashMap<String, Document>>>,
    listeners: Mutex<Vec<Listener>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fault hook: delivers a subscription error to every live listener on
    /// `collection`, as a real backend would on permission loss or
    /// disconnect. Listener state is otherwise untouched.
    pub fn inject_subscription_error(&self, collection: &str, message: &str) {
        let listeners = self.listeners.lock();
        for listener in listeners.iter() {
            if listener.collection == collection && listener.handle.is_active() {
                let _ = listener
                    .sender
                    .send(SnapshotEvent::Error(message.to_string()));
            }
        }
    }

    fn result_set(docs: &HashMap<String, Document>, predicate: &Predicate, order: SortOrder) -> Vec<Document> {
        let mut result: Vec<Document> = docs
            .values()
            .filter(|doc| predicate.matches(doc))
            .cloned()
            .collect();
        match order {
            SortOrder::CreatedAtDesc => {
                result.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
            }
            SortOrder::Unspecified => {
                // Keep iteration stable for callers that compare snapshots.
                result.sort_by(|a, b| a.id.cmp(&b.id));
            }
        }
        result
    }

    /// Pushes the current result set of `collection` to every live listener
    /// on it, pruning listeners that unsubscribed or hung up.
    fn notify_collection(&self, collection: &str) {
        let docs = {
            let collections = self.collections.lock();
            collections.get(collection).cloned().unwrap_or_default()
        };

        let mut listeners = self.listeners.lock();
        listeners.retain(|l| l.handle.is_active() && !l.sender.is_closed());
        for listener in listeners.iter() {
            if listener.collection != collection {
                continue;
            }
            let snapshot = Self::result_set(&docs, &listener.predicate, listener.order);
            let _ = listener.sender.send(SnapshotEvent::Snapshot(snapshot));
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn write(
        &self,
        collection: &str,
        doc_id: &str,
        mut fields: Map<String, Value>,
    ) -> AppResult<Document> {
        // Timestamps and the id are the store's to assign.
        fields.remove(FIELD_ID);
        fields.remove(FIELD_CREATED_AT);
        fields.remove(FIELD_UPDATED_AT);

        let now = Utc::now();
        let document = {
            let mut collections = self.collections.lock();
            let docs = collections.entry(collection.to_string()).or_default();
            let created_at = docs.get(doc_id).map(|d| d.created_at).unwrap_or(now);
            let document = Document {
                id: doc_id.to_string(),
                fields,
                created_at,
                updated_at: now,
            };
            docs.insert(doc_id.to_string(), document.clone());
            document
        };

        self.notify_collection(collection);
        Ok(document)
    }

    async fn read(&self, collection: &str, doc_id: &str) -> AppResult<Option<Document>> {
        let collections = self.collections.lock();
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(doc_id))
            .cloned())
    }

    async fn query(
        &self,
        collection: &str,
        predicate: &Predicate,
        order: SortOrder,
    ) -> AppResult<Vec<Document>> {
        let collections = self.collections.lock();
        let docs = match collections.get(collection) {
            Some(docs) => docs,
            None => return Ok(Vec::new()),
        };
        Ok(Self::result_set(docs, predicate, order))
    }

    async fn delete(&self, collection: &str, doc_id: &str) -> AppResult<()> {
        let removed = {
            let mut collections = self.collections.lock();
            collections
                .get_mut(collection)
                .and_then(|docs| docs.remove(doc_id))
        };

        // Deleting an absent document is a no-op, as on the real backend.
        if removed.is_some() {
            self.notify_collection(collection);
        }
        Ok(())
    }

    fn subscribe(&self, collection: &str, predicate: Predicate, order: SortOrder) -> Subscription {
        let (sender, subscription) = Subscription::channel();

        // The connect snapshot and the registration happen under the
        // collections lock, so a concurrent write can neither miss the new
        // listener nor slip between snapshot and registration. Lock order
        // (collections, then listeners) matches notify_collection.
        let collections = self.collections.lock();
        let docs = collections.get(collection).cloned().unwrap_or_default();
        let initial = Self::result_set(&docs, &predicate, order);
        let _ = sender.send(SnapshotEvent::Snapshot(initial));

        self.listeners.lock().push(Listener {
            collection: collection.to_string(),
            predicate,
            order,
            sender,
            handle: subscription.handle(),
        });
        drop(collections);

        subscription
    }
}
