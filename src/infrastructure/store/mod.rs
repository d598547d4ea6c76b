use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::core::error::AppResult;

pub mod document;
pub mod memory;
pub mod subscription;

pub use document::{Document, Predicate, SnapshotEvent, SortOrder};
pub use memory::MemoryStore;
pub use subscription::{Subscription, SubscriptionHandle};

/// The backend document/query boundary. The mobile shell plugs in the real
/// provider adapter; tests and the sandbox run on [`MemoryStore`].
///
/// `subscribe` follows the provider's live-query contract: the complete
/// current result set is delivered on connect and again on every change to
/// a document of the collection. Delivery is at-least-once; consumers must
/// treat a repeated snapshot as a no-op.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Upsert. The store assigns `created_at` on first write and refreshes
    /// `updated_at` on every write; values for those keys inside `fields`
    /// are ignored.
    async fn write(
        &self,
        collection: &str,
        doc_id: &str,
        fields: Map<String, Value>,
    ) -> AppResult<Document>;

    async fn read(&self, collection: &str, doc_id: &str) -> AppResult<Option<Document>>;

    /// One-shot query.
    async fn query(
        &self,
        collection: &str,
        predicate: &Predicate,
        order: SortOrder,
    ) -> AppResult<Vec<Document>>;

    async fn delete(&self, collection: &str, doc_id: &str) -> AppResult<()>;

    /// Live query. Establishing the subscription is synchronous; the first
    /// snapshot is already buffered when this returns.
    fn subscribe(&self, collection: &str, predicate: Predicate, order: SortOrder) -> Subscription;
}
