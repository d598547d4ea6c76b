use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::AppResult;
use crate::domain::comment::comment::Comment;
use crate::domain::comment::comment_repository_interface::CommentRepositoryInterface;
use crate::infrastructure::constant::COMMENTS_COLLECTION;
use crate::infrastructure::model::{decode_document, decode_documents, document_fields};
use crate::infrastructure::store::{
    DocumentStore, Predicate, SnapshotEvent, SortOrder, Subscription, SubscriptionHandle,
};

#[derive(Debug, Clone)]
pub enum CommentSnapshotEvent {
    Snapshot(Vec<Comment>),
    Error(String),
}

/// Typed wrapper over a raw store subscription on the comments collection.
pub struct CommentSubscription {
    inner: Subscription,
}

impl CommentSubscription {
    pub fn handle(&self) -> SubscriptionHandle {
        self.inner.handle()
    }

    pub fn unsubscribe(&self) {
        self.inner.unsubscribe();
    }

    pub async fn recv(&mut self) -> Option<CommentSnapshotEvent> {
        match self.inner.recv().await? {
            SnapshotEvent::Snapshot(documents) => Some(CommentSnapshotEvent::Snapshot(
                decode_documents(&documents, "comment"),
            )),
            SnapshotEvent::Error(message) => Some(CommentSnapshotEvent::Error(message)),
        }
    }
}

pub struct CommentRepository {
    store: Arc<dyn DocumentStore>,
}

impl CommentRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommentRepositoryInterface for CommentRepository {
    async fn create_comment(&self, model: Comment) -> AppResult<Comment> {
        let fields = document_fields(&model)?;
        let document = self
            .store
            .write(COMMENTS_COLLECTION, &model.id, fields)
            .await?;
        decode_document(&document)
    }

    async fn find_comment_by_id(&self, id: &str) -> AppResult<Option<Comment>> {
        let document = self.store.read(COMMENTS_COLLECTION, id).await?;
        document.as_ref().map(decode_document).transpose()
    }

    async fn find_comments_by_address_id(&self, address_id: &str) -> AppResult<Vec<Comment>> {
        let documents = self
            .store
            .query(
                COMMENTS_COLLECTION,
                &Predicate::AddressIdEq(address_id.to_string()),
                SortOrder::CreatedAtDesc,
            )
            .await?;
        Ok(decode_documents(&documents, "comment"))
    }

    async fn find_comments_by_user_id(&self, user_id: &str) -> AppResult<Vec<Comment>> {
        let documents = self
            .store
            .query(
                COMMENTS_COLLECTION,
                &Predicate::UserIdEq(user_id.to_string()),
                SortOrder::CreatedAtDesc,
            )
            .await?;
        Ok(decode_documents(&documents, "comment"))
    }

    async fn count_comments_by_user_id(&self, user_id: &str) -> AppResult<u64> {
        let documents = self
            .store
            .query(
                COMMENTS_COLLECTION,
                &Predicate::UserIdEq(user_id.to_string()),
                SortOrder::Unspecified,
            )
            .await?;
        Ok(documents.len() as u64)
    }

    async fn delete_comment(&self, id: &str) -> AppResult<()> {
        self.store.delete(COMMENTS_COLLECTION, id).await
    }

    fn subscribe_address_comments(&self, address_id: &str) -> AppResult<CommentSubscription> {
        let inner = self.store.subscribe(
            COMMENTS_COLLECTION,
            Predicate::AddressIdEq(address_id.to_string()),
            SortOrder::CreatedAtDesc,
        );
        Ok(CommentSubscription { inner })
    }
}
