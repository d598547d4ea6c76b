use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::{AppError, AppResult};
use crate::domain::address::address::Address;
use crate::domain::address::address_repository_interface::AddressRepositoryInterface;
use crate::infrastructure::constant::ADDRESSES_COLLECTION;
use crate::infrastructure::model::{decode_document, decode_documents, document_fields};
use crate::infrastructure::store::{
    DocumentStore, Predicate, SnapshotEvent, SortOrder, Subscription, SubscriptionHandle,
};

/// What an address live query delivers to its consumer.
#[derive(Debug, Clone)]
pub enum AddressSnapshotEvent {
    Snapshot(Vec<Address>),
    Error(String),
}

/// Typed wrapper over a raw store subscription on the addresses collection.
pub struct AddressSubscription {
    inner: Subscription,
}

impl AddressSubscription {
    pub fn handle(&self) -> SubscriptionHandle {
        self.inner.handle()
    }

    pub fn unsubscribe(&self) {
        self.inner.unsubscribe();
    }

    pub async fn recv(&mut self) -> Option<AddressSnapshotEvent> {
        match self.inner.recv().await? {
            SnapshotEvent::Snapshot(documents) => Some(AddressSnapshotEvent::Snapshot(
                decode_documents(&documents, "address"),
            )),
            SnapshotEvent::Error(message) => Some(AddressSnapshotEvent::Error(message)),
        }
    }
}

pub struct AddressRepository {
    store: Arc<dyn DocumentStore>,
}

impl AddressRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AddressRepositoryInterface for AddressRepository {
    async fn create_address(&self, model: Address) -> AppResult<Address> {
        let fields = document_fields(&model)?;
        let document = self
            .store
            .write(ADDRESSES_COLLECTION, &model.id, fields)
            .await?;
        decode_document(&document)
    }

    async fn update_address(&self, model: Address) -> AppResult<Address> {
        let existing = self.store.read(ADDRESSES_COLLECTION, &model.id).await?;
        if existing.is_none() {
            return Err(AppError::EntityNotFoundError {
                detail: format!("Address with id {} not found", model.id),
            });
        }

        let fields = document_fields(&model)?;
        let document = self
            .store
            .write(ADDRESSES_COLLECTION, &model.id, fields)
            .await?;
        decode_document(&document)
    }

    async fn find_address_by_id(&self, id: &str) -> AppResult<Option<Address>> {
        let document = self.store.read(ADDRESSES_COLLECTION, id).await?;
        document.as_ref().map(decode_document).transpose()
    }

    async fn find_addresses_by_user_id(&self, user_id: &str) -> AppResult<Vec<Address>> {
        let documents = self
            .store
            .query(
                ADDRESSES_COLLECTION,
                &Predicate::UserIdEq(user_id.to_string()),
                SortOrder::CreatedAtDesc,
            )
            .await?;
        Ok(decode_documents(&documents, "address"))
    }

    async fn find_public_addresses(&self) -> AppResult<Vec<Address>> {
        let documents = self
            .store
            .query(
                ADDRESSES_COLLECTION,
                &Predicate::IsPublicEq(true),
                SortOrder::CreatedAtDesc,
            )
            .await?;
        Ok(decode_documents(&documents, "address"))
    }

    async fn count_addresses_by_user_id(&self, user_id: &str) -> AppResult<u64> {
        let documents = self
            .store
            .query(
                ADDRESSES_COLLECTION,
                &Predicate::UserIdEq(user_id.to_string()),
                SortOrder::Unspecified,
            )
            .await?;
        Ok(documents.len() as u64)
    }

    async fn delete_address(&self, id: &str) -> AppResult<()> {
        self.store.delete(ADDRESSES_COLLECTION, id).await
    }

    fn subscribe_user_addresses(&self, user_id: &str) -> AppResult<AddressSubscription> {
        let inner = self.store.subscribe(
            ADDRESSES_COLLECTION,
            Predicate::UserIdEq(user_id.to_string()),
            SortOrder::CreatedAtDesc,
        );
        Ok(AddressSubscription { inner })
    }

    fn subscribe_public_addresses(&self) -> AppResult<AddressSubscription> {
        let inner = self.store.subscribe(
            ADDRESSES_COLLECTION,
            Predicate::IsPublicEq(true),
            SortOrder::CreatedAtDesc,
        );
        Ok(AddressSubscription { inner })
    }
}
