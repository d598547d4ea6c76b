use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::AppResult;
use crate::domain::user::user::UserProfile;
use crate::domain::user::user_repository_interface::ProfileRepositoryInterface;
use crate::infrastructure::constant::USERS_COLLECTION;
use crate::infrastructure::model::{decode_document, document_fields};
use crate::infrastructure::store::DocumentStore;

pub struct ProfileRepository {
    store: Arc<dyn DocumentStore>,
}

impl ProfileRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileRepositoryInterface for ProfileRepository {
    async fn save_profile(&self, model: UserProfile) -> AppResult<UserProfile> {
        let fields = document_fields(&model)?;
        let document = self.store.write(USERS_COLLECTION, &model.id, fields).await?;
        decode_document(&document)
    }

    async fn find_profile_by_id(&self, id: &str) -> AppResult<Option<UserProfile>> {
        let document = self.store.read(USERS_COLLECTION, id).await?;
        document.as_ref().map(decode_document).transpose()
    }
}
