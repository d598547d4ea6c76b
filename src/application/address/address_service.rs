use std::sync::Arc;

use futures::future::join_all;
use log::debug;

use crate::application::address::address_service_interface::AddressServiceInterface;
use crate::core::error::{AppError, AppResult};
use crate::domain::address::address::Address;
use crate::domain::address::address_repository_interface::AddressRepositoryInterface;
use crate::domain::comment::comment_repository_interface::CommentRepositoryInterface;
use crate::domain::session::UserSession;
use crate::presentation::address::address::{
    AddressSerializer, CreateAddressRequest, UpdateAddressRequest,
};

/// Application service - orchestrates domain logic and the document store
pub struct AddressService {
    pub repository: Arc<dyn AddressRepositoryInterface>,
    pub comment_repository: Arc<dyn CommentRepositoryInterface>,
}

impl AddressService {
    pub fn new(
        repository: Arc<dyn AddressRepositoryInterface>,
        comment_repository: Arc<dyn CommentRepositoryInterface>,
    ) -> Self {
        Self { repository, comment_repository }
    }

    async fn find_owned_address(&self, session: &UserSession, id: &str) -> AppResult<Address> {
        let address = self.repository.find_address_by_id(id).await?.ok_or_else(|| {
            AppError::EntityNotFoundError {
                detail: format!("Address with id {} not found", id),
            }
        })?;

        if !address.is_owned_by(&session.user_id) {
            return Err(AppError::UnauthorizedError(format!(
                "Address {} does not belong to the current user",
                id
            )));
        }

        Ok(address)
    }
}

impl AddressServiceInterface for AddressService {
    async fn create_address(
        &self,
        session: &UserSession,
        request: CreateAddressRequest,
    ) -> AppResult<AddressSerializer> {
        // Domain: Create model with validation
        let address = Address::create_new_address(session, &request)?;

        // Infrastructure: Persist address; the store assigns the timestamps
        let created_address = self.repository.create_address(address).await?;

        Ok(AddressSerializer::from(created_address))
    }

    async fn update_address(
        &self,
        session: &UserSession,
        id: &str,
        request: UpdateAddressRequest,
    ) -> AppResult<AddressSerializer> {
        // Database: Get existing address, owner only
        let existing_address = self.find_owned_address(session, id).await?;

        // Domain: Update model with validation
        let updated_model = existing_address.update_from(&request)?;

        // Infrastructure: Persist updated address
        let updated_address = self.repository.update_address(updated_model).await?;

        Ok(AddressSerializer::from(updated_address))
    }

    async fn get_address_by_id(&self, id: &str) -> AppResult<AddressSerializer> {
        let address = self.repository.find_address_by_id(id).await?.ok_or_else(|| {
            AppError::EntityNotFoundError {
                detail: format!("Address with id {} not found", id),
            }
        })?;

        Ok(AddressSerializer::from(address))
    }

    async fn get_addresses_by_user_id(&self, user_id: &str) -> AppResult<Vec<AddressSerializer>> {
        let addresses = self.repository.find_addresses_by_user_id(user_id).await?;

        Ok(addresses.into_iter().map(AddressSerializer::from).collect())
    }

    async fn get_public_addresses(&self) -> AppResult<Vec<AddressSerializer>> {
        let addresses = self.repository.find_public_addresses().await?;

        Ok(addresses.into_iter().map(AddressSerializer::from).collect())
    }

    async fn count_addresses_by_user_id(&self, user_id: &str) -> AppResult<u64> {
        self.repository.count_addresses_by_user_id(user_id).await
    }

    /// Deletes the address together with its comments. The comment deletes
    /// and the address delete are issued concurrently and awaited jointly;
    /// the first failure is surfaced and nothing is rolled back, so a
    /// partial cascade leaves already-deleted comments gone.
    async fn delete_address(&self, session: &UserSession, id: &str) -> AppResult<bool> {
        self.find_owned_address(session, id).await?;

        let comments = self.comment_repository.find_comments_by_address_id(id).await?;
        debug!("deleting address {} and {} comments", id, comments.len());

        let comment_deletes = join_all(
            comments
                .iter()
                .map(|comment| self.comment_repository.delete_comment(&comment.id)),
        );
        let (comment_results, address_result) =
            tokio::join!(comment_deletes, self.repository.delete_address(id));

        for result in comment_results {
            result?;
        }
        address_result?;

        Ok(true)
    }
}
