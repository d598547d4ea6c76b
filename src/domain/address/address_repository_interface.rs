use async_trait::async_trait;

use crate::core::error::AppResult;
use crate::domain::address::address::Address;
use crate::infrastructure::model::address_repository::AddressSubscription;

#[async_trait]
pub trait AddressRepositoryInterface: Send + Sync {
    async fn create_address(&self, model: Address) -> AppResult<Address>;
    async fn update_address(&self, model: Address) -> AppResult<Address>;
    async fn find_address_by_id(&self, id: &str) -> AppResult<Option<Address>>;
    async fn find_addresses_by_user_id(&self, user_id: &str) -> AppResult<Vec<Address>>;
    async fn find_public_addresses(&self) -> AppResult<Vec<Address>>;
    async fn count_addresses_by_user_id(&self, user_id: &str) -> AppResult<u64>;
    async fn delete_address(&self, id: &str) -> AppResult<()>;

    /// Live query over the user's own addresses, newest first.
    fn subscribe_user_addresses(&self, user_id: &str) -> AppResult<AddressSubscription>;
    /// Live query over every public address, newest first.
    fn subscribe_public_addresses(&self) -> AppResult<AddressSubscription>;
}
