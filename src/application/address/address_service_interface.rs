use crate::core::error::AppResult;
use crate::domain::session::UserSession;
use crate::presentation::address::address::{
    AddressSerializer, CreateAddressRequest, UpdateAddressRequest,
};

pub trait AddressServiceInterface: Send + Sync + 'static {
    async fn create_address(
        &self,
        session: &UserSession,
        request: CreateAddressRequest,
    ) -> AppResult<AddressSerializer>;

    async fn update_address(
        &self,
        session: &UserSession,
        id: &str,
        request: UpdateAddressRequest,
    ) -> AppResult<AddressSerializer>;

    async fn get_address_by_id(&self, id: &str) -> AppResult<AddressSerializer>;

    async fn get_addresses_by_user_id(&self, user_id: &str) -> AppResult<Vec<AddressSerializer>>;

    async fn get_public_addresses(&self) -> AppResult<Vec<AddressSerializer>>;

    async fn count_addresses_by_user_id(&self, user_id: &str) -> AppResult<u64>;

    async fn delete_address(&self, session: &UserSession, id: &str) -> AppResult<bool>;
}
