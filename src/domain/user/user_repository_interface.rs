use async_trait::async_trait;

use crate::core::error::AppResult;
use crate::domain::user::user::UserProfile;

#[async_trait]
pub trait ProfileRepositoryInterface: Send + Sync {
    async fn save_profile(&self, model: UserProfile) -> AppResult<UserProfile>;
    async fn find_profile_by_id(&self, id: &str) -> AppResult<Option<UserProfile>>;
}
