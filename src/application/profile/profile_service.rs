use std::sync::Arc;

use log::info;

use crate::application::profile::profile_service_interface::ProfileServiceInterface;
use crate::core::error::{AppError, AppResult};
use crate::domain::address::address_repository_interface::AddressRepositoryInterface;
use crate::domain::comment::comment_repository_interface::CommentRepositoryInterface;
use crate::domain::session::UserSession;
use crate::domain::user::user::UserProfile;
use crate::domain::user::user_repository_interface::ProfileRepositoryInterface;
use crate::presentation::user::user::{ProfileSerializer, ProfileStatsSerializer};

/// Application service - maintains the `users` collection next to provider auth
pub struct ProfileService {
    pub repository: Arc<dyn ProfileRepositoryInterface>,
    pub address_repository: Arc<dyn AddressRepositoryInterface>,
    pub comment_repository: Arc<dyn CommentRepositoryInterface>,
}

impl ProfileService {
    pub fn new(
        repository: Arc<dyn ProfileRepositoryInterface>,
        address_repository: Arc<dyn AddressRepositoryInterface>,
        comment_repository: Arc<dyn CommentRepositoryInterface>,
    ) -> Self {
        Self { repository, address_repository, comment_repository }
    }
}

impl ProfileServiceInterface for ProfileService {
    async fn ensure_profile(&self, session: &UserSession) -> AppResult<ProfileSerializer> {
        if let Some(existing) = self.repository.find_profile_by_id(&session.user_id).await? {
            return Ok(ProfileSerializer::from(existing));
        }

        // Domain: first sign-in for this account, create its document
        let profile = UserProfile::create_from_session(session)?;
        let created = self.repository.save_profile(profile).await?;
        info!("created profile document for user {}", created.id);

        Ok(ProfileSerializer::from(created))
    }

    async fn get_profile(&self, user_id: &str) -> AppResult<ProfileSerializer> {
        let profile = self.repository.find_profile_by_id(user_id).await?.ok_or_else(|| {
            AppError::EntityNotFoundError {
                detail: format!("Profile with id {} not found", user_id),
            }
        })?;

        Ok(ProfileSerializer::from(profile))
    }

    async fn profile_stats(&self, session: &UserSession) -> AppResult<ProfileStatsSerializer> {
        let (address_count, comment_count) = tokio::join!(
            self.address_repository.count_addresses_by_user_id(&session.user_id),
            self.comment_repository.count_comments_by_user_id(&session.user_id),
        );

        Ok(ProfileStatsSerializer {
            address_count: address_count?,
            comment_count: comment_count?,
        })
    }
}
