use crate::core::error::AppResult;
use crate::domain::session::UserSession;
use crate::presentation::user::user::{ProfileSerializer, ProfileStatsSerializer};

pub trait ProfileServiceInterface: Send + Sync + 'static {
    /// Read-or-create the profile document for a freshly signed-in session.
    async fn ensure_profile(&self, session: &UserSession) -> AppResult<ProfileSerializer>;

    async fn get_profile(&self, user_id: &str) -> AppResult<ProfileSerializer>;

    async fn profile_stats(&self, session: &UserSession) -> AppResult<ProfileStatsSerializer>;
}
