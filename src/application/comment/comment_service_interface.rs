use crate::core::error::AppResult;
use crate::domain::session::UserSession;
use crate::presentation::comment::comment::{CommentSerializer, CreateCommentRequest};

pub trait CommentServiceInterface: Send + Sync + 'static {
    async fn create_comment(
        &self,
        session: &UserSession,
        request: CreateCommentRequest,
    ) -> AppResult<CommentSerializer>;

    async fn get_comments_by_address_id(
        &self,
        address_id: &str,
    ) -> AppResult<Vec<CommentSerializer>>;

    async fn get_comments_by_user_id(&self, user_id: &str) -> AppResult<Vec<CommentSerializer>>;

    async fn count_comments_by_user_id(&self, user_id: &str) -> AppResult<u64>;

    async fn delete_comment(&self, session: &UserSession, id: &str) -> AppResult<bool>;
}
