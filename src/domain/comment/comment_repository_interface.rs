use async_trait::async_trait;

use crate::core::error::AppResult;
use crate::domain::comment::comment::Comment;
use crate::infrastructure::model::comment_repository::CommentSubscription;

#[async_trait]
pub trait CommentRepositoryInterface: Send + Sync {
    async fn create_comment(&self, model: Comment) -> AppResult<Comment>;
    async fn find_comment_by_id(&self, id: &str) -> AppResult<Option<Comment>>;
    async fn find_comments_by_address_id(&self, address_id: &str) -> AppResult<Vec<Comment>>;
    async fn find_comments_by_user_id(&self, user_id: &str) -> AppResult<Vec<Comment>>;
    async fn count_comments_by_user_id(&self, user_id: &str) -> AppResult<u64>;
    async fn delete_comment(&self, id: &str) -> AppResult<()>;

    /// Live query over one address's comments, newest first.
    fn subscribe_address_comments(&self, address_id: &str) -> AppResult<CommentSubscription>;
}
