use std::sync::Arc;

use crate::application::comment::comment_service_interface::CommentServiceInterface;
use crate::core::error::{AppError, AppResult};
use crate::domain::address::address_repository_interface::AddressRepositoryInterface;
use crate::domain::comment::comment::Comment;
use crate::domain::comment::comment_repository_interface::CommentRepositoryInterface;
use crate::domain::session::UserSession;
use crate::infrastructure::constant::CONFIG;
use crate::presentation::comment::comment::{CommentSerializer, CreateCommentRequest};

/// Application service - orchestrates domain logic and the document store
pub struct CommentService {
    pub repository: Arc<dyn CommentRepositoryInterface>,
    pub address_repository: Arc<dyn AddressRepositoryInterface>,
}

impl CommentService {
    pub fn new(
        repository: Arc<dyn CommentRepositoryInterface>,
        address_repository: Arc<dyn AddressRepositoryInterface>,
    ) -> Self {
        Self { repository, address_repository }
    }
}

impl CommentServiceInterface for CommentService {
    async fn create_comment(
        &self,
        session: &UserSession,
        request: CreateCommentRequest,
    ) -> AppResult<CommentSerializer> {
        // Database: comments only attach to existing addresses
        if self
            .address_repository
            .find_address_by_id(&request.address_id)
            .await?
            .is_none()
        {
            return Err(AppError::EntityNotFoundError {
                detail: format!("Address with id {} not found", request.address_id),
            });
        }

        // Domain: Create model with validation, author stamped from session
        let comment =
            Comment::create_new_comment(session, &request, CONFIG.image.comment_photo_limit)?;

        // Infrastructure: Persist comment; the store assigns the timestamp
        let created_comment = self.repository.create_comment(comment).await?;

        Ok(CommentSerializer::from(created_comment))
    }

    async fn get_comments_by_address_id(
        &self,
        address_id: &str,
    ) -> AppResult<Vec<CommentSerializer>> {
        let comments = self.repository.find_comments_by_address_id(address_id).await?;

        Ok(comments.into_iter().map(CommentSerializer::from).collect())
    }

    async fn get_comments_by_user_id(&self, user_id: &str) -> AppResult<Vec<CommentSerializer>> {
        let comments = self.repository.find_comments_by_user_id(user_id).await?;

        Ok(comments.into_iter().map(CommentSerializer::from).collect())
    }

    async fn count_comments_by_user_id(&self, user_id: &str) -> AppResult<u64> {
        self.repository.count_comments_by_user_id(user_id).await
    }

    async fn delete_comment(&self, session: &UserSession, id: &str) -> AppResult<bool> {
        let comment = self.repository.find_comment_by_id(id).await?.ok_or_else(|| {
            AppError::EntityNotFoundError {
                detail: format!("Comment with id {} not found", id),
            }
        })?;

        if !comment.is_owned_by(&session.user_id) {
            return Err(AppError::UnauthorizedError(format!(
                "Comment {} does not belong to the current user",
                id
            )));
        }

        self.repository.delete_comment(id).await?;

        Ok(true)
    }
}
