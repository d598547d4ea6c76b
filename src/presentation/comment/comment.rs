use crate::domain::comment::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CommentSerializer {
    pub id: String,
    pub address_id: String,
    pub user_id: String,
    pub user_display_name: String,
    pub user_photo_url: Option<String>,
    pub text: String,
    pub photos: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentSerializer {
    fn from(value: Comment) -> Self {
        CommentSerializer {
            id: value.id,
            address_id: value.address_id,
            user_id: value.user_id,
            user_display_name: value.user_display_name,
            user_photo_url: value.user_photo_url,
            text: value.text,
            photos: value.photos,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreateCommentRequest {
    pub address_id: String,
    pub text: String,
    /// Already-compressed photo data URLs, at most the configured limit.
    #[serde(default)]
    pub photos: Vec<String>,
}
