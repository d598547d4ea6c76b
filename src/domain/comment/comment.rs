use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::AppResult;
use crate::domain::business_rule_interface::BusinessRuleInterface;
use crate::domain::comment::rules::*;
use crate::domain::session::UserSession;
use crate::infrastructure::constant::DEFAULT_DISPLAY_NAME;
use crate::presentation::comment::comment::CreateCommentRequest;

fn default_display_name() -> String {
    DEFAULT_DISPLAY_NAME.to_string()
}

/// An annotation on an address. Immutable after creation except for delete.
/// Photos are embedded base64 data URLs, already run through the compression
/// pipeline by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub address_id: String,
    pub user_id: String,
    // Deployed documents may lack this key entirely.
    #[serde(default = "default_display_name")]
    pub user_display_name: String,
    // Deployed documents spell this key with uppercase URL.
    #[serde(rename = "userPhotoURL", skip_serializing_if = "Option::is_none")]
    pub user_photo_url: Option<String>,
    pub text: String,
    #[serde(default)]
    pub photos: Vec<String>,
    pub created_at: DateTime<Utc>,
}

// Domain Business Rules - Create and validate Models
impl Comment {
    /// Business Rule: Create a new comment model with validation. Author
    /// identity is stamped from the session; accounts without a profile name
    /// get the default display name.
    pub fn create_new_comment(
        session: &UserSession,
        request: &CreateCommentRequest,
        photo_limit: usize,
    ) -> AppResult<Self> {
        TextMustNotBeEmpty { text: request.text.clone() }.check_broken()?;
        PhotoCountMustNotExceedLimit {
            count: request.photos.len(),
            limit: photo_limit,
        }
        .check_broken()?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            address_id: request.address_id.clone(),
            user_id: session.user_id.clone(),
            user_display_name: session.display_name_or_default(),
            user_photo_url: session.photo_url.clone(),
            text: request.text.trim().to_string(),
            photos: request.photos.clone(),
            created_at: Utc::now(),
        })
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}
