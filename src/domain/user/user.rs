use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::AppResult;
use crate::domain::business_rule_interface::BusinessRuleInterface;
use crate::domain::session::UserSession;
use crate::domain::user::rules::EmailMustBeValid;

/// The `users` collection document maintained alongside provider
/// authentication. Created on first sign-in, then read-mostly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    // Deployed documents spell this key with uppercase URL.
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

// Domain Business Rules - Create and validate Models
impl UserProfile {
    /// Business Rule: Create the profile document for a signed-in session.
    /// The document id is the provider's user id, not a fresh uuid, so that
    /// one account maps to exactly one profile.
    pub fn create_from_session(session: &UserSession) -> AppResult<Self> {
        EmailMustBeValid { email: session.email.clone() }.check_broken()?;

        Ok(Self {
            id: session.user_id.clone(),
            email: session.email.clone(),
            display_name: session.display_name.clone(),
            photo_url: session.photo_url.clone(),
            created_at: Utc::now(),
        })
    }
}
