use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::AppResult;
use crate::domain::address::rules::*;
use crate::domain::business_rule_interface::BusinessRuleInterface;
use crate::domain::session::UserSession;
use crate::presentation::address::address::{CreateAddressRequest, UpdateAddressRequest};

/// Geographic point attached to an address.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// A bookmarked place. Wire shape is camelCase to match the deployed
/// dataset; `created_at`/`updated_at` are store-assigned and the values set
/// here are provisional until the document comes back from a write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    // Deployed documents spell this key with uppercase URL.
    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub location: Location,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Domain Business Rules - Create and validate Models
impl Address {
    /// Business Rule: Create a new address model with validation. Ownership
    /// comes from the session; the id is client-generated, the way the
    /// original client minted document references before writing.
    pub fn create_new_address(
        session: &UserSession,
        request: &CreateAddressRequest,
    ) -> AppResult<Self> {
        NameMustNotBeEmpty { name: request.name.clone() }.check_broken()?;
        LocationMustBeValid { location: request.location }.check_broken()?;

        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            user_id: session.user_id.clone(),
            name: request.name.trim().to_string(),
            description: request.description.clone(),
            photo_url: request.photo_url.clone(),
            location: request.location,
            is_public: request.is_public,
            created_at: now,
            updated_at: now,
        })
    }

    /// Business Rule: Update address model with validation.
    pub fn update_from(mut self, request: &UpdateAddressRequest) -> AppResult<Self> {
        if let Some(ref name) = request.name {
            NameMustNotBeEmpty { name: name.clone() }.check_broken()?;
            self.name = name.trim().to_string();
        }

        if let Some(location) = request.location {
            LocationMustBeValid { location }.check_broken()?;
            self.location = location;
        }

        if let Some(ref description) = request.description {
            self.description = description.clone();
        }

        if let Some(ref photo_url) = request.photo_url {
            self.photo_url = Some(photo_url.clone());
        }

        if let Some(is_public) = request.is_public {
            self.is_public = is_public;
        }

        Ok(self)
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}
