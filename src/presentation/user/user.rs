use crate::domain::user::user::UserProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProfileSerializer {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for ProfileSerializer {
    fn from(value: UserProfile) -> Self {
        ProfileSerializer {
            id: value.id,
            email: value.email,
            display_name: value.display_name,
            photo_url: value.photo_url,
            created_at: value.created_at,
        }
    }
}

/// Counters shown on the profile screen.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileStatsSerializer {
    pub address_count: u64,
    pub comment_count: u64,
}
