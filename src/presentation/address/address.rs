use crate::domain::address::address::{Address, Location};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AddressSerializer {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub photo_url: Option<String>,
    pub location: Location,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Address> for AddressSerializer {
    fn from(value: Address) -> Self {
        AddressSerializer {
            id: value.id,
            user_id: value.user_id,
            name: value.name,
            description: value.description,
            photo_url: value.photo_url,
            location: value.location,
            is_public: value.is_public,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreateAddressRequest {
    pub name: String,
    pub description: String,
    pub photo_url: Option<String>,
    pub location: Location,
    pub is_public: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct UpdateAddressRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub photo_url: Option<String>,
    pub location: Option<Location>,
    pub is_public: Option<bool>,
}
