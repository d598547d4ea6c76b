use once_cell::sync::Lazy;

use crate::core::configure::AppConfig;

pub static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| AppConfig::read().expect("failed to read application configuration"));

// Backend collections.
pub const USERS_COLLECTION: &str = "users";
pub const ADDRESSES_COLLECTION: &str = "addresses";
pub const COMMENTS_COLLECTION: &str = "comments";

// Document field names shared between models and query predicates. The wire
// shape is camelCase to stay compatible with the deployed dataset.
pub const FIELD_USER_ID: &str = "userId";
pub const FIELD_ADDRESS_ID: &str = "addressId";
pub const FIELD_IS_PUBLIC: &str = "isPublic";
pub const FIELD_ID: &str = "id";
pub const FIELD_CREATED_AT: &str = "createdAt";
pub const FIELD_UPDATED_AT: &str = "updatedAt";

// Display name stored on comments written by an account with no profile name.
pub const DEFAULT_DISPLAY_NAME: &str = "Anonymous user";
