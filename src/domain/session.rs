use serde::{Deserialize, Serialize};

use crate::infrastructure::constant::DEFAULT_DISPLAY_NAME;

/// Identity of the signed-in user, handed to the core by the mobile shell
/// after provider authentication. Services and feeds take this explicitly
/// instead of reading ambient auth state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

impl UserSession {
    pub fn new(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            display_name: None,
            photo_url: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }

    /// Name shown on authored content when the account has no profile name.
    pub fn display_name_or_default(&self) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string())
    }
}
