use async_trait::async_trait;

use crate::core::error::AppResult;
use crate::domain::address::address::Location;

/// Device capability boundary. The mobile shell implements these over the
/// platform permission prompts. A denied permission is a `None`, never an
/// error; errors are reserved for the capability itself failing.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_location(&self) -> AppResult<Option<Location>>;
}

/// Picks image resource handles (URIs) from the gallery or camera.
#[async_trait]
pub trait MediaPicker: Send + Sync {
    async fn pick_from_gallery(&self, max_count: usize) -> AppResult<Option<Vec<String>>>;
    async fn capture_photo(&self) -> AppResult<Option<String>>;
}

/// Fixed-answer provider for the sandbox and tests.
pub struct StaticLocationProvider {
    pub location: Option<Location>,
}

#[async_trait]
impl LocationProvider for StaticLocationProvider {
    async fn current_location(&self) -> AppResult<Option<Location>> {
        Ok(self.location)
    }
}

/// Fixed-answer picker for the sandbox and tests. Empty `uris` behaves like
/// a denied gallery permission.
pub struct StaticMediaPicker {
    pub uris: Vec<String>,
}

#[async_trait]
impl MediaPicker for StaticMediaPicker {
    async fn pick_from_gallery(&self, max_count: usize) -> AppResult<Option<Vec<String>>> {
        if self.uris.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.uris.iter().take(max_count).cloned().collect()))
    }

    async fn capture_photo(&self) -> AppResult<Option<String>> {
        Ok(self.uris.first().cloned())
    }
}
