use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use parking_lot::Mutex;

use good_addresses_core::application::media::ImageTranscoder;
use good_addresses_core::core::app_state::AppState;
use good_addresses_core::core::configure::AppConfig;
use good_addresses_core::core::error::{AppError, AppResult};
use good_addresses_core::domain::address::address::{Address, Location};
use good_addresses_core::domain::session::UserSession;
use good_addresses_core::infrastructure::store::MemoryStore;
use good_addresses_core::presentation::address::address::CreateAddressRequest;
use good_addresses_core::presentation::comment::comment::CreateCommentRequest;

/// App state over a fresh in-memory store. The store is returned separately
/// so tests can reach its fault hook.
pub fn build_state() -> (Arc<MemoryStore>, AppState) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(AppConfig::default(), store.clone())
        .expect("Failed to build test app state");
    (store, state)
}

pub fn test_session(user_id: &str) -> UserSession {
    UserSession::new(user_id, format!("{}@example.com", user_id))
        .with_display_name(format!("Test {}", user_id))
}

/// Session without a profile name, for the anonymous-author fallback.
pub fn anonymous_session(user_id: &str) -> UserSession {
    UserSession::new(user_id, format!("{}@example.com", user_id))
}

pub fn address_request(name: &str, is_public: bool) -> CreateAddressRequest {
    CreateAddressRequest {
        name: name.to_string(),
        description: format!("{} description", name),
        photo_url: None,
        location: Location { latitude: 48.85, longitude: 2.35 },
        is_public,
    }
}

pub fn comment_request(address_id: &str, text: &str) -> CreateCommentRequest {
    CreateCommentRequest {
        address_id: address_id.to_string(),
        text: text.to_string(),
        photos: Vec::new(),
    }
}

/// Bare address model for exercising the merge function directly.
pub fn make_address(id: &str, user_id: &str, is_public: bool) -> Address {
    let now = Utc::now();
    Address {
        id: id.to_string(),
        user_id: user_id.to_string(),
        name: format!("Address {}", id),
        description: String::new(),
        photo_url: None,
        location: Location { latitude: 0.0, longitude: 0.0 },
        is_public,
        created_at: now,
        updated_at: now,
    }
}

/// Helper to check if a result contains a specific error message
pub fn assert_error_contains(error: &AppError, expected: &str) -> bool {
    match error {
        AppError::BadRequestError(msg) => msg.contains(expected),
        AppError::NotFound(msg) => msg.contains(expected),
        AppError::UnauthorizedError(msg) => msg.contains(expected),
        AppError::EntityNotFoundError { detail } => detail.contains(expected),
        AppError::EntityExistsError { detail } => detail.contains(expected),
        AppError::InvalidPayloadError(msg) => msg.contains(expected),
        AppError::StoreError(msg) => msg.contains(expected),
        AppError::SubscriptionError(msg) => msg.contains(expected),
        AppError::ImageError(msg) => msg.contains(expected),
        _ => false,
    }
}

/// Helper to wait for async operations
pub async fn wait_for_condition<F, Fut>(mut check: F, max_attempts: u32) -> bool
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    for _ in 0..max_attempts {
        if check().await {
            return true;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
    }
    false
}

/// Deterministic stand-in for the platform codec: the encoded length is
/// `max_width * quality * bytes_per_unit`, so output shrinks as the budget
/// loop steps quality and width down. Every call is recorded.
pub struct FakeTranscoder {
    pub bytes_per_unit: f64,
    pub calls: Mutex<Vec<(u32, f32)>>,
    pub attempt_count: AtomicU32,
}

impl FakeTranscoder {
    pub fn new(bytes_per_unit: f64) -> Self {
        Self {
            bytes_per_unit,
            calls: Mutex::new(Vec::new()),
            attempt_count: AtomicU32::new(0),
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempt_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageTranscoder for FakeTranscoder {
    async fn transcode(&self, _source_uri: &str, max_width: u32, quality: f32) -> AppResult<Bytes> {
        self.attempt_count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().push((max_width, quality));
        let len = (max_width as f64 * quality as f64 * self.bytes_per_unit) as usize;
        Ok(Bytes::from(vec![0u8; len.max(1)]))
    }
}
