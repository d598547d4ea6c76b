use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use log::info;

use good_addresses_core::application::address::address_service_interface::AddressServiceInterface;
use good_addresses_core::application::comment::comment_service_interface::CommentServiceInterface;
use good_addresses_core::application::media::{compress_to_budget, ImageTranscoder};
use good_addresses_core::application::profile::profile_service_interface::ProfileServiceInterface;
use good_addresses_core::core::app_state::AppState;
use good_addresses_core::core::error::AppResult;
use good_addresses_core::domain::address::address::Location;
use good_addresses_core::domain::session::UserSession;
use good_addresses_core::infrastructure::constant::CONFIG;
use good_addresses_core::infrastructure::device::{
    LocationProvider, MediaPicker, StaticLocationProvider, StaticMediaPicker,
};
use good_addresses_core::infrastructure::store::MemoryStore;
use good_addresses_core::presentation::address::address::CreateAddressRequest;
use good_addresses_core::presentation::comment::comment::CreateCommentRequest;

/// Stand-in for the platform codec: output size shrinks with width and
/// quality, which is all the budget loop needs to demonstrate itself.
struct SandboxTranscoder;

#[async_trait]
impl ImageTranscoder for SandboxTranscoder {
    async fn transcode(&self, _source_uri: &str, max_width: u32, quality: f32) -> AppResult<Bytes> {
        let len = (max_width as f64 * quality as f64 * 1200.0) as usize;
        Ok(Bytes::from(vec![0xAB; len]))
    }
}

#[tokio::main]
async fn main() -> AppResult<()> {
    env_logger::builder()
        .filter_level(CONFIG.profile.log_level())
        .format_target(true)
        .init();

    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(CONFIG.clone(), store)?;

    let alice = UserSession::new("user-alice", "alice@example.com").with_display_name("Alice");
    let bob = UserSession::new("user-bob", "bob@example.com").with_display_name("Bob");

    state.profile_service.ensure_profile(&alice).await?;
    state.profile_service.ensure_profile(&bob).await?;

    // The shell would back these with the platform permission prompts.
    let gps = StaticLocationProvider {
        location: Some(Location { latitude: 48.8566, longitude: 2.3522 }),
    };
    let gallery = StaticMediaPicker { uris: vec!["file:///tmp/holiday.jpg".to_string()] };

    let here = match gps.current_location().await? {
        Some(location) => location,
        None => {
            info!("location permission denied, bookmarking a default point");
            Location { latitude: 0.0, longitude: 0.0 }
        }
    };

    let cafe = state
        .address_service
        .create_address(
            &alice,
            CreateAddressRequest {
                name: "Corner café".to_string(),
                description: "Best espresso in the neighbourhood".to_string(),
                photo_url: None,
                location: here,
                is_public: true,
            },
        )
        .await?;
    state
        .address_service
        .create_address(
            &alice,
            CreateAddressRequest {
                name: "Secret picnic spot".to_string(),
                description: "Keep this one to myself".to_string(),
                photo_url: None,
                location: Location { latitude: 48.8462, longitude: 2.3372 },
                is_public: false,
            },
        )
        .await?;
    state
        .address_service
        .create_address(
            &bob,
            CreateAddressRequest {
                name: "Riverside bench".to_string(),
                description: "Great sunset view".to_string(),
                photo_url: None,
                location: Location { latitude: 48.8530, longitude: 2.3499 },
                is_public: true,
            },
        )
        .await?;

    // Live merged map view for Alice.
    let feed = state.address_feed();
    let mut visible = feed.visible();
    feed.start(alice.clone())?;

    visible.changed().await.ok();
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    let names: Vec<String> = visible.borrow().iter().map(|a| a.name.clone()).collect();
    info!("alice sees (both toggles on): {:?}", names);

    feed.set_show_public(false);
    let names: Vec<String> = feed.current().iter().map(|a| a.name.clone()).collect();
    info!("alice sees (private only): {:?}", names);
    feed.set_show_public(true);

    // A comment with one compressed photo picked from the gallery.
    let picked = gallery
        .pick_from_gallery(CONFIG.image.comment_photo_limit)
        .await?
        .unwrap_or_default();
    let source = picked
        .first()
        .map(String::as_str)
        .unwrap_or("file:///tmp/holiday.jpg");
    let photo = compress_to_budget(
        &SandboxTranscoder,
        source,
        CONFIG.image.default_budget_kb,
        &CONFIG.image,
    )
    .await?;
    info!(
        "compressed photo: {} KB, met budget: {}",
        photo.achieved_size_kb, photo.met_budget
    );

    let comment = state
        .comment_service
        .create_comment(
            &bob,
            CreateCommentRequest {
                address_id: cafe.id.clone(),
                text: "Confirmed, the espresso is excellent.".to_string(),
                photos: vec![photo.data],
            },
        )
        .await?;
    info!("bob commented {} on {}", comment.id, cafe.name);

    let stats = state.profile_service.profile_stats(&alice).await?;
    info!(
        "alice profile: {} addresses, {} comments",
        stats.address_count, stats.comment_count
    );

    feed.stop();
    Ok(())
}
