mod common;

use common::helpers::{address_request, assert_error_contains, build_state, comment_request, test_session};
use good_addresses_core::application::address::address_service_interface::AddressServiceInterface;
use good_addresses_core::application::comment::comment_service_interface::CommentServiceInterface;
use good_addresses_core::presentation::address::address::UpdateAddressRequest;

#[tokio::test]
async fn create_stamps_owner_and_store_timestamps() {
    let (_store, state) = build_state();
    let alice = test_session("alice");

    let created = state
        .address_service
        .create_address(&alice, address_request("Corner café", true))
        .await
        .unwrap();

    assert_eq!(created.user_id, alice.user_id);
    assert_eq!(created.name, "Corner café");
    assert!(created.is_public);
    assert_eq!(created.created_at, created.updated_at);
}

#[tokio::test]
async fn create_rejects_blank_names_and_bad_coordinates() {
    let (_store, state) = build_state();
    let alice = test_session("alice");

    let err = state
        .address_service
        .create_address(&alice, address_request("   ", true))
        .await
        .unwrap_err();
    assert!(assert_error_contains(&err, "Name is required"));

    let mut request = address_request("Valid name", true);
    request.location.latitude = 123.0;
    let err = state
        .address_service
        .create_address(&alice, request)
        .await
        .unwrap_err();
    assert!(assert_error_contains(&err, "out of range"));
}

#[tokio::test]
async fn update_moves_updated_at_and_keeps_created_at() {
    let (_store, state) = build_state();
    let alice = test_session("alice");

    let created = state
        .address_service
        .create_address(&alice, address_request("Old name", false))
        .await
        .unwrap();

    tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;
    let updated = state
        .address_service
        .update_address(
            &alice,
            &created.id,
            UpdateAddressRequest { name: Some("New name".to_string()), ..Default::default() },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "New name");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn only_the_owner_may_update_or_delete() {
    let (_store, state) = build_state();
    let alice = test_session("alice");
    let mallory = test_session("mallory");

    let created = state
        .address_service
        .create_address(&alice, address_request("Alices spot", false))
        .await
        .unwrap();

    let err = state
        .address_service
        .update_address(
            &mallory,
            &created.id,
            UpdateAddressRequest { name: Some("Hijacked".to_string()), ..Default::default() },
        )
        .await
        .unwrap_err();
    assert!(assert_error_contains(&err, "does not belong"));

    let err = state
        .address_service
        .delete_address(&mallory, &created.id)
        .await
        .unwrap_err();
    assert!(assert_error_contains(&err, "does not belong"));
}

#[tokio::test]
async fn listing_is_newest_first_per_query() {
    let (_store, state) = build_state();
    let alice = test_session("alice");

    state
        .address_service
        .create_address(&alice, address_request("First", true))
        .await
        .unwrap();
    tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;
    state
        .address_service
        .create_address(&alice, address_request("Second", true))
        .await
        .unwrap();

    let mine = state
        .address_service
        .get_addresses_by_user_id(&alice.user_id)
        .await
        .unwrap();
    let names: Vec<&str> = mine.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Second", "First"]);

    assert_eq!(
        state.address_service.count_addresses_by_user_id(&alice.user_id).await.unwrap(),
        2
    );
}

#[tokio::test]
async fn public_listing_excludes_private_addresses() {
    let (_store, state) = build_state();
    let alice = test_session("alice");

    state
        .address_service
        .create_address(&alice, address_request("Public spot", true))
        .await
        .unwrap();
    state
        .address_service
        .create_address(&alice, address_request("Private spot", false))
        .await
        .unwrap();

    let public = state.address_service.get_public_addresses().await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].name, "Public spot");
}

#[tokio::test]
async fn delete_cascades_to_the_addresses_comments() {
    let (_store, state) = build_state();
    let alice = test_session("alice");
    let bob = test_session("bob");

    let created = state
        .address_service
        .create_address(&alice, address_request("Commented spot", true))
        .await
        .unwrap();
    state
        .comment_service
        .create_comment(&bob, comment_request(&created.id, "Nice place"))
        .await
        .unwrap();
    state
        .comment_service
        .create_comment(&alice, comment_request(&created.id, "Thanks!"))
        .await
        .unwrap();

    assert!(state.address_service.delete_address(&alice, &created.id).await.unwrap());

    let err = state.address_service.get_address_by_id(&created.id).await.unwrap_err();
    assert!(assert_error_contains(&err, "not found"));

    let remaining = state
        .comment_service
        .get_comments_by_address_id(&created.id)
        .await
        .unwrap();
    assert!(remaining.is_empty(), "cascade left comments behind");
}

#[tokio::test]
async fn deleting_a_missing_address_reports_not_found() {
    let (_store, state) = build_state();
    let alice = test_session("alice");

    let err = state
        .address_service
        .delete_address(&alice, "no-such-id")
        .await
        .unwrap_err();
    assert!(assert_error_contains(&err, "not found"));
}
