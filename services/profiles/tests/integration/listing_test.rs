use std::sync::Arc;
use std::sync::atomic::Ordering;

use chrono::Utc;
use tokio::sync::Notify;
use uuid::Uuid;

use staffdesk_domain::department::Department;
use staffdesk_domain::role::Role;
use staffdesk_profiles::domain::repository::ProfileStore;
use staffdesk_profiles::domain::types::Profile;
use staffdesk_profiles::view::listing::{
    LOADING_LABEL, ListingPhase, ProfileListing, SHOW_ALL_LABEL, render_listing,
};

use crate::helpers::MockProfileStore;

fn profile(full_name: &str, username: &str) -> Profile {
    let now = Utc::now();
    Profile {
        id: Uuid::new_v4(),
        full_name: full_name.into(),
        username: username.into(),
        email: format!("{username}@example.gr"),
        phone: None,
        address: None,
        department: Department::Marketing,
        role: Role::Employee,
        hire_date: None,
        created_at: now,
        updated_at: now,
    }
}

async fn seeded(names: &[(&str, &str)]) -> MockProfileStore {
    let store = MockProfileStore::empty();
    for (full_name, username) in names {
        store.insert(&profile(full_name, username)).await.unwrap();
    }
    store
}

#[tokio::test]
async fn should_start_idle_and_empty() {
    let listing = ProfileListing::new(MockProfileStore::empty());
    let view = render_listing(&listing.snapshot());
    assert!(!view.loading);
    assert!(!view.show_table);
    assert_eq!(view.button_label, SHOW_ALL_LABEL);
}

#[tokio::test]
async fn should_order_rows_by_full_name() {
    let store = seeded(&[("Zoe Z", "zoe"), ("Adam A", "adam"), ("Maria M", "maria")]).await;
    let listing = ProfileListing::new(store);

    let view = render_listing(&listing.refresh().await);
    let names: Vec<_> = view.rows.iter().map(|r| r.full_name.as_str()).collect();
    assert_eq!(names, ["Adam A", "Maria M", "Zoe Z"]);
    assert!(view.show_table);
    assert!(view.button_enabled);
}

#[tokio::test]
async fn should_return_equal_sequences_without_writes() {
    let store = seeded(&[("Jane Doe", "jdoe"), ("John Roe", "jroe")]).await;
    let listing = ProfileListing::new(store.clone());

    let first = listing.refresh().await.profiles;
    let second = listing.refresh().await.profiles;
    assert_eq!(first, second);
    assert_eq!(store.list_calls(), 2);
}

#[tokio::test]
async fn should_keep_previous_rows_when_fetch_fails() {
    let store = seeded(&[("Jane Doe", "jdoe")]).await;
    let listing = ProfileListing::new(store.clone());
    listing.refresh().await;

    store.fail_list.store(true, Ordering::SeqCst);
    let state = listing.refresh().await;

    assert_eq!(state.phase, ListingPhase::Idle);
    assert_eq!(state.profiles.len(), 1);
    assert_eq!(state.profiles[0].username, "jdoe");
}

#[tokio::test]
async fn should_join_fetch_already_in_flight() {
    let gate = Arc::new(Notify::new());
    let store = MockProfileStore::gated(Arc::clone(&gate));
    store.rows.lock().unwrap().push(profile("Jane Doe", "jdoe"));
    let listing = ProfileListing::new(store.clone());

    let first = {
        let listing = listing.clone();
        tokio::spawn(async move { listing.refresh().await })
    };
    // Wait until the first fetch has reached the store.
    while store.list_calls() == 0 {
        tokio::task::yield_now().await;
    }
    let loading = render_listing(&listing.snapshot());
    assert!(loading.loading);
    assert!(!loading.button_enabled);
    assert_eq!(loading.button_label, LOADING_LABEL);

    let (second, ()) = tokio::join!(listing.refresh(), async { gate.notify_one() });
    let first = first.await.unwrap();

    assert_eq!(store.list_calls(), 1, "overlapping refresh must not fetch again");
    assert_eq!(first, second);
    assert_eq!(second.phase, ListingPhase::Idle);
    assert_eq!(second.profiles.len(), 1);
}
