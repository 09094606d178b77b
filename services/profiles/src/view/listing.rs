//! Listing of every profile, ordered by full name.
//!
//! State is explicit: [`ProfileListing`] owns a [`ListingState`] and the
//! single in-flight fetch, and [`render_listing`] is a pure function of a
//! state snapshot.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::FutureExt as _;
use futures::future::{BoxFuture, Shared};
use serde::Serialize;
use uuid::Uuid;

use staffdesk_domain::department::Department;
use staffdesk_domain::role::Role;

use crate::domain::repository::ProfileStore;
use crate::domain::types::Profile;
use crate::usecase::profile::ListProfilesUseCase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingPhase {
    Idle,
    /// A fetch identified by `token` is outstanding.
    Loading { token: u64 },
}

impl ListingPhase {
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    pub profiles: Vec<Profile>,
    pub phase: ListingPhase,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            profiles: Vec::new(),
            phase: ListingPhase::Idle,
        }
    }
}

type SharedFetch = Shared<BoxFuture<'static, ListingState>>;

struct InFlight {
    fetch: SharedFetch,
    /// Write generation current when the fetch was started. The fetch
    /// observes every write at or below it.
    generation: u64,
}

#[derive(Default)]
struct Inner {
    state: ListingState,
    in_flight: Option<InFlight>,
    last_token: u64,
    write_generation: u64,
}

/// Owner of the listing state.
///
/// At most one fetch runs at a time: a [`refresh`](Self::refresh) issued while
/// a fetch is outstanding joins it and observes the same result.
pub struct ProfileListing<S: ProfileStore> {
    store: S,
    inner: Arc<Mutex<Inner>>,
}

impl<S: ProfileStore> Clone for ProfileListing<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ProfileStore> ProfileListing<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    pub fn snapshot(&self) -> ListingState {
        lock(&self.inner).state.clone()
    }

    /// Fetch the whole table and replace the held profiles.
    ///
    /// On failure the error is logged and the previous profiles are kept.
    /// The fetch runs on its own task, so it completes even if every caller
    /// stops waiting for it.
    pub async fn refresh(&self) -> ListingState {
        self.refresh_from(0).await
    }

    /// Refresh after a completed write. Unlike [`refresh`](Self::refresh),
    /// an in-flight fetch that started before the write is awaited and then
    /// followed by a new one, so the result always includes the write.
    pub async fn refresh_after_write(&self) -> ListingState {
        let generation = {
            let mut inner = lock(&self.inner);
            inner.write_generation += 1;
            inner.write_generation
        };
        self.refresh_from(generation).await
    }

    async fn refresh_from(&self, generation: u64) -> ListingState {
        loop {
            let (fetch, observes_generation) = self.join_or_start();
            let state = fetch.await;
            if observes_generation >= generation {
                return state;
            }
        }
    }

    /// Join the outstanding fetch, or start one when there is none.
    fn join_or_start(&self) -> (SharedFetch, u64) {
        let mut inner = lock(&self.inner);
        if let Some(in_flight) = &inner.in_flight {
            return (in_flight.fetch.clone(), in_flight.generation);
        }
        inner.last_token += 1;
        let token = inner.last_token;
        let generation = inner.write_generation;
        inner.state.phase = ListingPhase::Loading { token };
        let fetch = fetch_profiles(self.store.clone(), Arc::clone(&self.inner), token)
            .boxed()
            .shared();
        inner.in_flight = Some(InFlight {
            fetch: fetch.clone(),
            generation,
        });
        tokio::spawn(fetch.clone());
        (fetch, generation)
    }
}

async fn fetch_profiles<S: ProfileStore>(
    store: S,
    inner: Arc<Mutex<Inner>>,
    token: u64,
) -> ListingState {
    let result = ListProfilesUseCase { store }.execute().await;
    let mut inner = lock(&inner);
    match result {
        Ok(profiles) => {
            tracing::debug!(token, count = profiles.len(), "profiles listed");
            inner.state.profiles = profiles;
        }
        Err(e) => {
            let detail = format!("{e:#}");
            tracing::error!(token, error = %detail, "error fetching profiles");
        }
    }
    inner.state.phase = ListingPhase::Idle;
    inner.in_flight = None;
    inner.state.clone()
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

// ── Rendering ────────────────────────────────────────────────────────────────

pub const SHOW_ALL_LABEL: &str = "Show All Profiles";
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRow {
    pub id: Uuid,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub department: Department,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingView {
    pub loading: bool,
    pub button_label: &'static str,
    pub button_enabled: bool,
    /// False when there is nothing to show; the table is omitted entirely.
    pub show_table: bool,
    pub rows: Vec<ListingRow>,
}

pub fn render_listing(state: &ListingState) -> ListingView {
    let loading = state.phase.is_loading();
    let rows: Vec<ListingRow> = state
        .profiles
        .iter()
        .map(|p| ListingRow {
            id: p.id,
            full_name: p.full_name.clone(),
            username: p.username.clone(),
            email: p.email.clone(),
            department: p.department,
            role: p.role,
        })
        .collect();
    ListingView {
        loading,
        button_label: if loading { LOADING_LABEL } else { SHOW_ALL_LABEL },
        button_enabled: !loading,
        show_table: !rows.is_empty(),
        rows,
    }
}
