use crate::infra::store::ProfileStoreBackend;
use crate::view::listing::ProfileListing;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub store: ProfileStoreBackend,
    pub listing: ProfileListing<ProfileStoreBackend>,
}

impl AppState {
    pub fn new(store: ProfileStoreBackend) -> Self {
        Self {
            listing: ProfileListing::new(store.clone()),
            store,
        }
    }

    pub fn profile_store(&self) -> ProfileStoreBackend {
        self.store.clone()
    }
}
