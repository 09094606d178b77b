use crate::domain::repository::ProfileStore;
use crate::domain::types::Profile;
use crate::error::ProfilesServiceError;

use super::db::DbProfileStore;
use super::memory::MemoryProfileStore;
use super::rest::RestProfileStore;

/// The persistence backend selected at startup.
#[derive(Clone)]
pub enum ProfileStoreBackend {
    Postgres(DbProfileStore),
    Rest(RestProfileStore),
    Memory(MemoryProfileStore),
}

impl ProfileStoreBackend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Rest(_) => "rest",
            Self::Memory(_) => "memory",
        }
    }
}

impl ProfileStore for ProfileStoreBackend {
    async fn insert(&self, profile: &Profile) -> Result<(), ProfilesServiceError> {
        match self {
            Self::Postgres(s) => s.insert(profile).await,
            Self::Rest(s) => s.insert(profile).await,
            Self::Memory(s) => s.insert(profile).await,
        }
    }

    async fn list_by_full_name(&self) -> Result<Vec<Profile>, ProfilesServiceError> {
        match self {
            Self::Postgres(s) => s.list_by_full_name().await,
            Self::Rest(s) => s.list_by_full_name().await,
            Self::Memory(s) => s.list_by_full_name().await,
        }
    }
}

impl From<DbProfileStore> for ProfileStoreBackend {
    fn from(store: DbProfileStore) -> Self {
        Self::Postgres(store)
    }
}

impl From<RestProfileStore> for ProfileStoreBackend {
    fn from(store: RestProfileStore) -> Self {
        Self::Rest(store)
    }
}

impl From<MemoryProfileStore> for ProfileStoreBackend {
    fn from(store: MemoryProfileStore) -> Self {
        Self::Memory(store)
    }
}
