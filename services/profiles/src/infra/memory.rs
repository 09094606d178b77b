use std::sync::{Arc, PoisonError, RwLock};

use anyhow::anyhow;

use crate::domain::repository::ProfileStore;
use crate::domain::types::Profile;
use crate::error::ProfilesServiceError;

/// Process-local profile table. Mirrors the unique constraints of the
/// `profiles` table so local runs fail the same way a real insert would.
#[derive(Clone, Default)]
pub struct MemoryProfileStore {
    rows: Arc<RwLock<Vec<Profile>>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: impl IntoIterator<Item = Profile>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows.into_iter().collect())),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProfileStore for MemoryProfileStore {
    async fn insert(&self, profile: &Profile) -> Result<(), ProfilesServiceError> {
        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(clash) = rows.iter().find(|r| {
            r.id == profile.id || r.username == profile.username || r.email == profile.email
        }) {
            let column = if clash.id == profile.id {
                "id"
            } else if clash.username == profile.username {
                "username"
            } else {
                "email"
            };
            return Err(anyhow!("duplicate key value violates unique constraint on profiles.{column}").into());
        }
        rows.push(profile.clone());
        Ok(())
    }

    async fn list_by_full_name(&self) -> Result<Vec<Profile>, ProfilesServiceError> {
        let mut rows = self
            .rows
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        rows.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(rows)
    }
}
