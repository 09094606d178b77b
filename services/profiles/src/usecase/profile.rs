use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::ProfileStore;
use crate::domain::types::{NewProfile, Profile};
use crate::error::ProfilesServiceError;

// ── SubmitProfile ────────────────────────────────────────────────────────────

pub struct SubmitProfileUseCase<S: ProfileStore> {
    pub store: S,
}

impl<S: ProfileStore> SubmitProfileUseCase<S> {
    /// Assign identity and timestamps, then insert once. Store errors are
    /// returned as-is; there is no retry.
    pub async fn execute(&self, input: NewProfile) -> Result<(), ProfilesServiceError> {
        let profile = input.into_profile(Uuid::new_v4(), Utc::now());
        self.store.insert(&profile).await?;
        tracing::info!(profile_id = %profile.id, "profile submitted");
        Ok(())
    }
}

// ── ListProfiles ─────────────────────────────────────────────────────────────

pub struct ListProfilesUseCase<S: ProfileStore> {
    pub store: S,
}

impl<S: ProfileStore> ListProfilesUseCase<S> {
    pub async fn execute(&self) -> Result<Vec<Profile>, ProfilesServiceError> {
        self.store.list_by_full_name().await
    }
}
