use anyhow::Context as _;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder};

use staffdesk_domain::department::Department;
use staffdesk_domain::role::Role;
use staffdesk_profiles_schema::profiles;

use crate::domain::repository::ProfileStore;
use crate::domain::types::Profile;
use crate::error::ProfilesServiceError;

/// `profiles` table accessed directly through sea-orm.
#[derive(Clone)]
pub struct DbProfileStore {
    pub db: DatabaseConnection,
}

impl ProfileStore for DbProfileStore {
    async fn insert(&self, profile: &Profile) -> Result<(), ProfilesServiceError> {
        active_model(profile)
            .insert(&self.db)
            .await
            .context("insert profile")?;
        Ok(())
    }

    async fn list_by_full_name(&self) -> Result<Vec<Profile>, ProfilesServiceError> {
        let models = profiles::Entity::find()
            .order_by_asc(profiles::Column::FullName)
            .all(&self.db)
            .await
            .context("list profiles by full_name")?;
        let profiles = models
            .into_iter()
            .map(profile_from_model)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(profiles)
    }
}

fn active_model(profile: &Profile) -> profiles::ActiveModel {
    profiles::ActiveModel {
        id: Set(profile.id),
        full_name: Set(profile.full_name.clone()),
        username: Set(profile.username.clone()),
        email: Set(profile.email.clone()),
        phone: Set(profile.phone.clone()),
        address: Set(profile.address.clone()),
        department: Set(profile.department.as_str().to_owned()),
        role: Set(profile.role.as_str().to_owned()),
        hire_date: Set(profile.hire_date),
        created_at: Set(profile.created_at),
        updated_at: Set(profile.updated_at),
    }
}

fn profile_from_model(model: profiles::Model) -> anyhow::Result<Profile> {
    Ok(Profile {
        department: model
            .department
            .parse::<Department>()
            .with_context(|| format!("profile {} has unknown department", model.id))?,
        role: model
            .role
            .parse::<Role>()
            .with_context(|| format!("profile {} has unknown role", model.id))?,
        id: model.id,
        full_name: model.full_name,
        username: model.username,
        email: model.email,
        phone: model.phone,
        address: model.address,
        hire_date: model.hire_date,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
