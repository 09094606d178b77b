use sea_orm::Database;
use serde::Deserialize;

use staffdesk_core::config::Config;

use crate::infra::db::DbProfileStore;
use crate::infra::memory::MemoryProfileStore;
use crate::infra::rest::RestProfileStore;
use crate::infra::store::ProfileStoreBackend;

/// Which persistence backend the service talks to. Env var: `STORE_BACKEND`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackendKind {
    /// sea-orm over PostgreSQL.
    #[default]
    Postgres,
    /// PostgREST / Supabase REST endpoint.
    Rest,
    /// Process-local, lost on restart.
    Memory,
}

impl StoreBackendKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Rest => "rest",
            Self::Memory => "memory",
        }
    }
}

/// Profiles service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct ProfilesConfig {
    /// TCP port for the HTTP server (default 3114). Env var: `PROFILES_PORT`.
    #[serde(default = "default_port")]
    pub profiles_port: u16,
    #[serde(default)]
    pub store_backend: StoreBackendKind,
    /// PostgreSQL connection URL, required for the `postgres` backend.
    pub database_url: Option<String>,
    /// Project URL (e.g. "https://abc.supabase.co"), required for `rest`.
    pub supabase_url: Option<String>,
    /// Public anon key sent as `apikey` and bearer token, required for `rest`.
    pub supabase_anon_key: Option<String>,
    /// Fetch the listing once at startup (default true).
    #[serde(default = "default_auto_refresh")]
    pub listing_auto_refresh: bool,
}

impl Config for ProfilesConfig {}

fn default_port() -> u16 {
    3114
}

fn default_auto_refresh() -> bool {
    true
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid environment: {0}")]
    Env(#[from] envy::Error),
    #[error("{var} is required when STORE_BACKEND={backend}")]
    Missing {
        var: &'static str,
        backend: &'static str,
    },
    #[error("failed to connect to database")]
    Connect(#[source] sea_orm::DbErr),
}

/// Backend settings after the per-backend requirements have been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSettings {
    Postgres { database_url: String },
    Rest { base_url: String, anon_key: String },
    Memory,
}

impl ProfilesConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::try_from_env()?;
        config.store_settings()?;
        Ok(config)
    }

    pub fn store_settings(&self) -> Result<StoreSettings, ConfigError> {
        let backend = self.store_backend.as_str();
        let require = |value: &Option<String>, var: &'static str| {
            value
                .clone()
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing { var, backend })
        };
        Ok(match self.store_backend {
            StoreBackendKind::Postgres => StoreSettings::Postgres {
                database_url: require(&self.database_url, "DATABASE_URL")?,
            },
            StoreBackendKind::Rest => StoreSettings::Rest {
                base_url: require(&self.supabase_url, "SUPABASE_URL")?,
                anon_key: require(&self.supabase_anon_key, "SUPABASE_ANON_KEY")?,
            },
            StoreBackendKind::Memory => StoreSettings::Memory,
        })
    }

    pub async fn connect_store(&self) -> Result<ProfileStoreBackend, ConfigError> {
        Ok(match self.store_settings()? {
            StoreSettings::Postgres { database_url } => {
                let db = Database::connect(&database_url)
                    .await
                    .map_err(ConfigError::Connect)?;
                DbProfileStore { db }.into()
            }
            StoreSettings::Rest { base_url, anon_key } => {
                RestProfileStore::new(&base_url, anon_key).into()
            }
            StoreSettings::Memory => MemoryProfileStore::new().into(),
        })
    }
}
