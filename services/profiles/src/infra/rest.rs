//! `profiles` table accessed through a PostgREST endpoint (the REST surface
//! of a hosted Supabase project).

use anyhow::{Context as _, anyhow};
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use staffdesk_domain::department::Department;
use staffdesk_domain::role::Role;

use crate::domain::repository::ProfileStore;
use crate::domain::types::Profile;
use crate::error::ProfilesServiceError;

const TABLE_PATH: &str = "/rest/v1/profiles";

#[derive(Clone)]
pub struct RestProfileStore {
    client: Client,
    table_url: String,
    api_key: String,
}

impl RestProfileStore {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url, api_key)
    }

    pub fn with_client(client: Client, base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client,
            table_url: format!("{}{TABLE_PATH}", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        }
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

impl ProfileStore for RestProfileStore {
    async fn insert(&self, profile: &Profile) -> Result<(), ProfilesServiceError> {
        let response = self
            .authorized(self.client.post(&self.table_url))
            .header("Prefer", "return=minimal")
            .json(&[ProfileRow::from(profile)])
            .send()
            .await
            .context("send profile insert")?;
        ensure_success(response).await.context("insert profile")?;
        Ok(())
    }

    async fn list_by_full_name(&self) -> Result<Vec<Profile>, ProfilesServiceError> {
        let response = self
            .authorized(
                self.client
                    .get(format!("{}?select=*&order=full_name.asc", self.table_url)),
            )
            .send()
            .await
            .context("send profile select")?;
        let rows: Vec<ProfileRow> = ensure_success(response)
            .await
            .context("list profiles by full_name")?
            .json()
            .await
            .context("decode profile rows")?;
        Ok(rows.into_iter().map(Profile::from).collect())
    }
}

async fn ensure_success(response: reqwest::Response) -> anyhow::Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(anyhow!("PostgREST responded {status}: {body}"))
}

/// Row shape on the wire. Extra columns returned by the table are ignored.
#[derive(Debug, Serialize, Deserialize)]
struct ProfileRow {
    id: Uuid,
    full_name: String,
    username: String,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    department: Department,
    role: Role,
    hire_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<&Profile> for ProfileRow {
    fn from(p: &Profile) -> Self {
        Self {
            id: p.id,
            full_name: p.full_name.clone(),
            username: p.username.clone(),
            email: Some(p.email.clone()),
            phone: p.phone.clone(),
            address: p.address.clone(),
            department: p.department,
            role: p.role,
            hire_date: p.hire_date,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
            username: row.username,
            email: row.email.unwrap_or_default(),
            phone: row.phone,
            address: row.address,
            department: row.department,
            role: row.role,
            hire_date: row.hire_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
