//! HTTP client for the profiles service.

use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use staffdesk_domain::department::Department;
use staffdesk_domain::role::Role;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingRow {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub department: Department,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Listing {
    pub loading: bool,
    pub button_label: String,
    pub show_table: bool,
    pub rows: Vec<ListingRow>,
}

/// What became of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created {
        notification: Notification,
        listing: Listing,
    },
    /// The form did not validate; nothing was stored.
    Rejected {
        fields: BTreeMap<String, Vec<String>>,
    },
    /// The store refused the record.
    Failed { notification: Notification },
}

#[derive(Deserialize)]
struct CreatedBody {
    notification: Notification,
    listing: Listing,
}

#[derive(Deserialize)]
struct ErrorBody {
    kind: String,
    message: String,
    #[serde(default)]
    fields: BTreeMap<String, Vec<String>>,
    notification: Option<Notification>,
}

pub struct DeskClient {
    client: Client,
    base_url: String,
}

impl DeskClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub async fn submit(&self, candidate: &Value) -> Result<SubmitOutcome> {
        let url = format!("{}/profiles", self.base_url);
        tracing::debug!(%url, "submitting profile form");
        let resp = self
            .client
            .post(&url)
            .json(candidate)
            .send()
            .await
            .with_context(|| format!("POST {url}"))?;

        let status = resp.status();
        if status == StatusCode::CREATED {
            let body: CreatedBody = resp.json().await.context("decode submission response")?;
            return Ok(SubmitOutcome::Created {
                notification: body.notification,
                listing: body.listing,
            });
        }

        let body: ErrorBody = resp
            .json()
            .await
            .with_context(|| format!("decode error response ({status})"))?;
        match (body.kind.as_str(), body.notification) {
            ("VALIDATION_FAILED", _) => Ok(SubmitOutcome::Rejected {
                fields: body.fields,
            }),
            (_, Some(notification)) => Ok(SubmitOutcome::Failed { notification }),
            (kind, None) => bail!("{status} {kind}: {}", body.message),
        }
    }

    /// Current listing, fetched anew when `refresh` is set.
    pub async fn listing(&self, refresh: bool) -> Result<Listing> {
        let url = format!("{}/profiles", self.base_url);
        let request = if refresh {
            self.client.post(format!("{url}/refresh"))
        } else {
            self.client.get(&url)
        };
        let resp = request
            .send()
            .await
            .with_context(|| format!("request listing from {url}"))?;
        let status = resp.status();
        if !status.is_success() {
            bail!("listing request failed with {status}");
        }
        resp.json().await.context("decode listing")
    }
}
