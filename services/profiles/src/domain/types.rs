use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use staffdesk_domain::department::Department;
use staffdesk_domain::role::Role;

/// Employee profile row as stored by the persistence boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub department: Department,
    pub role: Role,
    pub hire_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated, normalized profile that has not been assigned an identity yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfile {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub department: Department,
    pub role: Role,
    pub hire_date: Option<NaiveDate>,
}

impl NewProfile {
    /// Attach identity and timestamps. `created_at` and `updated_at` share `now`.
    pub fn into_profile(self, id: Uuid, now: DateTime<Utc>) -> Profile {
        Profile {
            id,
            full_name: self.full_name,
            username: self.username,
            email: self.email,
            phone: self.phone,
            address: self.address,
            department: self.department,
            role: self.role,
            hire_date: self.hire_date,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Human-readable validation messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
