use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde_json::{Map, Value, json};
use tokio::sync::Notify;

use staffdesk_profiles::domain::repository::ProfileStore;
use staffdesk_profiles::domain::types::Profile;
use staffdesk_profiles::error::ProfilesServiceError;

// ── MockProfileStore ─────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockProfileStore {
    pub rows: Arc<Mutex<Vec<Profile>>>,
    pub fail_insert: Arc<AtomicBool>,
    pub fail_list: Arc<AtomicBool>,
    pub insert_calls: Arc<AtomicUsize>,
    pub list_calls: Arc<AtomicUsize>,
    /// When set, every listing waits for one `notify_one` before answering.
    /// The rows it answers with are read before waiting.
    pub gate: Option<Arc<Notify>>,
}

impl MockProfileStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn failing_insert() -> Self {
        let store = Self::default();
        store.fail_insert.store(true, Ordering::SeqCst);
        store
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn inserted(&self) -> Vec<Profile> {
        self.rows.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

impl ProfileStore for MockProfileStore {
    async fn insert(&self, profile: &Profile) -> Result<(), ProfilesServiceError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_insert.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("duplicate key value violates unique constraint").into());
        }
        self.rows.lock().unwrap().push(profile.clone());
        Ok(())
    }

    async fn list_by_full_name(&self) -> Result<Vec<Profile>, ProfilesServiceError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        // Rows are read when the query starts, like a real SELECT.
        let mut rows = self.rows.lock().unwrap().clone();
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(anyhow::anyhow!("network unreachable").into());
        }
        rows.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(rows)
    }
}

// ── Form fixtures ────────────────────────────────────────────────────────────

pub fn jane_form() -> Value {
    json!({
        "full_name": "Jane Doe",
        "username": "jdoe",
        "email": "jane@x.com",
        "department": "IT",
    })
}

pub fn as_form(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("form fixture must be an object, got {other}"),
    }
}

// ── Fake PostgREST ───────────────────────────────────────────────────────────

/// Minimal stand-in for a PostgREST `profiles` endpoint. Inserts are answered
/// with `insert_status`; selects return every stored row.
#[derive(Clone)]
pub struct FakePostgrest {
    pub rows: Arc<Mutex<Vec<Value>>>,
    pub selects: Arc<AtomicUsize>,
    pub insert_status: StatusCode,
}

impl FakePostgrest {
    pub fn new(insert_status: StatusCode) -> Self {
        Self {
            rows: Arc::new(Mutex::new(vec![])),
            selects: Arc::new(AtomicUsize::new(0)),
            insert_status,
        }
    }

    pub fn selects(&self) -> usize {
        self.selects.load(Ordering::SeqCst)
    }

    /// Serve on an ephemeral port and return the base URL.
    pub async fn spawn(&self) -> String {
        let router = Router::new()
            .route("/rest/v1/profiles", get(select_rows).post(insert_rows))
            .with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }
}

async fn select_rows(State(fake): State<FakePostgrest>) -> Json<Vec<Value>> {
    fake.selects.fetch_add(1, Ordering::SeqCst);
    Json(fake.rows.lock().unwrap().clone())
}

async fn insert_rows(
    State(fake): State<FakePostgrest>,
    Json(rows): Json<Vec<Value>>,
) -> (StatusCode, &'static str) {
    if !fake.insert_status.is_success() {
        return (fake.insert_status, "duplicate key value violates unique constraint");
    }
    fake.rows.lock().unwrap().extend(rows);
    (fake.insert_status, "")
}
