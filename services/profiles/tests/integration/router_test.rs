use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use staffdesk_profiles::infra::memory::MemoryProfileStore;
use staffdesk_profiles::infra::rest::RestProfileStore;
use staffdesk_profiles::infra::store::ProfileStoreBackend;
use staffdesk_profiles::router::build_router;
use staffdesk_profiles::state::AppState;

use crate::helpers::{FakePostgrest, jane_form};

fn server(store: ProfileStoreBackend) -> TestServer {
    TestServer::new(build_router(AppState::new(store))).unwrap()
}

fn memory_server() -> (TestServer, MemoryProfileStore) {
    let store = MemoryProfileStore::new();
    (server(store.clone().into()), store)
}

#[tokio::test]
async fn should_answer_health_checks() {
    let (server, _) = memory_server();
    server.get("/healthz").await.assert_status_ok();
    server.get("/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn should_attach_request_id() {
    let (server, _) = memory_server();
    let response = server.get("/healthz").await;
    let id = response.header("x-request-id");
    assert!(id.to_str().unwrap().parse::<uuid::Uuid>().is_ok());
}

#[tokio::test]
async fn should_describe_empty_form() {
    let (server, _) = memory_server();
    let before = chrono::Utc::now().date_naive();
    let json: Value = server.get("/profiles/form").await.json();
    let after = chrono::Utc::now().date_naive();

    let hire_date: chrono::NaiveDate = json["defaults"]["hire_date"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!(
        hire_date == before || hire_date == after,
        "hire_date default should be today's UTC date, got {hire_date}"
    );
    assert_eq!(json["defaults"]["department"], "IT");
    assert_eq!(json["defaults"]["role"], "EMPLOYEE");
    assert_eq!(json["defaults"]["full_name"], "");
    assert_eq!(json["options"]["departments"].as_array().unwrap().len(), 10);
    assert_eq!(json["options"]["roles"][0]["value"], "EMPLOYEE");
    assert_eq!(json["options"]["roles"][5]["label"], "Read Only");
}

#[tokio::test]
async fn should_create_profile_and_return_refreshed_listing() {
    let (server, store) = memory_server();

    let response = server.post("/profiles").json(&jane_form()).await;
    response.assert_status(StatusCode::CREATED);
    let json: Value = response.json();

    assert_eq!(json["notification"]["title"], "Success!");
    assert_eq!(json["notification"]["description"], "Form submitted successfully");
    assert_eq!(json["notification"]["variant"], "default");
    assert_eq!(json["listing"]["loading"], false);
    assert_eq!(json["listing"]["button_label"], "Show All Profiles");
    assert_eq!(json["listing"]["show_table"], true);

    let rows = json["listing"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["full_name"], "Jane Doe");
    assert_eq!(rows[0]["department"], "IT");
    assert_eq!(rows[0]["role"], "EMPLOYEE");
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn should_reject_short_full_name_with_field_error() {
    let (server, store) = memory_server();
    let mut form = jane_form();
    form["full_name"] = json!("J");

    let response = server.post("/profiles").json(&form).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = response.json();

    assert_eq!(json["kind"], "VALIDATION_FAILED");
    assert_eq!(
        json["fields"]["full_name"][0],
        "Full name must be at least 2 characters"
    );
    assert!(store.is_empty(), "nothing may be inserted");
}

#[tokio::test]
async fn should_reject_unknown_department() {
    let (server, _) = memory_server();
    let mut form = jane_form();
    form["department"] = json!("Finance");

    let json: Value = server
        .post("/profiles")
        .json(&form)
        .expect_failure()
        .await
        .json();
    assert!(json["fields"].get("department").is_some());
    assert!(json["fields"].get("full_name").is_none());
}

#[tokio::test]
async fn should_reject_non_object_body() {
    let (server, _) = memory_server();

    let response = server.post("/profiles").json(&json!(["Jane Doe"])).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "MALFORMED_FORM");

    let response = server.post("/profiles").text("full_name=Jane").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_report_generic_failure_and_skip_refresh() {
    let fake = FakePostgrest::new(StatusCode::CONFLICT);
    let base_url = fake.spawn().await;
    let server = server(RestProfileStore::new(&base_url, "anon-key").into());

    let response = server.post("/profiles").json(&jane_form()).await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let json: Value = response.json();

    assert_eq!(json["kind"], "SUBMISSION_FAILED");
    assert_eq!(json["notification"]["title"], "Error");
    assert_eq!(
        json["notification"]["description"],
        "Something went wrong. Please try again."
    );
    assert_eq!(json["notification"]["variant"], "destructive");
    assert!(!json.to_string().contains("duplicate"));
    assert_eq!(fake.selects(), 0, "a failed submission must not refresh");
}

#[tokio::test]
async fn should_round_trip_through_rest_backend() {
    let fake = FakePostgrest::new(StatusCode::CREATED);
    let base_url = fake.spawn().await;
    let server = server(RestProfileStore::new(&base_url, "anon-key").into());

    let mut form = jane_form();
    form["department"] = json!("Εξυπηρέτηση_Πελατών");
    server
        .post("/profiles")
        .json(&form)
        .await
        .assert_status(StatusCode::CREATED);

    let json: Value = server.get("/profiles").await.json();
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["department"], "Εξυπηρέτηση_Πελατών");
    assert_eq!(fake.selects(), 1);
}

#[tokio::test]
async fn should_only_fetch_on_explicit_refresh() {
    let (server, store) = memory_server();
    let state_before: Value = server.get("/profiles").await.json();
    assert_eq!(state_before["show_table"], false);

    server
        .post("/profiles")
        .json(&jane_form())
        .await
        .assert_status(StatusCode::CREATED);
    assert_eq!(store.len(), 1);

    let first: Value = server.post("/profiles/refresh").await.json();
    let second: Value = server.post("/profiles/refresh").await.json();
    assert_eq!(first, second);
    assert_eq!(first["rows"].as_array().unwrap().len(), 1);
}
