//! Endpoint tests for the record and edit-state surface
//!
//! Most tests run mirror-only (remote disabled) so outcomes are tagged
//! `local`; one scenario stands a WireMock remote up to assert the `remote`
//! tagging end to end.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use roster_api::{build_router, AppContext};
use roster_domain::Config;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mirror_only_app() -> (Router, TempDir) {
    let temp = TempDir::new().expect("tempdir");
    let mut config = Config::default();
    config.database.path = temp.path().join("roster.db").to_string_lossy().into_owned();
    config.remote.enabled = false;

    let ctx = Arc::new(AppContext::new(config).await.expect("context should build"));
    (build_router(ctx), temp)
}

async fn remote_app(server: &MockServer) -> (Router, TempDir) {
    let temp = TempDir::new().expect("tempdir");
    let mut config = Config::default();
    config.database.path = temp.path().join("roster.db").to_string_lossy().into_owned();
    config.remote.base_url = server.uri();
    config.remote.timeout_seconds = 5;

    let ctx = Arc::new(AppContext::new(config).await.expect("context should build"));
    (build_router(ctx), temp)
}

fn draft(email: &str) -> Value {
    json!({
        "firstName": "Omar",
        "lastName": "Hassan",
        "email": email,
        "phone": "555-0100",
        "gender": "male",
        "address": "1 Main St",
        "city": "Cairo",
        "occupation": "technical",
        "suboccupation": "rank3",
        "status": "active"
    })
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

fn bare_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).expect("request should build")
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request should complete");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

#[tokio::test]
async fn create_then_list_round_trips_through_the_mirror() {
    let (app, _guard) = mirror_only_app().await;

    let (status, body) =
        call(&app, json_request(Method::POST, "/api/records", draft("a@example.com"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["source"], "local");
    let id = body["record"]["id"].as_str().expect("record id");
    assert!(id.starts_with("local_"));

    let (status, body) = call(&app, bare_request(Method::GET, "/api/records")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "local");
    let records = body["records"].as_array().expect("records array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["email"], "a@example.com");
}

#[tokio::test]
async fn unusable_record_bodies_are_a_bad_request_in_the_usual_shape() {
    let (app, _guard) = mirror_only_app().await;

    // Valid JSON with required fields missing.
    let (status, body) =
        call(&app, json_request(Method::POST, "/api/records", json!({ "firstName": "Omar" })))
            .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("Bad request"));

    // Not JSON at all.
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/records")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("definitely not json"))
        .expect("request should build");
    let (status, body) = call(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    // Nothing reached the synchronizer.
    let (_, listed) = call(&app, bare_request(Method::GET, "/api/records")).await;
    assert!(listed["records"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let (app, _guard) = mirror_only_app().await;

    let (status, _) =
        call(&app, json_request(Method::POST, "/api/records", draft("a@example.com"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) =
        call(&app, json_request(Method::POST, "/api/records", draft("a@example.com"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn update_spares_own_email_but_blocks_anothers() {
    let (app, _guard) = mirror_only_app().await;

    let (_, first) =
        call(&app, json_request(Method::POST, "/api/records", draft("a@example.com"))).await;
    let (_, second) =
        call(&app, json_request(Method::POST, "/api/records", draft("b@example.com"))).await;
    let first_id = first["record"]["id"].as_str().unwrap();
    let second_id = second["record"]["id"].as_str().unwrap();

    // Re-saving a record with its own email is not a conflict.
    let (status, body) = call(
        &app,
        json_request(Method::PUT, &format!("/api/records/{first_id}"), draft("a@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "local");

    // Stealing the other record's email is.
    let (status, _) = call(
        &app,
        json_request(Method::PUT, &format!("/api/records/{second_id}"), draft("a@example.com")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn update_replaces_the_stored_fields() {
    let (app, _guard) = mirror_only_app().await;

    let (_, created) =
        call(&app, json_request(Method::POST, "/api/records", draft("a@example.com"))).await;
    let id = created["record"]["id"].as_str().unwrap();

    let mut replacement = draft("a@example.com");
    replacement["firstName"] = json!("Nour");
    let (status, _) =
        call(&app, json_request(Method::PUT, &format!("/api/records/{id}"), replacement)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = call(&app, bare_request(Method::GET, "/api/records")).await;
    assert_eq!(listed["records"][0]["firstName"], "Nour");
    assert_eq!(listed["records"][0]["id"], id);
}

#[tokio::test]
async fn delete_succeeds_and_repeats_quietly() {
    let (app, _guard) = mirror_only_app().await;

    let (_, created) =
        call(&app, json_request(Method::POST, "/api/records", draft("a@example.com"))).await;
    let id = created["record"]["id"].as_str().unwrap();

    let (status, body) =
        call(&app, bare_request(Method::DELETE, &format!("/api/records/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "local");

    let (_, listed) = call(&app, bare_request(Method::GET, "/api/records")).await;
    assert!(listed["records"].as_array().unwrap().is_empty());

    // Idempotent: deleting the same id again is still a success.
    let (status, _) =
        call(&app, bare_request(Method::DELETE, &format!("/api/records/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn editing_id_lifecycle() {
    let (app, _guard) = mirror_only_app().await;

    let (status, body) = call(&app, bare_request(Method::GET, "/api/records/editing")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["editingId"].is_null());

    let (status, _) =
        call(&app, json_request(Method::PUT, "/api/records/editing", json!({ "id": "r42" }))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, bare_request(Method::GET, "/api/records/editing")).await;
    assert_eq!(body["editingId"], "r42");

    let (status, _) = call(&app, bare_request(Method::DELETE, "/api/records/editing")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = call(&app, bare_request(Method::GET, "/api/records/editing")).await;
    assert!(body["editingId"].is_null());
}

#[tokio::test]
async fn setting_an_empty_editing_id_is_a_bad_request() {
    let (app, _guard) = mirror_only_app().await;

    let (status, _) =
        call(&app, json_request(Method::PUT, "/api/records/editing", json!({ "id": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn healthy_remote_tags_creates_as_remote() {
    let server = MockServer::start().await;

    // Startup warm-up load plus any list calls.
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "srv-1",
            "firstName": "Omar",
            "lastName": "Hassan",
            "email": "a@example.com",
            "occupation": "technical",
            "status": "active",
            "createdAt": "2026-08-01T10:00:00Z",
            "updatedAt": "2026-08-01T10:00:00Z"
        })))
        .mount(&server)
        .await;

    let (app, _guard) = remote_app(&server).await;

    let (status, body) =
        call(&app, json_request(Method::POST, "/api/records", draft("a@example.com"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "remote");
    assert_eq!(body["record"]["id"], "srv-1");
}

#[tokio::test]
async fn remote_outage_downgrades_creates_to_local() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (app, _guard) = remote_app(&server).await;

    let (status, body) =
        call(&app, json_request(Method::POST, "/api/records", draft("a@example.com"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "local");
    assert!(body["record"]["id"].as_str().unwrap().starts_with("local_"));
}
