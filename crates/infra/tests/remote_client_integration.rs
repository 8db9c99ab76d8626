//! Integration tests for the remote document store client
//!
//! WireMock stands in for the remote collection API; asserts the wire calls
//! the client makes and how transport and status failures map into domain
//! errors.

use roster_core::RemoteRecordStore;
use roster_domain::{Occupation, RecordDraft, RecordStatus, RemoteStoreConfig, RosterError};
use roster_infra::remote::HttpRemoteStore;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> RemoteStoreConfig {
    RemoteStoreConfig { base_url: server.uri(), timeout_seconds: 5, enabled: true }
}

fn draft(email: &str) -> RecordDraft {
    RecordDraft {
        first_name: "Omar".into(),
        last_name: "Hassan".into(),
        email: email.into(),
        phone: "555-0100".into(),
        date_of_birth: None,
        gender: "male".into(),
        address: "1 Main St".into(),
        city: "Cairo".into(),
        occupation: Occupation::Technical,
        suboccupation: Some("rank3".into()),
        status: RecordStatus::Active,
    }
}

fn remote_record(id: &str, email: &str) -> serde_json::Value {
    json!({
        "id": id,
        "firstName": "Omar",
        "lastName": "Hassan",
        "email": email,
        "occupation": "technical",
        "suboccupation": "rank3",
        "status": "active",
        "createdAt": "2026-08-01T10:00:00Z",
        "updatedAt": "2026-08-01T10:00:00Z"
    })
}

#[tokio::test]
async fn create_posts_draft_and_decodes_assigned_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(remote_record("srv-1", "a@example.com")))
        .expect(1)
        .mount(&server)
        .await;

    let store = HttpRemoteStore::new(&config(&server)).expect("client should build");
    let record = store.create(&draft("a@example.com")).await.expect("create should succeed");

    assert_eq!(record.id, "srv-1");
    assert!(record.created_at.is_some());
}

#[tokio::test]
async fn fetch_all_requests_created_at_descending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("order", "createdAt.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            remote_record("srv-2", "b@example.com"),
            remote_record("srv-1", "a@example.com"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let store = HttpRemoteStore::new(&config(&server)).expect("client should build");
    let records = store.fetch_all().await.expect("fetch should succeed");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "srv-2");
}

#[tokio::test]
async fn update_patches_the_document() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/users/srv-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_record("srv-1", "new@example.com")))
        .expect(1)
        .mount(&server)
        .await;

    let store = HttpRemoteStore::new(&config(&server)).expect("client should build");
    let record = store.update("srv-1", &draft("new@example.com")).await.expect("update");

    assert_eq!(record.email, "new@example.com");
}

#[tokio::test]
async fn delete_of_missing_document_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let store = HttpRemoteStore::new(&config(&server)).expect("client should build");
    let err = store.delete("ghost").await.expect_err("missing document should error");

    assert!(matches!(err, RosterError::NotFound(_)));
}

#[tokio::test]
async fn server_errors_map_to_remote() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = HttpRemoteStore::new(&config(&server)).expect("client should build");
    let err = store.fetch_all().await.expect_err("500 should error");

    assert!(matches!(err, RosterError::Remote(_)));
}

#[tokio::test]
async fn unreachable_host_maps_to_remote() {
    // Nothing listens here; connection is refused immediately.
    let store = HttpRemoteStore::new(&RemoteStoreConfig {
        base_url: "http://127.0.0.1:1".into(),
        timeout_seconds: 2,
        enabled: true,
    })
    .expect("client should build");

    let err = store.fetch_all().await.expect_err("connection refused should error");
    assert!(matches!(err, RosterError::Remote(_)));
}
