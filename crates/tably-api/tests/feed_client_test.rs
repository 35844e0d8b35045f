#![allow(clippy::unwrap_used)]
// Integration tests for `FeedClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tably_api::{Error, FeedClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, FeedClient) {
    let server = MockServer::start().await;
    let feed_url = Url::parse(&format!("{}/reservations.json", server.uri())).unwrap();
    let client = FeedClient::with_client(reqwest::Client::new(), feed_url);
    (server, client)
}

fn sample_record(id: u64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "businessDate": "24.4.2023",
        "status": status,
        "shift": "DINNER",
        "start": "2023-04-24T17:00:00Z",
        "end": "2023-04-24T19:00:00Z",
        "quantity": 2,
        "customer": { "firstName": "Ada", "lastName": "Byron" },
        "area": "BAR",
        "guestNotes": ""
    })
}

// ── Fetch tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_reservations() {
    let (server, client) = setup().await;

    let document = json!({
        "reservations": [sample_record(1, "CONFIRMED"), sample_record(2, "SEATED")]
    });

    Mock::given(method("GET"))
        .and(path("/reservations.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&document))
        .mount(&server)
        .await;

    let records = client.fetch_reservations().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].status, "CONFIRMED");
    assert_eq!(records[1].status, "SEATED");
    assert_eq!(records[0].customer.last_name, "Byron");
}

#[tokio::test]
async fn test_fetch_empty_feed() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/reservations.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reservations": [] })))
        .mount(&server)
        .await;

    let records = client.fetch_reservations().await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_fetch_missing_guest_notes() {
    let (server, client) = setup().await;

    let mut record = sample_record(7, "NOT CONFIRMED");
    record.as_object_mut().unwrap().remove("guestNotes");

    Mock::given(method("GET"))
        .and(path("/reservations.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "reservations": [record] })),
        )
        .mount(&server)
        .await;

    let records = client.fetch_reservations().await.unwrap();
    assert_eq!(records[0].guest_notes, None);
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_http_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/reservations.json"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let result = client.fetch_reservations().await;

    match result {
        Err(Error::Status { status, ref message }) => {
            assert_eq!(status, 404);
            assert!(message.contains("Not Found"));
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
    assert!(result.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_fetch_server_error_is_transient() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/reservations.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client.fetch_reservations().await.unwrap_err();
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/reservations.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"reservations\": 42}"))
        .mount(&server)
        .await;

    let result = client.fetch_reservations().await;

    match result {
        Err(Error::Deserialization { ref message, .. }) => {
            assert!(message.contains("body preview"), "message: {message}");
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
