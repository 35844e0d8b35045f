#![allow(clippy::unwrap_used)]
// Integration tests for `ReservationStore::load` against a mocked feed.

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tably_api::{FeedClient, TransportConfig};
use tably_core::{CoreError, ReservationStore, Status};

async fn setup() -> (MockServer, FeedClient) {
    let server = MockServer::start().await;
    let feed_url = Url::parse(&format!("{}/reservations.json", server.uri())).unwrap();
    let client = FeedClient::new(feed_url, &TransportConfig::default()).unwrap();
    (server, client)
}

fn feed_document() -> serde_json::Value {
    json!({
        "reservations": [
            {
                "id": 1,
                "businessDate": "24.4.2023",
                "status": "CONFIRMED",
                "shift": "DINNER",
                "start": "2023-04-24T17:00:00.000Z",
                "end": "2023-04-24T19:00:00.000Z",
                "quantity": 2,
                "customer": { "firstName": "Bob", "lastName": "Lee" },
                "area": "BAR",
                "guestNotes": ""
            },
            {
                "id": 2,
                "businessDate": "25.4.2023",
                "status": "SEATED",
                "shift": "LUNCH",
                "start": "2023-04-25T12:00:00.000Z",
                "end": "2023-04-25T13:30:00.000Z",
                "quantity": 5,
                "customer": { "firstName": "Amy", "lastName": "Zo" },
                "area": "MAIN ROOM",
                "guestNotes": "birthday"
            }
        ]
    })
}

#[tokio::test]
async fn load_replaces_raw_and_derived_lists() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/reservations.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_document()))
        .mount(&server)
        .await;

    let store = ReservationStore::new();
    assert!(store.derived_snapshot().is_empty());

    let count = store.load(&client).await.unwrap();
    assert_eq!(count, 2);

    let derived = store.derived_snapshot();
    assert_eq!(derived.len(), 2);
    assert_eq!(derived[0].id, 1);
    assert_eq!(derived[0].status, Status::Confirmed);
    assert_eq!(derived[1].guest_notes.as_deref(), Some("birthday"));
    // Empty guestNotes string normalizes to None.
    assert_eq!(derived[0].guest_notes, None);
}

#[tokio::test]
async fn load_applies_pre_set_criteria() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/reservations.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_document()))
        .mount(&server)
        .await;

    let store = ReservationStore::new();
    store.set_search_query("amy");
    store.load(&client).await.unwrap();

    let derived = store.derived_snapshot();
    assert_eq!(derived.len(), 1);
    assert_eq!(derived[0].id, 2);
    assert_eq!(store.raw_snapshot().len(), 2);
}

#[tokio::test]
async fn failed_load_keeps_previous_state() {
    let (server, client) = setup().await;

    let ok = Mock::given(method("GET"))
        .and(path("/reservations.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_document()))
        .up_to_n_times(1)
        .mount_as_scoped(&server)
        .await;

    let store = ReservationStore::new();
    store.load(&client).await.unwrap();
    assert_eq!(store.raw_snapshot().len(), 2);
    drop(ok);

    // The feed goes away; the store keeps what it had.
    Mock::given(method("GET"))
        .and(path("/reservations.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = store.load(&client).await.unwrap_err();
    assert!(matches!(err, CoreError::FeedRejected { status: 500 }));
    assert_eq!(store.raw_snapshot().len(), 2);
    assert_eq!(store.derived_snapshot().len(), 2);
}

#[tokio::test]
async fn failed_first_load_leaves_the_store_empty_but_usable() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/reservations.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let store = ReservationStore::new();
    let err = store.load(&client).await.unwrap_err();
    assert!(matches!(err, CoreError::InvalidPayload { .. }));

    // Criteria changes still work over the empty list.
    store.set_search_query("anyone");
    assert!(store.derived_snapshot().is_empty());
}
