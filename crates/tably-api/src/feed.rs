// Reservation feed HTTP client
//
// A single unauthenticated GET against a fixed URL returning the
// `{ reservations: [...] }` document. No pagination parameters, no
// request body -- the feed is a static snapshot.

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{FeedEnvelope, ReservationRecord};
use crate::transport::TransportConfig;

/// HTTP client for the reservation feed.
#[derive(Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    feed_url: Url,
}

impl FeedClient {
    /// Create a new feed client from a `TransportConfig`.
    pub fn new(feed_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, feed_url })
    }

    /// Create a feed client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, feed_url: Url) -> Self {
        Self { http, feed_url }
    }

    /// The feed URL this client fetches from.
    pub fn feed_url(&self) -> &Url {
        &self.feed_url
    }

    /// Fetch the full reservation list.
    ///
    /// Returns the unwrapped `reservations` array; the envelope is
    /// stripped before the caller sees it. Non-2xx statuses and
    /// undecodable bodies are surfaced as typed errors, never panics.
    pub async fn fetch_reservations(&self) -> Result<Vec<ReservationRecord>, Error> {
        debug!("GET {}", self.feed_url);

        let resp = self
            .http
            .get(self.feed_url.clone())
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        parse_feed(&body)
    }
}

/// Parse the feed document, keeping a body preview in the error for
/// debugging malformed payloads.
fn parse_feed(body: &str) -> Result<Vec<ReservationRecord>, Error> {
    let envelope: FeedEnvelope = serde_json::from_str(body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body: body.to_owned(),
        }
    })?;
    Ok(envelope.reservations)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_feed_unwraps_envelope() {
        let body = r#"{
            "reservations": [{
                "id": 1,
                "businessDate": "24.4.2023",
                "status": "CONFIRMED",
                "shift": "DINNER",
                "start": "2023-04-24T17:00:00Z",
                "end": "2023-04-24T19:00:00Z",
                "quantity": 2,
                "customer": {"firstName": "Ada", "lastName": "Byron"},
                "area": "BAR",
                "guestNotes": "window seat"
            }]
        }"#;

        let records = parse_feed(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].customer.first_name, "Ada");
        assert_eq!(records[0].guest_notes.as_deref(), Some("window seat"));
    }

    #[test]
    fn parse_feed_allows_missing_guest_notes() {
        let body = r#"{
            "reservations": [{
                "id": 2,
                "businessDate": "25.4.2023",
                "status": "SEATED",
                "shift": "LUNCH",
                "start": "2023-04-25T12:00:00Z",
                "end": "2023-04-25T13:30:00Z",
                "quantity": 4,
                "customer": {"firstName": "Grace", "lastName": "Hopper"},
                "area": "MAIN ROOM"
            }]
        }"#;

        let records = parse_feed(body).unwrap();
        assert_eq!(records[0].guest_notes, None);
    }

    #[test]
    fn parse_feed_keeps_body_preview_on_error() {
        let err = parse_feed("<html>not json</html>").unwrap_err();
        match err {
            Error::Deserialization { message, body } => {
                assert!(message.contains("body preview"));
                assert!(body.contains("<html>"));
            }
            other => panic!("expected Deserialization error, got: {other:?}"),
        }
    }
}
