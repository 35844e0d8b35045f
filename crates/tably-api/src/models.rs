// Wire types for the reservation feed.
//
// These mirror the feed JSON exactly (camelCase keys, enum-like string
// fields). Domain typing happens in tably-core -- this layer stays
// faithful to what the server actually sends.

use serde::{Deserialize, Serialize};

/// Top-level feed document: `{ "reservations": [...] }`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedEnvelope {
    pub reservations: Vec<ReservationRecord>,
}

/// Customer name pair as it appears on the wire.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub first_name: String,
    pub last_name: String,
}

/// One reservation record as it appears on the wire.
///
/// All enum-like fields (`status`, `shift`, `area`) are free-form strings
/// here; `guest_notes` may be absent, null, or empty.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRecord {
    pub id: u64,
    pub business_date: String,
    pub status: String,
    pub shift: String,
    pub start: String,
    pub end: String,
    pub quantity: u32,
    pub customer: CustomerRecord,
    pub area: String,
    #[serde(default)]
    pub guest_notes: Option<String>,
}
