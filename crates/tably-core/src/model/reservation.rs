// ── Reservation domain types ──

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Reservation lifecycle status.
///
/// Wire strings are the feed's upper-case labels; anything the feed
/// invents later lands on `Unknown` instead of failing the whole load.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[non_exhaustive]
pub enum Status {
    #[strum(serialize = "CONFIRMED")]
    Confirmed,
    #[strum(serialize = "NOT CONFIRMED")]
    NotConfirmed,
    #[strum(serialize = "SEATED")]
    Seated,
    #[strum(serialize = "CHECKED OUT")]
    CheckedOut,
    #[strum(serialize = "UNKNOWN")]
    Unknown,
}

impl Status {
    /// The statuses a user can filter on, in display order.
    pub const SELECTABLE: [Status; 4] = [
        Self::Confirmed,
        Self::Seated,
        Self::CheckedOut,
        Self::NotConfirmed,
    ];

    /// Human-friendly label for menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::NotConfirmed => "Not Confirmed",
            Self::Seated => "Seated",
            Self::CheckedOut => "Checked Out",
            Self::Unknown => "Unknown",
        }
    }
}

/// Meal period.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[non_exhaustive]
pub enum Shift {
    #[strum(serialize = "BREAKFAST")]
    Breakfast,
    #[strum(serialize = "LUNCH")]
    Lunch,
    #[strum(serialize = "DINNER")]
    Dinner,
    #[strum(serialize = "UNKNOWN")]
    Unknown,
}

impl Shift {
    pub const SELECTABLE: [Shift; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    pub fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Unknown => "Unknown",
        }
    }
}

/// Seating zone.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[non_exhaustive]
pub enum Area {
    #[strum(serialize = "BAR")]
    Bar,
    #[strum(serialize = "MAIN ROOM")]
    MainRoom,
    #[strum(serialize = "UNKNOWN")]
    Unknown,
}

impl Area {
    pub const SELECTABLE: [Area; 2] = [Self::Bar, Self::MainRoom];

    pub fn label(self) -> &'static str {
        match self {
            Self::Bar => "Bar",
            Self::MainRoom => "Main Room",
            Self::Unknown => "Unknown",
        }
    }
}

/// Customer name pair. Immutable, owned by its reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
}

impl Customer {
    /// `"{first} {last}"` -- the string searched and sorted on.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The canonical reservation type. Immutable once loaded; the full set
/// is fetched once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: u64,
    pub business_date: NaiveDate,
    pub status: Status,
    pub shift: Shift,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub quantity: u32,
    pub customer: Customer,
    pub area: Area,
    /// Free-form notes; `None` when absent or empty on the wire.
    pub guest_notes: Option<String>,
}

impl Reservation {
    /// The customer's full name, as displayed in the table.
    pub fn customer_name(&self) -> String {
        self.customer.full_name()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_round_trips_wire_strings() {
        assert_eq!(Status::from_str("CHECKED OUT").unwrap(), Status::CheckedOut);
        assert_eq!(Status::CheckedOut.to_string(), "CHECKED OUT");
        assert_eq!(Status::from_str("NOT CONFIRMED").unwrap(), Status::NotConfirmed);
    }

    #[test]
    fn area_round_trips_wire_strings() {
        assert_eq!(Area::from_str("MAIN ROOM").unwrap(), Area::MainRoom);
        assert_eq!(Area::MainRoom.to_string(), "MAIN ROOM");
    }

    #[test]
    fn unrecognized_status_does_not_parse() {
        assert!(Status::from_str("WAITLISTED").is_err());
    }

    #[test]
    fn full_name_joins_with_single_space() {
        let c = Customer {
            first_name: "John".into(),
            last_name: "Doe".into(),
        };
        assert_eq!(c.full_name(), "John Doe");
    }
}
