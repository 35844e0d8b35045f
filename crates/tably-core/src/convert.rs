// ── Wire record → domain conversion ──
//
// Enum-like string fields parse leniently (unrecognized values become
// `Unknown`); timestamps parse strictly. A record whose timestamps cannot
// be interpreted cannot answer the date-window predicate, so it is
// dropped from the load with a warning rather than poisoning the list.

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::warn;

use tably_api::ReservationRecord;

use crate::error::CoreError;
use crate::model::{Area, Customer, Reservation, Shift, Status};

/// Convert a batch of wire records, skipping (and logging) invalid ones.
pub fn reservations_from_records(records: Vec<ReservationRecord>) -> Vec<Arc<Reservation>> {
    records
        .into_iter()
        .filter_map(|rec| match reservation_from_record(rec) {
            Ok(res) => Some(Arc::new(res)),
            Err(e) => {
                warn!(error = %e, "dropping invalid reservation record");
                None
            }
        })
        .collect()
}

/// Convert a single wire record into the canonical domain type.
pub fn reservation_from_record(rec: ReservationRecord) -> Result<Reservation, CoreError> {
    let id = rec.id;

    let start = parse_instant(id, "start", &rec.start)?;
    let end = parse_instant(id, "end", &rec.end)?;
    let business_date = parse_business_date(id, &rec.business_date)?;

    // Empty notes mean "no notes" -- the view falls back to a literal
    // placeholder either way.
    let guest_notes = rec.guest_notes.filter(|s| !s.trim().is_empty());

    Ok(Reservation {
        id,
        business_date,
        status: Status::from_str(&rec.status).unwrap_or(Status::Unknown),
        shift: Shift::from_str(&rec.shift).unwrap_or(Shift::Unknown),
        start,
        end,
        quantity: rec.quantity,
        customer: Customer {
            first_name: rec.customer.first_name,
            last_name: rec.customer.last_name,
        },
        area: Area::from_str(&rec.area).unwrap_or(Area::Unknown),
        guest_notes,
    })
}

fn parse_instant(id: u64, field: &str, value: &str) -> Result<DateTime<Utc>, CoreError> {
    value
        .parse::<DateTime<Utc>>()
        .map_err(|e| CoreError::InvalidRecord {
            id,
            reason: format!("{field} {value:?}: {e}"),
        })
}

/// The feed writes business dates as `D.M.YYYY`; accept ISO dates too.
fn parse_business_date(id: u64, value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value, "%d.%m.%Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map_err(|e| CoreError::InvalidRecord {
            id,
            reason: format!("businessDate {value:?}: {e}"),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tably_api::CustomerRecord;

    fn record(id: u64) -> ReservationRecord {
        ReservationRecord {
            id,
            business_date: "24.4.2023".into(),
            status: "CONFIRMED".into(),
            shift: "DINNER".into(),
            start: "2023-04-24T17:00:00.000Z".into(),
            end: "2023-04-24T19:00:00.000Z".into(),
            quantity: 2,
            customer: CustomerRecord {
                first_name: "Ada".into(),
                last_name: "Byron".into(),
            },
            area: "BAR".into(),
            guest_notes: Some("window seat".into()),
        }
    }

    #[test]
    fn converts_a_well_formed_record() {
        let res = reservation_from_record(record(1)).unwrap();
        assert_eq!(res.id, 1);
        assert_eq!(res.status, Status::Confirmed);
        assert_eq!(res.shift, Shift::Dinner);
        assert_eq!(res.area, Area::Bar);
        assert_eq!(res.quantity, 2);
        assert_eq!(res.business_date, NaiveDate::from_ymd_opt(2023, 4, 24).unwrap());
        assert_eq!(res.guest_notes.as_deref(), Some("window seat"));
    }

    #[test]
    fn unknown_enum_strings_convert_leniently() {
        let mut rec = record(2);
        rec.status = "WAITLISTED".into();
        rec.area = "PATIO".into();
        let res = reservation_from_record(rec).unwrap();
        assert_eq!(res.status, Status::Unknown);
        assert_eq!(res.area, Area::Unknown);
    }

    #[test]
    fn empty_guest_notes_become_none() {
        let mut rec = record(3);
        rec.guest_notes = Some("   ".into());
        let res = reservation_from_record(rec).unwrap();
        assert_eq!(res.guest_notes, None);
    }

    #[test]
    fn bad_timestamp_is_an_error() {
        let mut rec = record(4);
        rec.start = "yesterday-ish".into();
        let err = reservation_from_record(rec).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRecord { id: 4, .. }));
    }

    #[test]
    fn batch_conversion_skips_invalid_records() {
        let good = record(5);
        let mut bad = record(6);
        bad.end = "not a time".into();
        let rows = reservations_from_records(vec![good, bad]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 5);
    }

    #[test]
    fn iso_business_dates_also_parse() {
        let mut rec = record(7);
        rec.business_date = "2023-04-24".into();
        let res = reservation_from_record(rec).unwrap();
        assert_eq!(res.business_date, NaiveDate::from_ymd_opt(2023, 4, 24).unwrap());
    }
}
