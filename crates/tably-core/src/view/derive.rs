// ── The derivation pipeline ──
//
// Pure function from (raw list, criteria, query, sort, now) to the
// ordered visible list. Always derives from the raw list -- never from a
// previous derived list. Filters and search reduce via intersection, so
// their relative order only matters for how much the sort has to touch;
// sort runs last over the surviving rows.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::model::Reservation;
use crate::view::criteria::{DateWindow, FilterCriteria, SortDirection, SortField, SortSpec};

/// Derive the visible list: filter by status, date window, shift, and
/// area, then search by customer name, then sort.
///
/// The result is a subset-then-reordering of `raw`; raw records are
/// shared, never cloned or mutated.
pub fn derive(
    raw: &[Arc<Reservation>],
    filters: &FilterCriteria,
    query: &str,
    sort: SortSpec,
    now: DateTime<Utc>,
) -> Vec<Arc<Reservation>> {
    let needle = query.trim().to_lowercase();

    let mut rows: Vec<Arc<Reservation>> = raw
        .iter()
        .filter(|r| matches_filters(r, filters, now))
        .filter(|r| matches_search(r, &needle))
        .map(Arc::clone)
        .collect();

    apply_sort(&mut rows, sort);
    rows
}

/// AND across dimensions, OR within a dimension. Empty set = pass.
fn matches_filters(res: &Reservation, filters: &FilterCriteria, now: DateTime<Utc>) -> bool {
    (filters.status.is_empty() || filters.status.contains(&res.status))
        && matches_date_window(res, filters, now)
        && (filters.shift.is_empty() || filters.shift.contains(&res.shift))
        && (filters.area.is_empty() || filters.area.contains(&res.area))
}

/// Selecting both windows covers every instant, so it behaves exactly
/// like selecting neither: pass-through, not an empty intersection.
fn matches_date_window(res: &Reservation, filters: &FilterCriteria, now: DateTime<Utc>) -> bool {
    if filters.date.is_empty() {
        return true;
    }
    (filters.date.contains(&DateWindow::Future) && res.start >= now)
        || (filters.date.contains(&DateWindow::Past) && res.start < now)
}

/// `needle` is already trimmed and lower-cased by the caller.
fn matches_search(res: &Reservation, needle: &str) -> bool {
    needle.is_empty() || res.customer.full_name().to_lowercase().contains(needle)
}

/// Stable sort on the active column; ties keep their original relative
/// order in both directions.
fn apply_sort(rows: &mut [Arc<Reservation>], sort: SortSpec) {
    let Some(field) = sort.field else {
        return;
    };

    rows.sort_by(|a, b| {
        let ord = match field {
            SortField::Quantity => a.quantity.cmp(&b.quantity),
            SortField::CustomerName => name_key(a).cmp(&name_key(b)),
        };
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// Case-folded full name. Stands in for locale collation; for the
/// feed's customer names the ordering matches `localeCompare`.
fn name_key(res: &Reservation) -> String {
    res.customer.full_name().to_lowercase()
}
