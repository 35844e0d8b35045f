// ── Central reactive reservation store ──
//
// Single source of truth for the raw reservation list and the active
// view criteria. Every mutation synchronously re-derives the visible
// list from the raw list and broadcasts it via a `watch` channel.

use std::sync::{Arc, Mutex};

use arc_swap::ArcSwap;
use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, error};

use tably_api::FeedClient;

use crate::convert;
use crate::error::CoreError;
use crate::model::Reservation;
use crate::stream::ReservationStream;
use crate::view::{FilterCriteria, FilterToggle, SortField, SortSpec, ViewCriteria, derive};

/// Reactive store for the reservation list.
///
/// The raw list is replaced wholesale on load and never mutated in
/// place; consumers only ever see it through snapshot accessors and the
/// derived-list subscription. Criteria mutations go through the narrow
/// setters below -- each one recomputes and broadcasts.
pub struct ReservationStore {
    /// Full list as fetched, shared read-only after load.
    raw: ArcSwap<Vec<Arc<Reservation>>>,

    /// Active filter/search/sort criteria.
    criteria: Mutex<ViewCriteria>,

    /// Derived visible list, rebuilt on every input change.
    derived: watch::Sender<Arc<Vec<Arc<Reservation>>>>,
}

impl ReservationStore {
    pub fn new() -> Self {
        let (derived, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            raw: ArcSwap::from_pointee(Vec::new()),
            criteria: Mutex::new(ViewCriteria::default()),
            derived,
        }
    }

    // ── Loading ──────────────────────────────────────────────────────

    /// Fetch the feed once and replace the raw list.
    ///
    /// On success the derived list is recomputed against the current
    /// criteria. On failure the error is logged and the store keeps its
    /// previous state (empty on first load) -- no retry.
    pub async fn load(&self, client: &FeedClient) -> Result<usize, CoreError> {
        match client.fetch_reservations().await {
            Ok(records) => {
                let rows = convert::reservations_from_records(records);
                let count = rows.len();
                debug!(count, "reservation feed loaded");
                self.install(rows);
                Ok(count)
            }
            Err(e) => {
                error!(error = %e, url = %client.feed_url(), "reservation feed fetch failed");
                Err(e.into())
            }
        }
    }

    /// Replace the raw list and rebuild the derived list.
    fn install(&self, rows: Vec<Arc<Reservation>>) {
        self.raw.store(Arc::new(rows));
        self.recompute();
    }

    // ── Mutators ─────────────────────────────────────────────────────

    /// Replace the whole filter criteria.
    pub fn set_filters(&self, filters: FilterCriteria) {
        self.criteria.lock().expect("criteria lock poisoned").filters = filters;
        self.recompute();
    }

    /// Toggle a single filter value in its dimension.
    pub fn toggle_filter(&self, value: FilterToggle) {
        self.criteria
            .lock()
            .expect("criteria lock poisoned")
            .filters
            .toggle(value);
        self.recompute();
    }

    /// Store the search query exactly as typed; normalization happens
    /// inside the derivation pipeline, never here.
    pub fn set_search_query(&self, query: impl Into<String>) {
        self.criteria.lock().expect("criteria lock poisoned").query = query.into();
        self.recompute();
    }

    /// Replace the sort spec.
    pub fn set_sort(&self, sort: SortSpec) {
        self.criteria.lock().expect("criteria lock poisoned").sort = sort;
        self.recompute();
    }

    /// Apply the header-click sort rule to a column.
    pub fn toggle_sort(&self, field: SortField) {
        self.criteria
            .lock()
            .expect("criteria lock poisoned")
            .sort
            .toggle(field);
        self.recompute();
    }

    // ── Read accessors ───────────────────────────────────────────────

    /// Snapshot of the raw list (cheap `Arc` clone).
    pub fn raw_snapshot(&self) -> Arc<Vec<Arc<Reservation>>> {
        self.raw.load_full()
    }

    /// Snapshot of the current derived list (cheap `Arc` clone).
    pub fn derived_snapshot(&self) -> Arc<Vec<Arc<Reservation>>> {
        self.derived.borrow().clone()
    }

    /// The active criteria, cloned.
    pub fn criteria(&self) -> ViewCriteria {
        self.criteria.lock().expect("criteria lock poisoned").clone()
    }

    /// Subscribe to derived-list changes.
    pub fn subscribe(&self) -> ReservationStream {
        ReservationStream::new(self.derived.subscribe())
    }

    // ── Private helpers ──────────────────────────────────────────────

    /// Re-derive the visible list from the raw list and broadcast it.
    /// Always derives from the raw list -- never from a previous derived
    /// list -- so criteria changes can never compound.
    fn recompute(&self) {
        let raw = self.raw.load();
        let rows = {
            let criteria = self.criteria.lock().expect("criteria lock poisoned");
            derive(raw.as_slice(), &criteria.filters, &criteria.query, criteria.sort, Utc::now())
        };
        // `send_modify` updates unconditionally, even with zero receivers.
        self.derived.send_modify(|snap| *snap = Arc::new(rows));
    }
}

impl Default for ReservationStore {
    fn default() -> Self {
        Self::new()
    }
}
