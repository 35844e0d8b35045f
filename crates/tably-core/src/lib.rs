//! Reactive data layer between `tably-api` and the terminal view.
//!
//! This crate owns the domain model, the derivation pipeline, and the
//! reactive store for the reservation viewer:
//!
//! - **[`ReservationStore`]** — Single source of truth holding the raw
//!   reservation list and the active view criteria.
//!   [`load()`](ReservationStore::load) fetches the feed once; the narrow
//!   mutators (`set_filters`, `set_search_query`, `set_sort`, …)
//!   synchronously re-derive the visible list and broadcast it.
//!
//! - **[`derive`](view::derive)** — The pure filter → search → sort
//!   pipeline, callable directly from tests without any UI harness.
//!
//! - **[`ReservationStream`]** — Subscription handle vended by the store.
//!   Exposes `current()` / `latest()` / `changed()` for reactive
//!   rendering.
//!
//! - **Domain model** ([`model`]) — Canonical types (`Reservation`,
//!   `Customer`, `Status`, `Shift`, `Area`) converted from the feed's
//!   wire records.

pub mod convert;
pub mod error;
pub mod model;
pub mod store;
pub mod stream;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use store::ReservationStore;
pub use stream::ReservationStream;

// Re-export model and view types at the crate root for ergonomics.
pub use model::{Area, Customer, Reservation, Shift, Status};
pub use view::{
    DateWindow, FilterCriteria, FilterToggle, PageSize, Pager, SortDirection, SortField, SortSpec,
    ViewCriteria,
};
