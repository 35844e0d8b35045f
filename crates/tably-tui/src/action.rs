//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::sync::Arc;

use tably_core::{FilterToggle, Reservation, SortField, ViewCriteria};

/// Feed status as seen by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedStatus {
    #[default]
    Loading,
    Loaded,
    /// The one failure mode: the initial fetch failed. The viewer stays
    /// interactive with zero rows; details go to the log, not the user.
    Unavailable,
}

/// A derived-list snapshot pushed from the data bridge.
///
/// Carries the criteria alongside the rows so the view renders filter
/// and sort indicators from the store's truth, never from a local copy.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    pub rows: Arc<Vec<Arc<Reservation>>>,
    pub total: usize,
    pub criteria: ViewCriteria,
}

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Data events (from the store stream) ────────────────────────
    ReservationsUpdated(ViewSnapshot),
    FeedStatusChanged(FeedStatus),

    // ── Criteria (applied to the store by the app) ─────────────────
    ToggleFilterValue(FilterToggle),
    SortBy(SortField),

    // ── Search ─────────────────────────────────────────────────────
    OpenSearch,
    CloseSearch,
    SearchInput(String),
    SearchSubmit,

    // ── Pagination (screen-local view state) ───────────────────────
    NextPage,
    PrevPage,
    CyclePageSize,

    // ── Overlays ───────────────────────────────────────────────────
    ToggleFilterPanel,
    ToggleHelp,
}
