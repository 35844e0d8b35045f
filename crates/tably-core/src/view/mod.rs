// ── View derivation ──
//
// Criteria types, the pure filter/search/sort pipeline, and pagination.

mod criteria;
mod derive;
mod page;

pub use criteria::{
    DateWindow, FilterCriteria, FilterToggle, SortDirection, SortField, SortSpec, ViewCriteria,
};
pub use derive::derive;
pub use page::{PageSize, Pager};
