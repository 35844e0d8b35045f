//! Reusable widgets for the viewer screens.

pub mod filter_panel;
