//! Bistro palette and semantic styling for the viewer.

use ratatui::style::{Color, Modifier, Style};

use tably_core::Status;

// ── Core Palette ──────────────────────────────────────────────────────

pub const COPPER: Color = Color::Rgb(222, 142, 90); // #de8e5a
pub const CREAM: Color = Color::Rgb(235, 219, 178); // #ebdbb2
pub const SAGE: Color = Color::Rgb(152, 187, 108); // #98bb6c
pub const APRICOT: Color = Color::Rgb(250, 189, 47); // #fabd2f
pub const WINE: Color = Color::Rgb(211, 104, 107); // #d3686b
pub const STEEL: Color = Color::Rgb(131, 165, 152); // #83a598

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_TEXT: Color = Color::Rgb(168, 160, 142); // #a8a08e
pub const BORDER_GRAY: Color = Color::Rgb(102, 99, 83); // #666353
pub const BG_HIGHLIGHT: Color = Color::Rgb(56, 52, 45); // #38342d
pub const BG_DARK: Color = Color::Rgb(33, 31, 27); // #211f1b

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(COPPER).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(COPPER)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Table header row.
pub fn table_header() -> Style {
    Style::default()
        .fg(CREAM)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Active sort column header.
pub fn table_header_sorted() -> Style {
    Style::default()
        .fg(APRICOT)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Normal table row text.
pub fn table_row() -> Style {
    Style::default().fg(DIM_TEXT)
}

/// Selected / highlighted table row.
pub fn table_selected() -> Style {
    Style::default().bg(BG_HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(COPPER).add_modifier(Modifier::BOLD)
}

/// Color for a reservation status cell.
pub fn status_color(status: Status) -> Color {
    match status {
        Status::Confirmed => SAGE,
        Status::Seated => APRICOT,
        Status::CheckedOut => STEEL,
        Status::NotConfirmed => WINE,
        _ => DIM_TEXT,
    }
}
