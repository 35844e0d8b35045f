//! Filter overlay — four independent multi-select toggle groups
//! (status, date window, shift, area).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use tably_core::{Area, DateWindow, FilterCriteria, FilterToggle, Shift, Status};

use crate::theme;

/// One selectable row in the panel.
pub struct FilterEntry {
    pub group: &'static str,
    pub label: &'static str,
    pub toggle: FilterToggle,
}

/// All selectable filter values, grouped in display order.
pub fn entries() -> Vec<FilterEntry> {
    let mut out = Vec::new();
    for status in Status::SELECTABLE {
        out.push(FilterEntry {
            group: "Status",
            label: status.label(),
            toggle: FilterToggle::Status(status),
        });
    }
    for window in DateWindow::SELECTABLE {
        out.push(FilterEntry {
            group: "Date",
            label: window.label(),
            toggle: FilterToggle::Date(window),
        });
    }
    for shift in Shift::SELECTABLE {
        out.push(FilterEntry {
            group: "Shift",
            label: shift.label(),
            toggle: FilterToggle::Shift(shift),
        });
    }
    for area in Area::SELECTABLE {
        out.push(FilterEntry {
            group: "Area",
            label: area.label(),
            toggle: FilterToggle::Area(area),
        });
    }
    out
}

/// Render the centered filter overlay.
///
/// `cursor` indexes into [`entries()`]; each row shows its selection
/// state from the store's criteria, never from panel-local state.
pub fn render(frame: &mut Frame, area: Rect, criteria: &FilterCriteria, cursor: usize) {
    let all = entries();

    // Height: one line per entry, one per group header, borders + hints.
    let group_count = 4u16;
    #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
    let height = (all.len() as u16 + group_count + 4).min(area.height.saturating_sub(2));
    let width = 34u16.min(area.width.saturating_sub(4));

    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    let panel_area = Rect::new(area.x + x, area.y + y, width, height);

    // Clear the background
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BG_DARK)),
        panel_area,
    );

    let block = Block::default()
        .title(" Filter ")
        .title_style(theme::title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_focused());

    let inner = block.inner(panel_area);
    frame.render_widget(block, panel_area);

    let mut lines = Vec::new();
    let mut last_group = "";
    for (i, entry) in all.iter().enumerate() {
        if entry.group != last_group {
            lines.push(Line::from(Span::styled(
                format!(" {}", entry.group),
                theme::title_style(),
            )));
            last_group = entry.group;
        }

        let marker = if criteria.is_selected(entry.toggle) {
            "[x]"
        } else {
            "[ ]"
        };
        let pointer = if i == cursor { "▸" } else { " " };
        let style = if i == cursor {
            theme::table_selected().fg(theme::CREAM)
        } else {
            theme::table_row()
        };
        lines.push(Line::from(Span::styled(
            format!(" {pointer} {marker} {}", entry.label),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" j/k ", theme::key_hint_key()),
        Span::styled("move  ", theme::key_hint()),
        Span::styled("Space ", theme::key_hint_key()),
        Span::styled("toggle  ", theme::key_hint()),
        Span::styled("Esc ", theme::key_hint_key()),
        Span::styled("close", theme::key_hint()),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_cover_every_dimension_in_order() {
        let all = entries();
        assert_eq!(all.len(), 11);
        assert_eq!(all[0].group, "Status");
        assert_eq!(all[4].group, "Date");
        assert_eq!(all[6].group, "Shift");
        assert_eq!(all[9].group, "Area");
        assert!(matches!(all[0].toggle, FilterToggle::Status(Status::Confirmed)));
        assert!(matches!(all[10].toggle, FilterToggle::Area(Area::MainRoom)));
    }

    #[test]
    fn labels_match_the_menu_wording() {
        let all = entries();
        let labels: Vec<&str> = all.iter().map(|e| e.label).collect();
        assert!(labels.contains(&"Checked Out"));
        assert!(labels.contains(&"Past Dates"));
        assert!(labels.contains(&"Future Dates"));
        assert!(labels.contains(&"Main Room"));
    }
}
