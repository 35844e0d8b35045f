//! Reservations screen — the paginated, sortable reservation table.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};
use tokio::sync::mpsc::UnboundedSender;

use tably_core::{
    PageSize, Pager, Reservation, SortDirection, SortField, SortSpec, ViewCriteria,
};

use crate::action::{Action, FeedStatus, ViewSnapshot};
use crate::component::Component;
use crate::theme;
use crate::widgets::filter_panel;

pub struct ReservationsScreen {
    #[allow(dead_code)]
    action_tx: Option<UnboundedSender<Action>>,
    /// Derived (filtered/searched/sorted) list, pre-pagination.
    rows: Arc<Vec<Arc<Reservation>>>,
    /// Size of the raw list, for the "shown/total" title.
    total: usize,
    /// Criteria mirror pushed with every snapshot -- render-only.
    criteria: ViewCriteria,
    feed_status: FeedStatus,
    pager: Pager,
    table_state: TableState,
    filter_open: bool,
    filter_cursor: usize,
}

impl ReservationsScreen {
    pub fn new(initial_page_size: PageSize) -> Self {
        let mut pager = Pager::default();
        pager.set_size(initial_page_size);
        Self {
            action_tx: None,
            rows: Arc::new(Vec::new()),
            total: 0,
            criteria: ViewCriteria::default(),
            feed_status: FeedStatus::default(),
            pager,
            table_state: TableState::default(),
            filter_open: false,
            filter_cursor: 0,
        }
    }

    /// The rows on the current page: `derived[page*size .. page*size + size]`.
    fn visible_rows(&self) -> &[Arc<Reservation>] {
        self.pager.slice(&self.rows)
    }

    fn selected_index(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    fn select(&mut self, idx: usize) {
        let len = self.visible_rows().len();
        let clamped = if len == 0 { 0 } else { idx.min(len - 1) };
        self.table_state.select(Some(clamped));
    }

    #[allow(clippy::cast_sign_loss, clippy::as_conversions)]
    fn move_selection(&mut self, delta: isize) {
        let len = self.visible_rows().len();
        if len == 0 {
            return;
        }
        #[allow(clippy::cast_possible_wrap)]
        let current = self.selected_index() as isize;
        #[allow(clippy::cast_possible_wrap)]
        let next = (current + delta).clamp(0, len as isize - 1);
        self.select(next as usize);
    }

    fn handle_filter_panel_key(&mut self, key: KeyEvent) -> Option<Action> {
        let entry_count = filter_panel::entries().len();
        match key.code {
            KeyCode::Esc | KeyCode::Char('f') => Some(Action::ToggleFilterPanel),
            KeyCode::Char('j') | KeyCode::Down => {
                self.filter_cursor = (self.filter_cursor + 1).min(entry_count - 1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.filter_cursor = self.filter_cursor.saturating_sub(1);
                None
            }
            KeyCode::Char(' ') | KeyCode::Enter => filter_panel::entries()
                .get(self.filter_cursor)
                .map(|entry| Action::ToggleFilterValue(entry.toggle)),
            _ => None,
        }
    }

    /// Sort indicator for a column header.
    fn sort_header(&self, field: SortField, label: &str) -> Cell<'static> {
        let sort = self.criteria.sort;
        if sort.field == Some(field) {
            let arrow = match sort.direction {
                SortDirection::Asc => "▲",
                SortDirection::Desc => "▼",
            };
            Cell::from(format!("{label} {arrow}")).style(theme::table_header_sorted())
        } else {
            Cell::from(label.to_owned()).style(theme::table_header())
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let pages = self.pager.page_count(self.rows.len());
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", self.pager.range_label(self.rows.len())),
                Style::default().fg(theme::CREAM),
            ),
            Span::styled(
                format!("· page {}/{} · size {}", self.pager.page() + 1, pages,
                    self.pager.size().as_usize()),
                theme::key_hint(),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let hints = Line::from(vec![
            Span::styled("  j/k ", theme::key_hint_key()),
            Span::styled("select  ", theme::key_hint()),
            Span::styled("[/] ", theme::key_hint_key()),
            Span::styled("page  ", theme::key_hint()),
            Span::styled("z ", theme::key_hint_key()),
            Span::styled("page size  ", theme::key_hint()),
            Span::styled("Q ", theme::key_hint_key()),
            Span::styled("quantity  ", theme::key_hint()),
            Span::styled("N ", theme::key_hint_key()),
            Span::styled("name  ", theme::key_hint()),
            Span::styled("f ", theme::key_hint_key()),
            Span::styled("filter  ", theme::key_hint()),
            Span::styled("/ ", theme::key_hint_key()),
            Span::styled("search", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), area);
    }
}

impl Component for ReservationsScreen {
    fn init(&mut self, action_tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(action_tx);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.filter_open {
            return Ok(self.handle_filter_panel_key(key));
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(1);
                Ok(None)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-1);
                Ok(None)
            }
            KeyCode::Char('g') => {
                self.select(0);
                Ok(None)
            }
            KeyCode::Char('G') => {
                let len = self.visible_rows().len();
                if len > 0 {
                    self.select(len - 1);
                }
                Ok(None)
            }
            KeyCode::Char(']') | KeyCode::Char('l') | KeyCode::Right => {
                Ok(Some(Action::NextPage))
            }
            KeyCode::Char('[') | KeyCode::Char('h') | KeyCode::Left => {
                Ok(Some(Action::PrevPage))
            }
            KeyCode::Char('z') => Ok(Some(Action::CyclePageSize)),
            KeyCode::Char('Q') => Ok(Some(Action::SortBy(SortField::Quantity))),
            KeyCode::Char('N') => Ok(Some(Action::SortBy(SortField::CustomerName))),
            KeyCode::Char('f') => Ok(Some(Action::ToggleFilterPanel)),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::ReservationsUpdated(ViewSnapshot {
                rows,
                total,
                criteria,
            }) => {
                self.rows = Arc::clone(rows);
                self.total = *total;
                self.criteria = criteria.clone();
                // Keep the selection on the page; the page itself is only
                // clamped by slicing, per the pagination contract.
                let len = self.visible_rows().len();
                if len > 0 && self.selected_index() >= len {
                    self.select(len - 1);
                }
            }
            Action::FeedStatusChanged(status) => {
                self.feed_status = *status;
            }
            Action::NextPage => {
                self.pager.next_page(self.rows.len());
                self.table_state.select(Some(0));
            }
            Action::PrevPage => {
                self.pager.prev_page();
                self.table_state.select(Some(0));
            }
            Action::CyclePageSize => {
                self.pager.cycle_size();
                self.table_state.select(Some(0));
            }
            Action::ToggleFilterPanel => {
                self.filter_open = !self.filter_open;
            }
            _ => {}
        }
        Ok(None)
    }

    #[allow(clippy::too_many_lines)]
    fn render(&self, frame: &mut Frame, area: Rect) {
        let shown = self.rows.len();
        let total = self.total;

        let query = self.criteria.query.trim();
        let title = if query.is_empty() {
            format!(" Reservations ({shown}/{total}) ")
        } else {
            format!(" Reservations ({shown}/{total}) [\"{query}\"] ")
        };

        let block = Block::default()
            .title(title)
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Min(1),    // table
            Constraint::Length(1), // pagination footer
            Constraint::Length(1), // hints
        ])
        .split(inner);

        // Table header — sortable columns get the toggle indicator
        let header = Row::new(vec![
            Cell::from("ID").style(theme::table_header()),
            Cell::from("Date").style(theme::table_header()),
            Cell::from("Status").style(theme::table_header()),
            Cell::from("Shift").style(theme::table_header()),
            self.sort_header(SortField::Quantity, "Quantity"),
            self.sort_header(SortField::CustomerName, "Customer Name"),
            Cell::from("Area").style(theme::table_header()),
            Cell::from("Guest Notes").style(theme::table_header()),
        ]);

        let selected_idx = self.selected_index();
        let active_sort: SortSpec = self.criteria.sort;
        let visible = self.visible_rows();

        let table_rows: Vec<Row> = visible
            .iter()
            .enumerate()
            .map(|(i, res)| {
                let is_selected = i == selected_idx;
                let prefix = if is_selected { "▸" } else { " " };

                let sort_cell = |active: bool, text: String| -> Cell<'_> {
                    let mut style = Style::default().fg(theme::CREAM);
                    if active {
                        style = style.bg(theme::BG_HIGHLIGHT);
                    }
                    Cell::from(text).style(style)
                };

                let cells = vec![
                    Cell::from(format!("{prefix}{}", res.id)).style(theme::table_row()),
                    Cell::from(res.business_date.format("%-d.%-m.%Y").to_string())
                        .style(theme::table_row()),
                    Cell::from(res.status.to_string())
                        .style(Style::default().fg(theme::status_color(res.status))),
                    Cell::from(res.shift.to_string()).style(theme::table_row()),
                    sort_cell(
                        active_sort.field == Some(SortField::Quantity),
                        res.quantity.to_string(),
                    ),
                    sort_cell(
                        active_sort.field == Some(SortField::CustomerName),
                        res.customer_name(),
                    ),
                    Cell::from(res.area.to_string()).style(theme::table_row()),
                    Cell::from(res.guest_notes.as_deref().unwrap_or("None").to_owned())
                        .style(theme::table_row()),
                ];

                let row_style = if is_selected {
                    theme::table_selected()
                } else {
                    theme::table_row()
                };
                Row::new(cells).style(row_style)
            })
            .collect();

        let widths = [
            Constraint::Length(6),  // id
            Constraint::Length(10), // date
            Constraint::Length(14), // status
            Constraint::Length(10), // shift
            Constraint::Length(10), // quantity
            Constraint::Fill(2),    // customer name (flex)
            Constraint::Length(10), // area
            Constraint::Fill(3),    // guest notes (flex)
        ];

        let table = Table::new(table_rows, widths)
            .header(header)
            .row_highlight_style(theme::table_selected());

        let mut state = self.table_state.clone();
        frame.render_stateful_widget(table, layout[0], &mut state);

        // Empty-state line under the header row
        if visible.is_empty() && layout[0].height > 2 {
            let message = match self.feed_status {
                FeedStatus::Loading => "fetching reservations…",
                _ if total > 0 => "no reservations match",
                _ => "no reservations",
            };
            let message_area = Rect::new(layout[0].x + 1, layout[0].y + 2, layout[0].width.saturating_sub(2), 1);
            frame.render_widget(
                Paragraph::new(Span::styled(message, theme::key_hint())),
                message_area,
            );
        }

        self.render_footer(frame, layout[1]);
        self.render_hints(frame, layout[2]);

        // Overlay last so it sits on top of the table
        if self.filter_open {
            filter_panel::render(frame, area, &self.criteria.filters, self.filter_cursor);
        }
    }

    fn captures_input(&self) -> bool {
        self.filter_open
    }
}
