//! Application core — event loop, action dispatch, global overlays.

use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use tably_api::FeedClient;
use tably_core::{PageSize, ReservationStore};

use crate::action::{Action, FeedStatus};
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screens::reservations::ReservationsScreen;
use crate::theme;
use crate::tui::Tui;

/// Top-level application state and event loop.
pub struct App {
    /// The one and only screen.
    screen: Box<dyn Component>,
    /// Whether the app should keep running.
    running: bool,
    /// Feed status indicator for the status bar.
    feed_status: FeedStatus,
    /// Help overlay visibility.
    help_visible: bool,
    /// Search input mode.
    search_active: bool,
    /// Search line editor contents (mirrors the store's raw query).
    search_query: String,
    /// Action sender — components can dispatch actions through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// The reservation store; all criteria mutations funnel through here.
    store: Arc<ReservationStore>,
    /// Feed client handed to the data bridge on startup.
    client: FeedClient,
    /// Cancellation token for the data bridge task.
    data_cancel: CancellationToken,
}

impl App {
    pub fn new(store: Arc<ReservationStore>, client: FeedClient, page_size: PageSize) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            screen: Box::new(ReservationsScreen::new(page_size)),
            running: true,
            feed_status: FeedStatus::default(),
            help_visible: false,
            search_active: false,
            search_query: String::new(),
            action_tx,
            action_rx,
            store,
            client,
            data_cancel: CancellationToken::new(),
        }
    }

    /// Run the main event loop. This is the heart of the TUI.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.screen.init(self.action_tx.clone())?;

        // Spawn the data bridge: one fetch, then snapshot forwarding
        {
            let store = Arc::clone(&self.store);
            let client = self.client.clone();
            let cancel = self.data_cancel.clone();
            let tx = self.action_tx.clone();
            tokio::spawn(async move {
                crate::data_bridge::spawn_data_bridge(store, client, tx, cancel).await;
            });
        }

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            // 1. Wait for the next event
            let Some(event) = events.next().await else {
                break;
            };

            // 2. Map event → action(s)
            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    self.action_tx.send(Action::Resize(w, h))?;
                }
                Event::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // 3. Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        // Cancel the data bridge and clean up
        self.data_cancel.cancel();
        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// screen-specific keys are delegated to the screen component.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Ctrl+C always quits, whatever mode we're in
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        // Search mode captures every key: the input is a controlled
        // line editor writing the raw query into the store per keystroke.
        if self.search_active {
            return match key.code {
                KeyCode::Esc => Ok(Some(Action::CloseSearch)),
                KeyCode::Enter => Ok(Some(Action::SearchSubmit)),
                KeyCode::Backspace => {
                    self.search_query.pop();
                    Ok(Some(Action::SearchInput(self.search_query.clone())))
                }
                KeyCode::Char(c) => {
                    self.search_query.push(c);
                    Ok(Some(Action::SearchInput(self.search_query.clone())))
                }
                _ => Ok(None),
            };
        }

        if self.help_visible {
            // In help mode, Esc or ? closes help
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        // An open overlay on the screen gets the keys before global ones
        if self.screen.captures_input() {
            return self.screen.handle_key_event(key);
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') => return Ok(Some(Action::Quit)),
            KeyCode::Char('?') => return Ok(Some(Action::ToggleHelp)),
            KeyCode::Char('/') => return Ok(Some(Action::OpenSearch)),
            _ => {}
        }

        // Delegate to the screen component
        self.screen.handle_key_event(key)
    }

    /// Process a single action — update app state, apply criteria
    /// mutations to the store, and propagate the rest to the screen.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::Render | Action::Tick | Action::Resize(..) => {}

            Action::ToggleHelp => {
                self.help_visible = !self.help_visible;
            }

            // ── Search mode ───────────────────────────────────────────
            Action::OpenSearch => {
                self.search_active = true;
                // Resume editing whatever the store currently holds.
                self.search_query = self.store.criteria().query;
            }

            Action::CloseSearch => {
                self.search_active = false;
                self.search_query.clear();
                self.store.set_search_query("");
            }

            Action::SearchSubmit => {
                self.search_active = false;
            }

            Action::SearchInput(query) => {
                // Raw, untrimmed, original case -- normalization is the
                // pipeline's job.
                self.store.set_search_query(query.clone());
            }

            // ── Criteria mutations ────────────────────────────────────
            Action::ToggleFilterValue(value) => {
                // The overlay's checkmarks refresh via the snapshot the
                // store broadcasts after this mutation.
                self.store.toggle_filter(*value);
            }

            Action::SortBy(field) => {
                self.store.toggle_sort(*field);
            }

            Action::FeedStatusChanged(status) => {
                self.feed_status = *status;
                if let Some(follow_up) = self.screen.update(action)? {
                    self.action_tx.send(follow_up)?;
                }
            }

            // Everything else (data snapshots, pagination, overlays)
            // belongs to the screen
            other => {
                if let Some(follow_up) = self.screen.update(other)? {
                    self.action_tx.send(follow_up)?;
                }
            }
        }

        Ok(())
    }

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Layout: [screen content] [status bar]
        let layout = Layout::vertical([
            Constraint::Min(1),    // Screen content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        self.screen.render(frame, layout[0]);
        self.render_status_bar(frame, layout[1]);

        if self.help_visible {
            self.render_help_overlay(frame, area);
        }
    }

    /// Render the bottom status bar with feed status and key hints.
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if self.search_active {
            let line = Line::from(vec![
                Span::styled(" / ", Style::default().fg(theme::COPPER)),
                Span::styled(&self.search_query, Style::default().fg(theme::CREAM)),
                Span::styled("█", Style::default().fg(theme::CREAM)),
                Span::styled("  Esc clear  Enter done", theme::key_hint()),
            ]);
            frame.render_widget(Paragraph::new(line), area);
            return;
        }

        let feed_indicator = match self.feed_status {
            FeedStatus::Loaded => {
                Span::styled("● loaded", Style::default().fg(theme::SAGE))
            }
            FeedStatus::Loading => {
                Span::styled("◐ loading", Style::default().fg(theme::APRICOT))
            }
            FeedStatus::Unavailable => {
                Span::styled("○ no data", Style::default().fg(theme::BORDER_GRAY))
            }
        };

        let hints = Span::styled(" │ ? help  / search  f filter  q quit", theme::key_hint());

        let line = Line::from(vec![Span::raw(" "), feed_indicator, hints]);

        frame.render_widget(Paragraph::new(line), area);
    }

    /// Render the help overlay centered on screen.
    #[allow(clippy::unused_self)]
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_width = 52u16.min(area.width.saturating_sub(4));
        let help_height = 17u16.min(area.height.saturating_sub(4));

        let x = (area.width.saturating_sub(help_width)) / 2;
        let y = (area.height.saturating_sub(help_height)) / 2;

        let help_area = Rect::new(area.x + x, area.y + y, help_width, help_height);

        // Clear the background
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_DARK)),
            help_area,
        );

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let entry = |key: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {key:<10}"), theme::key_hint_key()),
                Span::styled(what, theme::key_hint()),
            ])
        };

        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled("  Table", Style::default().fg(theme::CREAM))),
            entry("j/k ↑/↓", "Move selection"),
            entry("[ / ]", "Previous / next page"),
            entry("z", "Cycle page size (5, 10, 25)"),
            entry("Q", "Sort by quantity"),
            entry("N", "Sort by customer name"),
            Line::from(""),
            Line::from(Span::styled("  Global", Style::default().fg(theme::CREAM))),
            entry("f", "Filter panel"),
            entry("/", "Search customer name"),
            entry("?", "This help"),
            entry("q", "Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "                    Esc or ? to close",
                theme::key_hint(),
            )),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}
