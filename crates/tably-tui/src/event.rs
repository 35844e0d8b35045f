//! Event system — crossterm event reader running in a background tokio task.
//!
//! Produces terminal events (key, resize) plus tick/render events at
//! configurable intervals via `tokio::sync::mpsc`.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Events produced by the terminal event reader.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized to (cols, rows).
    Resize(u16, u16),
    /// Periodic tick for animation / housekeeping (4 Hz).
    Tick,
    /// Render tick (~30 FPS).
    Render,
}

/// Reads terminal events in a background task and sends them over a channel.
pub struct EventReader {
    rx: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
}

impl EventReader {
    /// Spawn the background event reader.
    ///
    /// - `tick_rate`: interval for `Event::Tick` (e.g., 250ms = 4 Hz)
    /// - `render_rate`: interval for `Event::Render` (e.g., 33ms ≈ 30 FPS)
    pub fn new(tick_rate: Duration, render_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        tokio::spawn(read_loop(tick_rate, render_rate, tx, cancel.clone()));

        Self { rx, cancel }
    }

    /// Receive the next event. Returns `None` if the reader has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Signal the background reader to stop.
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// The background read loop: multiplexes terminal input with tick and
/// render timers until cancelled or the receiver goes away.
async fn read_loop(
    tick_rate: Duration,
    render_rate: Duration,
    tx: mpsc::UnboundedSender<Event>,
    cancel: CancellationToken,
) {
    let mut input = EventStream::new();

    let mut ticks = tokio::time::interval(tick_rate);
    let mut renders = tokio::time::interval(render_rate);
    // Don't burst ticks if we fall behind
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
    renders.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let event = tokio::select! {
            () = cancel.cancelled() => break,

            _ = ticks.tick() => Event::Tick,

            _ = renders.tick() => Event::Render,

            Some(Ok(term_event)) = input.next() => {
                match map_terminal_event(term_event) {
                    Some(event) => event,
                    None => continue,
                }
            }
        };

        // If the receiver is dropped, stop.
        if tx.send(event).is_err() {
            break;
        }
    }
}

/// Keep key presses and resizes; drop everything else (key release/repeat,
/// focus changes, paste).
fn map_terminal_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    }
}
