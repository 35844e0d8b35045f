//! Data bridge — connects the [`ReservationStore`] stream to TUI actions.
//!
//! Runs as a background task: performs the one-and-only feed fetch, then
//! loops forwarding every derived-list change as an [`Action`] through
//! the TUI's action channel.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use tably_api::FeedClient;
use tably_core::{Reservation, ReservationStore};

use crate::action::{Action, FeedStatus, ViewSnapshot};

/// Spawn the data bridge connecting the store's reactive stream to the TUI.
///
/// Loads the feed once, pushes an initial snapshot so the table has data
/// immediately, then forwards every derived-list change. Shuts down
/// cleanly on cancellation. A failed load is logged and reported as a
/// status change -- the forwarding loop still runs so criteria edits keep
/// working over the empty list.
pub async fn spawn_data_bridge(
    store: Arc<ReservationStore>,
    client: FeedClient,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let _ = action_tx.send(Action::FeedStatusChanged(FeedStatus::Loading));

    // Subscribe before loading so the load's broadcast is never missed.
    let mut stream = store.subscribe();

    match store.load(&client).await {
        Ok(count) => {
            debug!(count, "initial feed load complete");
            let _ = action_tx.send(Action::FeedStatusChanged(FeedStatus::Loaded));
        }
        Err(e) => {
            warn!(error = %e, "initial feed load failed; viewer stays empty");
            let _ = action_tx.send(Action::FeedStatusChanged(FeedStatus::Unavailable));
        }
    }

    // Push the current snapshot so the screen renders without waiting
    // for the next criteria change.
    send_snapshot(&store, &action_tx, stream.latest());

    // Stream loop — forward every change until cancelled
    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            Some(rows) = stream.changed() => {
                send_snapshot(&store, &action_tx, rows);
            }
        }
    }

    debug!("data bridge shut down");
}

fn send_snapshot(
    store: &ReservationStore,
    action_tx: &mpsc::UnboundedSender<Action>,
    rows: Arc<Vec<Arc<Reservation>>>,
) {
    let snapshot = ViewSnapshot {
        total: store.raw_snapshot().len(),
        criteria: store.criteria(),
        rows,
    };
    let _ = action_tx.send(Action::ReservationsUpdated(snapshot));
}
