// ── Reactive reservation stream ──
//
// Subscription type for consuming derived-list changes from the store.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::model::Reservation;

/// A subscription to the store's derived reservation list.
///
/// Provides both point-in-time snapshot access and reactive change
/// notification via the `changed()` method or by converting to a `Stream`.
pub struct ReservationStream {
    current: Arc<Vec<Arc<Reservation>>>,
    receiver: watch::Receiver<Arc<Vec<Arc<Reservation>>>>,
}

impl ReservationStream {
    pub(crate) fn new(receiver: watch::Receiver<Arc<Vec<Arc<Reservation>>>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// Get the snapshot captured at creation time.
    pub fn current(&self) -> &Arc<Vec<Arc<Reservation>>> {
        &self.current
    }

    /// Get the latest snapshot (may have changed since creation).
    pub fn latest(&self) -> Arc<Vec<Arc<Reservation>>> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` if the sender (the store) has been dropped.
    pub async fn changed(&mut self) -> Option<Arc<Vec<Arc<Reservation>>>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    pub fn into_stream(self) -> ReservationWatchStream {
        ReservationWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
///
/// Yields a new snapshot each time the derived list is recomputed.
pub struct ReservationWatchStream {
    inner: WatchStream<Arc<Vec<Arc<Reservation>>>>,
}

impl Stream for ReservationWatchStream {
    type Item = Arc<Vec<Arc<Reservation>>>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
