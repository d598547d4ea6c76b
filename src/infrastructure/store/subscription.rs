use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::Notify;

use crate::infrastructure::store::document::SnapshotEvent;

/// Cancellation side of a live query. Cloneable so the consumer can keep a
/// handle while a reader task owns the [`Subscription`] itself.
#[derive(Clone)]
pub struct SubscriptionHandle {
    active: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl SubscriptionHandle {
    /// Stops further delivery immediately. Events already buffered are
    /// discarded, never handed to the consumer; a snapshot in flight on the
    /// producer side is dropped on receive.
    pub fn unsubscribe(&self) {
        self.active.store(false, Ordering::SeqCst);
        self.notify.notify_one();
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

/// Receiving side of a live query. `recv` yields `None` once unsubscribed
/// or once the producer goes away.
pub struct Subscription {
    receiver: mpsc::UnboundedReceiver<SnapshotEvent>,
    handle: SubscriptionHandle,
}

impl Subscription {
    /// Builds the delivery channel for one live query; the store keeps the
    /// sender, the consumer keeps the subscription.
    pub(crate) fn channel() -> (mpsc::UnboundedSender<SnapshotEvent>, Subscription) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let subscription = Subscription {
            receiver,
            handle: SubscriptionHandle {
                active: Arc::new(AtomicBool::new(true)),
                notify: Arc::new(Notify::new()),
            },
        };
        (sender, subscription)
    }

    pub fn handle(&self) -> SubscriptionHandle {
        self.handle.clone()
    }

    pub async fn recv(&mut self) -> Option<SnapshotEvent> {
        if !self.handle.is_active() {
            return None;
        }

        tokio::select! {
            _ = self.handle.notify.notified() => None,
            event = self.receiver.recv() => {
                // Unsubscribed while the event was in flight: drop it.
                if !self.handle.is_active() {
                    return None;
                }
                event
            }
        }
    }

    pub fn unsubscribe(&self) {
        self.handle.unsubscribe();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.handle.unsubscribe();
    }
}
