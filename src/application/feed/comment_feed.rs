use std::sync::Arc;

use log::{debug, warn};
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::core::error::AppResult;
use crate::domain::comment::comment::Comment;
use crate::domain::comment::comment_repository_interface::CommentRepositoryInterface;
use crate::infrastructure::model::comment_repository::{CommentSnapshotEvent, CommentSubscription};
use crate::infrastructure::store::SubscriptionHandle;

type ErrorListener = Arc<dyn Fn(&str) + Send + Sync>;

struct FeedInner {
    epoch: u64,
    subscription: Option<SubscriptionHandle>,
}

/// Live comment list for one address detail screen. Same lifecycle rules as
/// the address feed: teardown is synchronous, late deliveries are discarded
/// by the epoch guard, errors keep the stale list in place.
pub struct CommentFeed {
    repository: Arc<dyn CommentRepositoryInterface>,
    inner: Arc<Mutex<FeedInner>>,
    output: watch::Sender<Vec<Comment>>,
    on_error: Arc<Mutex<Option<ErrorListener>>>,
}

impl CommentFeed {
    pub fn new(repository: Arc<dyn CommentRepositoryInterface>) -> Self {
        let (output, _) = watch::channel(Vec::new());
        Self {
            repository,
            inner: Arc::new(Mutex::new(FeedInner { epoch: 0, subscription: None })),
            output,
            on_error: Arc::new(Mutex::new(None)),
        }
    }

    pub fn comments(&self) -> watch::Receiver<Vec<Comment>> {
        self.output.subscribe()
    }

    pub fn current(&self) -> Vec<Comment> {
        self.output.borrow().clone()
    }

    pub fn set_error_listener(&self, listener: impl Fn(&str) + Send + Sync + 'static) {
        *self.on_error.lock() = Some(Arc::new(listener));
    }

    /// Subscribes to `address_id`'s comments, releasing any previous
    /// subscription first.
    pub fn start(&self, address_id: &str) -> AppResult<()> {
        let (epoch, mut subscription) = {
            let mut inner = self.inner.lock();
            if let Some(handle) = inner.subscription.take() {
                handle.unsubscribe();
            }
            inner.epoch += 1;

            let subscription = self.repository.subscribe_address_comments(address_id)?;
            inner.subscription = Some(subscription.handle());
            (inner.epoch, subscription)
        };

        debug!("comment feed started for address {} (epoch {})", address_id, epoch);

        let inner = Arc::clone(&self.inner);
        let output = self.output.clone();
        let on_error = Arc::clone(&self.on_error);

        tokio::spawn(async move {
            while let Some(event) = subscription.recv().await {
                match event {
                    CommentSnapshotEvent::Snapshot(comments) => {
                        if inner.lock().epoch != epoch {
                            break;
                        }
                        output.send_replace(comments);
                    }
                    CommentSnapshotEvent::Error(message) => {
                        if inner.lock().epoch != epoch {
                            break;
                        }
                        warn!("comment subscription error, keeping stale snapshot: {}", message);
                        let listener = on_error.lock().clone();
                        if let Some(listener) = listener {
                            listener(&message);
                        }
                    }
                }
            }
        });

        Ok(())
    }

    pub fn stop(&self) {
        let mut inner = self.inner.lock();
        if let Some(handle) = inner.subscription.take() {
            handle.unsubscribe();
        }
        inner.epoch += 1;
    }
}
