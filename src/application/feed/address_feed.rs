use std::sync::Arc;

use log::{debug, warn};
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::application::feed::merge::merge_visible;
use crate::core::error::AppResult;
use crate::domain::address::address::Address;
use crate::domain::address::address_repository_interface::AddressRepositoryInterface;
use crate::domain::session::UserSession;
use crate::infrastructure::model::address_repository::{AddressSnapshotEvent, AddressSubscription};
use crate::infrastructure::store::SubscriptionHandle;

type ErrorListener = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Clone, Copy)]
enum SourceStream {
    Mine,
    Public,
}

struct FeedInner {
    /// Bumped on every start/stop/session change; a snapshot delivery only
    /// applies when its captured epoch still matches, so a late callback
    /// from a torn-down subscription can never mutate state.
    epoch: u64,
    session: Option<UserSession>,
    my_addresses: Vec<Address>,
    other_public_addresses: Vec<Address>,
    show_public: bool,
    show_private: bool,
    subscriptions: Vec<SubscriptionHandle>,
}

impl FeedInner {
    fn merged(&self) -> Vec<Address> {
        merge_visible(
            &self.my_addresses,
            &self.other_public_addresses,
            self.show_public,
            self.show_private,
        )
    }

    fn release_subscriptions(&mut self) {
        for handle in self.subscriptions.drain(..) {
            handle.unsubscribe();
        }
    }
}

/// Live merged view over "my addresses" and "all public addresses",
/// filtered by the two visibility toggles. Both toggles start on.
///
/// Subscription errors are reported to the error listener and leave the
/// last known-good snapshot in place; the merged list never flashes empty
/// on a transient failure.
pub struct AddressFeed {
    repository: Arc<dyn AddressRepositoryInterface>,
    inner: Arc<Mutex<FeedInner>>,
    output: watch::Sender<Vec<Address>>,
    on_error: Arc<Mutex<Option<ErrorListener>>>,
}

impl AddressFeed {
    pub fn new(repository: Arc<dyn AddressRepositoryInterface>) -> Self {
        let (output, _) = watch::channel(Vec::new());
        Self {
            repository,
            inner: Arc::new(Mutex::new(FeedInner {
                epoch: 0,
                session: None,
                my_addresses: Vec::new(),
                other_public_addresses: Vec::new(),
                show_public: true,
                show_private: true,
                subscriptions: Vec::new(),
            })),
            output,
            on_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Merged display list. The receiver sees the current value immediately
    /// and every recomputation afterwards.
    pub fn visible(&self) -> watch::Receiver<Vec<Address>> {
        self.output.subscribe()
    }

    /// Current merged display list, without subscribing.
    pub fn current(&self) -> Vec<Address> {
        self.output.borrow().clone()
    }

    /// Session the feed is currently subscribed for, if started.
    pub fn session(&self) -> Option<UserSession> {
        self.inner.lock().session.clone()
    }

    pub fn set_error_listener(&self, listener: impl Fn(&str) + Send + Sync + 'static) {
        *self.on_error.lock() = Some(Arc::new(listener));
    }

    /// Establishes both source subscriptions for `session`. Any previous
    /// subscriptions are fully released first; their late deliveries are
    /// discarded by the epoch guard.
    pub fn start(&self, session: UserSession) -> AppResult<()> {
        let (epoch, mine, public) = {
            let mut inner = self.inner.lock();
            inner.release_subscriptions();
            inner.epoch += 1;
            inner.my_addresses.clear();
            inner.other_public_addresses.clear();
            inner.session = Some(session.clone());

            let mine = self.repository.subscribe_user_addresses(&session.user_id)?;
            let public = self.repository.subscribe_public_addresses()?;
            inner.subscriptions = vec![mine.handle(), public.handle()];
            (inner.epoch, mine, public)
        };

        debug!("address feed started for user {} (epoch {})", session.user_id, epoch);
        self.spawn_pump(mine, SourceStream::Mine, epoch, session.user_id.clone());
        self.spawn_pump(public, SourceStream::Public, epoch, session.user_id);
        Ok(())
    }

    /// Re-subscribes for a different signed-in user.
    pub fn set_session(&self, session: UserSession) -> AppResult<()> {
        self.start(session)
    }

    /// Tears down both subscriptions. Synchronous: no further snapshot is
    /// applied once this returns. The last merged list stays published.
    pub fn stop(&self) {
        let mut inner = self.inner.lock();
        inner.release_subscriptions();
        inner.epoch += 1;
        inner.session = None;
    }

    pub fn set_show_public(&self, show_public: bool) {
        let mut inner = self.inner.lock();
        inner.show_public = show_public;
        self.output.send_replace(inner.merged());
    }

    pub fn set_show_private(&self, show_private: bool) {
        let mut inner = self.inner.lock();
        inner.show_private = show_private;
        self.output.send_replace(inner.merged());
    }

    fn spawn_pump(
        &self,
        mut subscription: AddressSubscription,
        stream: SourceStream,
        epoch: u64,
        user_id: String,
    ) {
        let inner = Arc::clone(&self.inner);
        let output = self.output.clone();
        let on_error = Arc::clone(&self.on_error);

        tokio::spawn(async move {
            while let Some(event) = subscription.recv().await {
                match event {
                    AddressSnapshotEvent::Snapshot(addresses) => {
                        let mut inner = inner.lock();
                        if inner.epoch != epoch {
                            break;
                        }
                        match stream {
                            SourceStream::Mine => inner.my_addresses = addresses,
                            // Owner's documents always come from the "mine"
                            // stream, never the public one.
                            SourceStream::Public => {
                                inner.other_public_addresses = addresses
                                    .into_iter()
                                    .filter(|a| a.user_id != user_id)
                                    .collect();
                            }
                        }
                        output.send_replace(inner.merged());
                    }
                    AddressSnapshotEvent::Error(message) => {
                        if inner.lock().epoch != epoch {
                            break;
                        }
                        warn!("address subscription error, keeping stale snapshot: {}", message);
                        let listener = on_error.lock().clone();
                        if let Some(listener) = listener {
                            listener(&message);
                        }
                    }
                }
            }
        });
    }
}
