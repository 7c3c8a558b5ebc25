//! In-memory keyed collection with push notifications.
//!
//! Records are kept ordered by key. Listeners receive notifications through
//! unbounded channels, so a write never waits on a slow listener and each
//! listener observes writes in the order they were applied.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use async_trait::async_trait;
use fb_core::ports::{ClockPort, FeedCollectionPort, FeedError};
use fb_core::{FeedEvent, FeedRecord, FeedSubscription, ItemKey, RawItem, StartRequest};
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::push_key::PushKeyGenerator;
use super::validation::validate_record;

/// How `create` answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CreatePolicy {
    #[default]
    Accept,
    /// Every create fails as if the service were unreachable.
    RejectAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListenerKind {
    Added,
    Changed,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    senders: BTreeMap<u64, mpsc::UnboundedSender<FeedEvent>>,
}

impl Listeners {
    fn register(&mut self, tx: mpsc::UnboundedSender<FeedEvent>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.senders.insert(id, tx);
        id
    }

    fn remove(&mut self, id: u64) {
        self.senders.remove(&id);
    }

    /// Closed listeners are pruned on the way.
    fn broadcast(&mut self, event: &FeedEvent) {
        self.senders.retain(|_, tx| tx.send(event.clone()).is_ok());
    }
}

#[derive(Default)]
struct Inner {
    items: BTreeMap<ItemKey, RawItem>,
    added: Listeners,
    changed: Listeners,
}

impl Inner {
    fn listeners(&mut self, kind: ListenerKind) -> &mut Listeners {
        match kind {
            ListenerKind::Added => &mut self.added,
            ListenerKind::Changed => &mut self.changed,
        }
    }

    /// Insert or overwrite, notifying the matching listeners.
    fn write(&mut self, key: ItemKey, value: RawItem) {
        let existed = self.items.insert(key.clone(), value.clone()).is_some();
        let record = FeedRecord::new(key, value);
        if existed {
            self.changed.broadcast(&FeedEvent::Changed(record));
        } else {
            self.added.broadcast(&FeedEvent::Added(record));
        }
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct InMemoryFeedCollection {
    name: String,
    keys: PushKeyGenerator,
    policy: CreatePolicy,
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryFeedCollection {
    pub fn new(name: impl Into<String>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            name: name.into(),
            keys: PushKeyGenerator::new(clock),
            policy: CreatePolicy::default(),
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    pub fn with_create_policy(mut self, policy: CreatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write a record under an explicit key.
    ///
    /// A new key notifies "added" listeners, an existing one "changed" listeners.
    pub fn set(&self, key: ItemKey, value: RawItem) -> Result<(), FeedError> {
        validate_record(&value)?;
        lock(&self.inner).write(key, value);
        Ok(())
    }

    /// Overwrite an existing record. Unknown keys are rejected.
    pub fn update(&self, key: ItemKey, value: RawItem) -> Result<(), FeedError> {
        validate_record(&value)?;
        let mut inner = lock(&self.inner);
        if !inner.items.contains_key(&key) {
            return Err(FeedError::Rejected(format!("no record under key '{key}'")));
        }
        inner.write(key, value);
        Ok(())
    }

    pub fn get(&self, key: &ItemKey) -> Option<RawItem> {
        lock(&self.inner).items.get(key).cloned()
    }

    pub fn keys(&self) -> Vec<ItemKey> {
        lock(&self.inner).items.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live "added" and "changed" listeners.
    pub fn listener_count(&self) -> usize {
        let inner = lock(&self.inner);
        inner.added.senders.len() + inner.changed.senders.len()
    }

    fn subscribe(&self, kind: ListenerKind) -> FeedSubscription<FeedEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = lock(&self.inner);

        // Initial sync and registration happen under one lock: no record is
        // missed or delivered twice.
        if kind == ListenerKind::Added {
            for (key, value) in &inner.items {
                let _ = tx.send(FeedEvent::Added(FeedRecord::new(key.clone(), value.clone())));
            }
        }
        let id = inner.listeners(kind).register(tx);
        debug!(collection = %self.name, ?kind, listener = id, "Listener registered");

        let weak: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        FeedSubscription::new(rx, move || {
            if let Some(inner) = weak.upgrade() {
                lock(&inner).listeners(kind).remove(id);
            }
        })
    }
}

#[async_trait]
impl FeedCollectionPort for InMemoryFeedCollection {
    async fn create(&self, request: StartRequest) -> Result<ItemKey, FeedError> {
        if self.policy == CreatePolicy::RejectAll {
            return Err(FeedError::Unavailable(format!(
                "collection '{}' refuses writes",
                self.name
            )));
        }

        let value = request.into_fields();
        validate_record(&value)?;
        let key = self
            .keys
            .next_key()
            .map_err(|err| FeedError::Unavailable(err.to_string()))?;

        lock(&self.inner).write(key.clone(), value);
        trace!(collection = %self.name, key = %key, "Record appended");
        Ok(key)
    }

    async fn subscribe_added(&self) -> Result<FeedSubscription<FeedEvent>, FeedError> {
        Ok(self.subscribe(ListenerKind::Added))
    }

    async fn subscribe_changed(&self) -> Result<FeedSubscription<FeedEvent>, FeedError> {
        Ok(self.subscribe(ListenerKind::Changed))
    }
}
