use std::sync::{PoisonError, RwLock};

use fb_core::ItemKey;

/// Process-wide bridge state, constructed once at startup.
///
/// Holds only the most recently observed key. The value is diagnostic: nothing
/// branches on it. Concurrent writers race and the last write wins.
#[derive(Debug, Default)]
pub struct BridgeContext {
    last_seen_id: RwLock<Option<ItemKey>>,
}

impl BridgeContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_last_seen(&self, key: ItemKey) {
        *self
            .last_seen_id
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(key);
    }

    pub fn last_seen_id(&self) -> Option<ItemKey> {
        self.last_seen_id
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
