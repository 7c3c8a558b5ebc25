use serde::{Deserialize, Serialize};

use super::RawItem;
use crate::ids::ItemKey;

/// A single record as observed on the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedRecord {
    pub key: ItemKey,
    pub value: RawItem,
}

impl FeedRecord {
    pub fn new(key: ItemKey, value: RawItem) -> Self {
        Self { key, value }
    }
}

/// Notification pushed by the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedEvent {
    /// An item became visible: either present at subscription time or appended later.
    Added(FeedRecord),
    /// An existing item was rewritten in place.
    Changed(FeedRecord),
}

impl FeedEvent {
    pub fn record(&self) -> &FeedRecord {
        match self {
            FeedEvent::Added(record) | FeedEvent::Changed(record) => record,
        }
    }

    pub fn key(&self) -> &ItemKey {
        &self.record().key
    }
}
