//! Feed collection port - abstracts the external keyed collection
//!
//! The collection is ordered by key and appendable. It assigns a key on every
//! create and pushes notifications to its listeners.

use async_trait::async_trait;

use super::errors::FeedError;
use crate::feed::{FeedEvent, StartRequest};
use crate::ids::ItemKey;
use crate::subscription::FeedSubscription;

#[async_trait]
pub trait FeedCollectionPort: Send + Sync {
    /// Append a new record and return the key the collection assigned to it.
    ///
    /// Validation, if any, is the collection's business.
    async fn create(&self, request: StartRequest) -> Result<ItemKey, FeedError>;

    /// Listen for `Added` events.
    ///
    /// Every record already present at subscription time is delivered first, in
    /// key order, followed by each record appended afterwards.
    async fn subscribe_added(&self) -> Result<FeedSubscription<FeedEvent>, FeedError>;

    /// Listen for `Changed` events on existing records. No initial sync.
    async fn subscribe_changed(&self) -> Result<FeedSubscription<FeedEvent>, FeedError>;
}
