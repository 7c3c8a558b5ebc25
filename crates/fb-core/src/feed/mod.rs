//! Feed domain models.
//!
//! A feed is an external, ordered, keyed collection that pushes a notification
//! for every item it holds. Records arrive as `(key, value)` pairs; the bridge
//! turns them into [`Item`]s before they reach the UI.

mod event;
mod item;
mod start_request;

pub use event::{FeedEvent, FeedRecord};
pub use item::Item;
pub use start_request::StartRequest;

/// Opaque record with service-defined fields.
pub type RawItem = serde_json::Map<String, serde_json::Value>;

/// Field name the bridge reserves for the collection key.
pub const ID_FIELD: &str = "id";
