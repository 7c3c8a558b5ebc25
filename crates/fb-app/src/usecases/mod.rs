pub mod bridge;
pub mod forward_added_item;
pub mod forward_changed_item;
pub mod submit_start;

#[cfg(test)]
pub(crate) mod test_support;

pub use bridge::{
    BridgeContext, BridgeOptions, FeedBridge, FeedBridgeDeps, RunningBridge, StartBridgeError,
};
pub use forward_added_item::ForwardAddedItem;
pub use forward_changed_item::ForwardChangedItem;
pub use submit_start::SubmitStart;
