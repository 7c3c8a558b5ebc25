//! The feed bridge: context, coordinator and running handle.

mod context;
mod coordinator;

pub use context::BridgeContext;
pub use coordinator::{BridgeOptions, FeedBridge, FeedBridgeDeps, RunningBridge, StartBridgeError};
