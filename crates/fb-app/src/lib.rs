//! feedbridge application layer
//!
//! This crate contains the bridge use cases and the coordinator that drives
//! them from the feed and UI subscriptions.

pub mod usecases;

pub use usecases::{
    BridgeContext, BridgeOptions, FeedBridge, FeedBridgeDeps, ForwardAddedItem,
    ForwardChangedItem, RunningBridge, StartBridgeError, SubmitStart,
};
