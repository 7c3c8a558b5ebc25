//! # fb-core
//!
//! Core domain models and port contracts for feedbridge.
//!
//! This crate contains pure domain types without any infrastructure dependencies.
//! The bridge itself lives in `fb-app`; concrete collections and UI channels
//! live in `fb-infra` and `fb-host`.

pub mod config;
pub mod feed;
pub mod ids;
pub mod ports;
pub mod subscription;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use feed::{FeedEvent, FeedRecord, Item, RawItem, StartRequest};
pub use ids::{InvalidItemKey, ItemKey};
pub use subscription::FeedSubscription;
