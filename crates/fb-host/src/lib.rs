//! # fb-host
//!
//! Host layer for feedbridge.
//!
//! This crate provides:
//! - Bootstrap: configuration loading, tracing, dependency wiring, run loop
//! - Adapters: JSON-lines rendition of the UI ports over stdin/stdout
//! - Events: the wire envelope exchanged with the UI runtime
//!
//! ## Modules
//!
//! - **bootstrap**: `load_config`, `init_tracing_subscriber`, `wire`, `run_bridge`
//! - **adapters**: stdio UI pumps
//! - **events**: port message envelope and port names

pub mod adapters;
pub mod bootstrap;
pub mod events;

// Re-export commonly used types
pub use bootstrap::{load_config, load_seed, run_bridge};
pub use events::{PortMessage, PortNames};
