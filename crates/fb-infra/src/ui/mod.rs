//! Channel-backed UI ports.
//!
//! The UI runtime is represented by a pair of tokio channels: an outbound
//! stream of [`UiMessage`]s and an inbound stream of start requests. Hosts
//! attach whatever transport they need to the other ends.

mod channel_port;

pub use channel_port::{ChannelUiInbound, ChannelUiOutbound, UiMessage};
