//! Port interfaces for the bridge
//!
//! Ports define the contract between the bridge use cases and the outside
//! world: the external feed collection on one side, the UI runtime on the
//! other. Concrete implementations live in `fb-infra` and `fb-host`.

mod clock;
pub mod errors;
pub mod feed;
pub mod ui_port;

pub use clock::ClockPort;
pub use errors::{FeedError, UiPortError};
pub use feed::FeedCollectionPort;
pub use ui_port::{UiInboundPort, UiOutboundPort};
