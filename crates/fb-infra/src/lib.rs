pub mod feed;
pub mod time;
pub mod ui;

pub use feed::{CreatePolicy, InMemoryFeedCollection, PushKeyGenerator};
pub use time::SystemClock;
pub use ui::{ChannelUiInbound, ChannelUiOutbound, UiMessage};
