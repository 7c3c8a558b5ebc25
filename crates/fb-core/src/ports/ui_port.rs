use async_trait::async_trait;
use tokio::sync::mpsc;

use super::errors::UiPortError;
use crate::feed::{Item, StartRequest};

/// Outbound message ports toward the UI runtime.
///
/// UI 运行时的出站端口。
///
/// # Behavior / 行为
/// - Sends are synchronous so callers keep the order in which they observed items.
/// - 发送是同步的，调用方观察到的顺序即为 UI 收到的顺序。
pub trait UiOutboundPort: Send + Sync {
    /// Port carrying newly observed items.
    fn send_item_added(&self, item: Item) -> Result<(), UiPortError>;

    /// Port carrying items rewritten in place.
    fn send_item_updated(&self, item: Item) -> Result<(), UiPortError>;
}

/// Inbound message port from the UI runtime.
///
/// UI 运行时的入站端口。
#[async_trait]
pub trait UiInboundPort: Send + Sync {
    /// Subscribe to start requests issued by the user.
    ///
    /// Expected to be called once; implementations may refuse a second subscriber.
    async fn subscribe_start_requests(&self) -> Result<mpsc::Receiver<StartRequest>, UiPortError>;
}
