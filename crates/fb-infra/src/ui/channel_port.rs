use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use fb_core::ports::{UiInboundPort, UiOutboundPort, UiPortError};
use fb_core::{Item, StartRequest};
use tokio::sync::mpsc;

/// Message leaving the bridge toward the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum UiMessage {
    ItemAdded(Item),
    ItemUpdated(Item),
}

impl UiMessage {
    pub fn item(&self) -> &Item {
        match self {
            UiMessage::ItemAdded(item) | UiMessage::ItemUpdated(item) => item,
        }
    }
}

/// Outbound port writing into an unbounded channel.
///
/// Unbounded keeps sends synchronous and ordered.
pub struct ChannelUiOutbound {
    tx: mpsc::UnboundedSender<UiMessage>,
}

impl ChannelUiOutbound {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<UiMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl UiOutboundPort for ChannelUiOutbound {
    fn send_item_added(&self, item: Item) -> Result<(), UiPortError> {
        self.tx
            .send(UiMessage::ItemAdded(item))
            .map_err(|_| UiPortError::ChannelClosed)
    }

    fn send_item_updated(&self, item: Item) -> Result<(), UiPortError> {
        self.tx
            .send(UiMessage::ItemUpdated(item))
            .map_err(|_| UiPortError::ChannelClosed)
    }
}

/// Inbound port handing out its receiver to the first subscriber.
pub struct ChannelUiInbound {
    port_name: String,
    rx: Mutex<Option<mpsc::Receiver<StartRequest>>>,
}

impl ChannelUiInbound {
    pub fn new(
        port_name: impl Into<String>,
        capacity: usize,
    ) -> (mpsc::Sender<StartRequest>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (
            tx,
            Self {
                port_name: port_name.into(),
                rx: Mutex::new(Some(rx)),
            },
        )
    }
}

#[async_trait]
impl UiInboundPort for ChannelUiInbound {
    async fn subscribe_start_requests(&self) -> Result<mpsc::Receiver<StartRequest>, UiPortError> {
        self.rx
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .ok_or_else(|| UiPortError::AlreadySubscribed(self.port_name.clone()))
    }
}
