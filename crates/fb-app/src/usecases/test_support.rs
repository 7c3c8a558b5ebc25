//! Shared mocks for use case tests.

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fb_core::ports::{FeedCollectionPort, FeedError, UiOutboundPort, UiPortError};
use fb_core::{FeedEvent, FeedSubscription, Item, ItemKey, RawItem, StartRequest};
use tracing_subscriber::fmt::MakeWriter;

mockall::mock! {
    pub Feed {}

    #[async_trait]
    impl FeedCollectionPort for Feed {
        async fn create(&self, request: StartRequest) -> Result<ItemKey, FeedError>;
        async fn subscribe_added(&self) -> Result<FeedSubscription<FeedEvent>, FeedError>;
        async fn subscribe_changed(&self) -> Result<FeedSubscription<FeedEvent>, FeedError>;
    }
}

mockall::mock! {
    pub UiOutbound {}

    impl UiOutboundPort for UiOutbound {
        fn send_item_added(&self, item: Item) -> Result<(), UiPortError>;
        fn send_item_updated(&self, item: Item) -> Result<(), UiPortError>;
    }
}

/// Outbound port that keeps everything it was asked to send.
#[derive(Default)]
pub struct RecordingUi {
    pub added: Mutex<Vec<Item>>,
    pub updated: Mutex<Vec<Item>>,
}

impl RecordingUi {
    pub fn added(&self) -> Vec<Item> {
        self.added.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<Item> {
        self.updated.lock().unwrap().clone()
    }
}

impl UiOutboundPort for RecordingUi {
    fn send_item_added(&self, item: Item) -> Result<(), UiPortError> {
        self.added.lock().unwrap().push(item);
        Ok(())
    }

    fn send_item_updated(&self, item: Item) -> Result<(), UiPortError> {
        self.updated.lock().unwrap().push(item);
        Ok(())
    }
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Subscriber writing into this buffer, without colors.
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub fn raw(value: serde_json::Value) -> RawItem {
    value.as_object().cloned().expect("test payload must be an object")
}

pub fn key(s: &str) -> ItemKey {
    ItemKey::parse(s).expect("test key must be non-empty")
}
