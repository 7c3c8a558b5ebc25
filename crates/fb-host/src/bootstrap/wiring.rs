//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (collection, clock, channels) / 创建 infra 层具体实现
//! - ✅ Inject all dependencies into the bridge / 将所有依赖注入到 bridge
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//!
//! > **This is the only place allowed to depend on fb-infra + fb-app simultaneously.**
//! > **这是唯一允许同时依赖 fb-infra 和 fb-app 的地方。**

use std::sync::Arc;

use fb_app::{BridgeContext, BridgeOptions, FeedBridge, FeedBridgeDeps};
use fb_core::config::app_config::DEFAULT_COLLECTION;
use fb_core::{AppConfig, ItemKey, RawItem, StartRequest};
use fb_infra::{
    ChannelUiInbound, ChannelUiOutbound, CreatePolicy, InMemoryFeedCollection, SystemClock,
    UiMessage,
};
use tokio::sync::mpsc;

use crate::events::PortNames;

/// Capacity of the inbound start-request channel.
const INBOUND_CAPACITY: usize = 64;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Seeding collection '{collection}' failed at key '{key}': {reason}")]
    Seed {
        collection: String,
        key: String,
        reason: String,
    },
}

/// Everything the run loop needs after assembly.
pub struct Wired {
    pub bridge: FeedBridge,
    pub feed: Arc<InMemoryFeedCollection>,
    pub ports: PortNames,
    /// Host end of the inbound port.
    pub start_requests: mpsc::Sender<StartRequest>,
    /// Host end of the outbound ports.
    pub ui_messages: mpsc::UnboundedReceiver<UiMessage>,
}

/// Assemble the bridge from configuration and seed records.
///
/// Seed records are written before the bridge subscribes, so they reach the UI
/// through the initial sync.
pub fn wire(config: &AppConfig, seed: Vec<(ItemKey, RawItem)>) -> WiringResult<Wired> {
    let collection = if config.collection.is_empty() {
        DEFAULT_COLLECTION.to_string()
    } else {
        config.collection.clone()
    };
    let policy = if config.reject_creates {
        CreatePolicy::RejectAll
    } else {
        CreatePolicy::Accept
    };

    let feed = Arc::new(
        InMemoryFeedCollection::new(collection.clone(), Arc::new(SystemClock))
            .with_create_policy(policy),
    );
    for (key, record) in seed {
        feed.set(key.clone(), record).map_err(|err| WiringError::Seed {
            collection: collection.clone(),
            key: key.to_string(),
            reason: err.to_string(),
        })?;
    }

    let ports = PortNames::from_config(config);
    let (start_requests, inbound) = ChannelUiInbound::new(ports.inbound.clone(), INBOUND_CAPACITY);
    let (outbound, ui_messages) = ChannelUiOutbound::new();

    let bridge = FeedBridge::from_deps(
        FeedBridgeDeps {
            feed: feed.clone(),
            ui_inbound: Arc::new(inbound),
            ui_outbound: Arc::new(outbound),
            context: Arc::new(BridgeContext::new()),
        },
        BridgeOptions {
            forward_changes: config.forward_changes,
        },
    );

    Ok(Wired {
        bridge,
        feed,
        ports,
        start_requests,
        ui_messages,
    })
}
