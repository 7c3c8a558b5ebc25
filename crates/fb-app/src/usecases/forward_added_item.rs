//! Use case for forwarding a newly observed feed item to the UI
//! 将新观察到的条目转发到 UI 的用例

use std::sync::Arc;

use fb_core::ports::UiOutboundPort;
use fb_core::{Item, ItemKey, RawItem};
use tracing::{info, info_span, warn};

use super::bridge::BridgeContext;

/// Normalizes an "added" record and forwards it on the outbound UI port.
///
/// ## Behavior / 行为
/// - The key is merged into the record as `id`, replacing any existing `id` field
/// - The key is recorded as the last seen id (diagnostic only)
/// - Exactly one message is sent per call; duplicates are not filtered
/// - A failed send is logged and swallowed
pub struct ForwardAddedItem {
    ui: Arc<dyn UiOutboundPort>,
    context: Arc<BridgeContext>,
}

impl ForwardAddedItem {
    pub fn new(ui: Arc<dyn UiOutboundPort>, context: Arc<BridgeContext>) -> Self {
        Self { ui, context }
    }

    pub fn execute(&self, raw: RawItem, key: ItemKey) {
        let span = info_span!("usecase.forward_added_item.execute", key = %key);
        let _enter = span.enter();

        let item = Item::from_raw(raw, key.clone());
        self.context.record_last_seen(key);
        info!(item = %item.to_value(), "Observed feed item");

        if let Err(err) = self.ui.send_item_added(item) {
            warn!(error = %err, "Failed to forward feed item to UI");
        }
    }
}
