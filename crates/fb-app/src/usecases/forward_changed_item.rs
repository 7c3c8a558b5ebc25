//! Use case for forwarding an in-place change of a feed item to the UI

use std::sync::Arc;

use fb_core::ports::UiOutboundPort;
use fb_core::{Item, ItemKey, RawItem};
use tracing::{debug, info_span, warn};

/// Normalizes a "changed" record and forwards it on the updated port.
///
/// Same merge rule as [`super::ForwardAddedItem`]; does not touch the last
/// seen id.
pub struct ForwardChangedItem {
    ui: Arc<dyn UiOutboundPort>,
}

impl ForwardChangedItem {
    pub fn new(ui: Arc<dyn UiOutboundPort>) -> Self {
        Self { ui }
    }

    pub fn execute(&self, raw: RawItem, key: ItemKey) {
        let span = info_span!("usecase.forward_changed_item.execute", key = %key);
        let _enter = span.enter();

        let item = Item::from_raw(raw, key);
        debug!(item = %item.to_value(), "Observed feed item change");

        if let Err(err) = self.ui.send_item_updated(item) {
            warn!(error = %err, "Failed to forward feed item change to UI");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{key, raw, MockUiOutbound};
    use fb_core::ports::UiPortError;
    use serde_json::json;

    #[test]
    fn test_forwards_on_updated_port_only() {
        let mut ui = MockUiOutbound::new();
        ui.expect_send_item_added().never();
        ui.expect_send_item_updated()
            .withf(|item| item.to_value() == json!({"id": "A", "score": 10}))
            .times(1)
            .returning(|_| Ok(()));

        ForwardChangedItem::new(Arc::new(ui)).execute(raw(json!({"score": 10})), key("A"));
    }

    #[test]
    fn test_send_failure_is_swallowed() {
        let mut ui = MockUiOutbound::new();
        ui.expect_send_item_updated()
            .times(1)
            .returning(|_| Err(UiPortError::ChannelClosed));

        ForwardChangedItem::new(Arc::new(ui)).execute(raw(json!({})), key("A"));
    }
}
