//! Port messages exchanged with the UI runtime
//! 与 UI 运行时交换的端口消息

use fb_core::config::app_config::{
    DEFAULT_INBOUND_PORT, DEFAULT_OUTBOUND_PORT, DEFAULT_UPDATED_PORT,
};
use fb_core::AppConfig;
use fb_infra::UiMessage;
use serde::{Deserialize, Serialize};

/// One message on a named port, as written on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortMessage {
    pub port: String,
    pub payload: serde_json::Value,
}

/// Names of the UI ports the bridge talks on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortNames {
    pub inbound: String,
    pub outbound: String,
    pub updated: String,
}

impl PortNames {
    /// Empty names in the configuration fall back to the canonical ones.
    pub fn from_config(config: &AppConfig) -> Self {
        fn or_default(name: &str, default: &str) -> String {
            if name.is_empty() {
                default.to_string()
            } else {
                name.to_string()
            }
        }

        Self {
            inbound: or_default(&config.inbound_port, DEFAULT_INBOUND_PORT),
            outbound: or_default(&config.outbound_port, DEFAULT_OUTBOUND_PORT),
            updated: or_default(&config.updated_port, DEFAULT_UPDATED_PORT),
        }
    }

    pub fn envelope(&self, message: &UiMessage) -> PortMessage {
        let port = match message {
            UiMessage::ItemAdded(_) => &self.outbound,
            UiMessage::ItemUpdated(_) => &self.updated,
        };
        PortMessage {
            port: port.clone(),
            payload: message.item().to_value(),
        }
    }
}
