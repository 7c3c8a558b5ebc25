/// Default inbound UI port name.
pub const DEFAULT_INBOUND_PORT: &str = "startItem";
/// Default outbound UI port name for added items.
pub const DEFAULT_OUTBOUND_PORT: &str = "itemStarted";
/// Default outbound UI port name for changed items.
pub const DEFAULT_UPDATED_PORT: &str = "itemUpdated";
/// Default collection name.
pub const DEFAULT_COLLECTION: &str = "items";

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Forward "changed" notifications on the updated port
    pub forward_changes: bool,

    /// Inbound UI port name (may be empty - this is a fact, not an error)
    /// 入站端口名称（可能为空 - 这就是事实，不是错误）
    pub inbound_port: String,

    /// Outbound UI port name for added items
    pub outbound_port: String,

    /// Outbound UI port name for changed items
    pub updated_port: String,

    /// Name of the collection the bridge listens to
    pub collection: String,

    /// Make every create fail (exercises the silent-failure path)
    pub reject_creates: bool,

    /// Write logs to the platform log directory in addition to stderr
    pub file_logging: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// **Prohibited / 禁止**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let bool_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_bool())
                .unwrap_or(false)
        };

        Ok(Self {
            forward_changes: bool_at("bridge", "forward_changes"),
            inbound_port: str_at("ports", "inbound"),
            outbound_port: str_at("ports", "outbound"),
            updated_port: str_at("ports", "updated"),
            collection: str_at("feed", "collection"),
            reject_creates: bool_at("feed", "reject_creates"),
            file_logging: bool_at("logging", "file_logging"),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            forward_changes: false,
            inbound_port: String::new(),
            outbound_port: String::new(),
            updated_port: String::new(),
            collection: String::new(),
            reject_creates: false,
            file_logging: false,
        }
    }

    /// Create AppConfig with the canonical port and collection names.
    /// 使用标准端口名和集合名创建 AppConfig
    pub fn with_defaults() -> Self {
        Self {
            inbound_port: DEFAULT_INBOUND_PORT.to_string(),
            outbound_port: DEFAULT_OUTBOUND_PORT.to_string(),
            updated_port: DEFAULT_UPDATED_PORT.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            ..Self::empty()
        }
    }
}
