//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - ✅ Read the JSON seed file for the in-memory collection / 读取种子数据
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value logic / 禁止默认值逻辑**

use anyhow::{anyhow, Context};
use fb_core::config::AppConfig;
use fb_core::{ItemKey, RawItem};
use std::path::PathBuf;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **NO validation is performed**: missing sections result in empty values.
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Load seed records from a JSON object of `{key: record}`.
///
/// Records come back in key order.
pub fn load_seed(seed_path: PathBuf) -> anyhow::Result<Vec<(ItemKey, RawItem)>> {
    let content = std::fs::read_to_string(&seed_path)
        .with_context(|| format!("Failed to read seed file: {}", seed_path.display()))?;
    let records: RawItem =
        serde_json::from_str(&content).context("Seed file must hold a JSON object")?;

    let mut seed = records
        .into_iter()
        .map(|(key, value)| {
            let item_key =
                ItemKey::parse(key).context("Seed file contains an empty key")?;
            match value {
                serde_json::Value::Object(record) => Ok((item_key, record)),
                _ => Err(anyhow!("Seed record '{item_key}' is not a JSON object")),
            }
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    seed.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(seed)
}
