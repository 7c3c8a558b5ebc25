use serde::{Deserialize, Serialize};

use super::{RawItem, ID_FIELD};
use crate::ids::ItemKey;

/// A feed record enriched with its collection-assigned identity.
///
/// Serializes as one flat object: every raw field plus `id`. The key always
/// wins over a raw field of the same name.
///
/// 附带集合键作为 `id` 字段的条目，发送给 UI 后不再修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemKey,
    #[serde(flatten)]
    fields: RawItem,
}

impl Item {
    /// Merge `key` into `raw` as the `id` field (right-biased).
    pub fn from_raw(mut raw: RawItem, key: ItemKey) -> Self {
        raw.remove(ID_FIELD);
        Self { id: key, fields: raw }
    }

    pub fn id(&self) -> &ItemKey {
        &self.id
    }

    /// Fields other than `id`.
    pub fn fields(&self) -> &RawItem {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.fields.get(name)
    }

    /// Flat JSON object as seen by the UI.
    pub fn to_value(&self) -> serde_json::Value {
        let mut object = self.fields.clone();
        object.insert(
            ID_FIELD.to_string(),
            serde_json::Value::String(self.id.to_string()),
        );
        serde_json::Value::Object(object)
    }
}
