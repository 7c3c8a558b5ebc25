use serde::{Deserialize, Serialize};

use super::RawItem;

/// Request from the UI to create a new item.
///
/// Opaque on purpose: the bridge performs no validation and hands the fields to
/// the collection's create API as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StartRequest(RawItem);

impl StartRequest {
    pub fn new(fields: RawItem) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &RawItem {
        &self.0
    }

    pub fn into_fields(self) -> RawItem {
        self.0
    }
}

impl From<RawItem> for StartRequest {
    fn from(fields: RawItem) -> Self {
        Self(fields)
    }
}
