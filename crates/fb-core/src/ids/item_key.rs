use serde::{Deserialize, Serialize};

/// Collection-assigned key of a feed item.
///
/// Keys are handed out by the external collection when an item is created and
/// stay stable for the item's lifetime. A key is never empty; the constructor
/// enforces it so every forwarded [`crate::Item`] carries a usable identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemKey(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("item key must not be empty")]
pub struct InvalidItemKey;

impl ItemKey {
    pub fn parse(s: impl Into<String>) -> Result<Self, InvalidItemKey> {
        let s = s.into();
        if s.is_empty() {
            return Err(InvalidItemKey);
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ItemKey {
    type Error = InvalidItemKey;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ItemKey {
    type Error = InvalidItemKey;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<ItemKey> for String {
    fn from(key: ItemKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ItemKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for ItemKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
