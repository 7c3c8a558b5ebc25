//! ID type wrappers for type safety.

pub mod item_key;

pub use item_key::{InvalidItemKey, ItemKey};
