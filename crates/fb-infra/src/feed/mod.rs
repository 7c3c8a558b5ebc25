//! In-process rendition of the external keyed collection.

mod memory_collection;
mod push_key;
mod validation;

pub use memory_collection::{CreatePolicy, InMemoryFeedCollection};
pub use push_key::PushKeyGenerator;
pub use validation::validate_record;
