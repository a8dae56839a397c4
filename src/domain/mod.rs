//! Domain layer - Categories, items and identifiers

pub mod category;
pub mod id;
pub mod item;

pub use category::Category;
pub use id::{IdGenerator, SequentialIdGenerator, TimestampIdGenerator};
pub use item::{ItemId, ItemMap};
