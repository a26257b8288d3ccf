pub mod bookmark;
pub mod item;

pub use bookmark::Bookmark;
pub use item::{ItemId, ItemPayload, ResolvedValue, TabData, Timestamp};
