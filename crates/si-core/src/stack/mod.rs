mod collection;
mod item;

pub use collection::{DecodedStack, Stack};
pub use item::{FileItem, StackItem, TextItem, TimestampMs};
