pub mod fs;
pub mod kv;
pub mod time;

pub use fs::{StashDirs, TokioFileSystem};
pub use kv::{FileKeyValueStore, InMemoryKeyValueStore};
pub use time::SystemClock;
