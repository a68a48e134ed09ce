mod file_store;
mod memory;

pub use file_store::{FileKeyValueStore, KvStoreError};
pub use memory::InMemoryKeyValueStore;
