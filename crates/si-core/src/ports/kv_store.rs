use anyhow::Result;
use async_trait::async_trait;

/// Persistent get/set-by-key blob store.
///
/// `set` replaces the whole value for `key` atomically: a reader sees either the
/// previous blob or the new one, never a mix.
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// `Ok(None)` when nothing was ever stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
