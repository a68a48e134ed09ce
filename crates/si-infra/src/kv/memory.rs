use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use si_core::ports::KeyValueStorePort;

/// Process-local key-value store, used by tests and dry runs.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty store.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// use si_infra::InMemoryKeyValueStore;
    ///
    /// let store = InMemoryKeyValueStore::new().with_value("stashit-stack", "[]").await;
    /// assert_eq!(store.raw("stashit-stack").await.as_deref(), Some("[]"));
    /// assert_eq!(store.raw("other").await, None);
    /// # }
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing any encoding.
    pub async fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Current value of `key`, as stored.
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().await.get(key).cloned()
    }
}

#[async_trait]
impl KeyValueStorePort for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
