use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::debug;

use si_core::ports::KeyValueStorePort;

#[derive(Debug, Error)]
pub enum KvStoreError {
    #[error("key must not be empty")]
    EmptyKey,
}

/// Key-value store keeping one file per key inside a directory.
///
/// Values are replaced atomically: the new value is written to a temporary
/// file next to the target and renamed over it.
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    ///
    /// # Examples
    ///
    /// ```
    /// use si_infra::FileKeyValueStore;
    /// let _store = FileKeyValueStore::new("/tmp/stashit/kv");
    /// ```
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the value files.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use si_infra::FileKeyValueStore;
    ///
    /// let store = FileKeyValueStore::new("/tmp/stashit/kv");
    /// assert_eq!(store.dir(), Path::new("/tmp/stashit/kv"));
    /// ```
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. Characters outside `[A-Za-z0-9_-]` are replaced so a
    /// key can never escape the store directory.
    ///
    /// # Returns
    ///
    /// `<dir>/<sanitized key>.value`.
    ///
    /// # Errors
    ///
    /// [`KvStoreError::EmptyKey`] for an empty key.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() {
            return Err(KvStoreError::EmptyKey.into());
        }
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        Ok(self.dir.join(format!("{file_name}.value")))
    }

    async fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("create kv dir failed: {}", self.dir.display()))
    }

    async fn atomic_write(&self, path: &Path, content: &str) -> Result<()> {
        self.ensure_dir().await?;

        let tmp_path = path.with_extension("value.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp value failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, path).await.with_context(|| {
            format!(
                "rename temp value to target failed: {} -> {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read value failed: {}", path.display())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        self.atomic_write(&path, value).await?;
        debug!(key, bytes = value.len(), "Stored value");
        Ok(())
    }
}
