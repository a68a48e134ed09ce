use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// Filesystem operations used by capture and drop.
#[async_trait]
pub trait FileSystemPort: Send + Sync {
    /// Stat `path`, following symlinks. Errors when the entry is missing or
    /// inaccessible.
    async fn entry_kind(&self, path: &Path) -> Result<EntryKind>;

    async fn exists(&self, path: &Path) -> bool;

    /// Copy the contents of `from` into a new file `to`; fails if `to` exists.
    async fn copy_file(&self, from: &Path, to: &Path) -> Result<()>;

    /// Move `from` to `to`, also across filesystems. Callers check `to` first;
    /// whether an existing `to` is replaced depends on the platform rename.
    async fn move_file(&self, from: &Path, to: &Path) -> Result<()>;

    /// Create `path` with `contents`; fails if it already exists.
    async fn write_new_file(&self, path: &Path, contents: &[u8]) -> Result<()>;
}
