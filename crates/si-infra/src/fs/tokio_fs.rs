use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use si_core::ports::{EntryKind, FileSystemPort};

#[cfg(unix)]
const CROSS_DEVICE_ERRNO: i32 = 18; // EXDEV
#[cfg(windows)]
const CROSS_DEVICE_ERRNO: i32 = 17; // ERROR_NOT_SAME_DEVICE

/// [`FileSystemPort`] backed by `tokio::fs`.
///
/// Copies and text writes never overwrite: the target is opened with
/// `create_new`, so a collision surfaces as `ErrorKind::AlreadyExists`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    /// Creates the adapter. It holds no state; every call goes straight to
    /// `tokio::fs`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use si_core::ports::FileSystemPort;
    /// use si_infra::TokioFileSystem;
    ///
    /// let _fs: Arc<dyn FileSystemPort> = Arc::new(TokioFileSystem::new());
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Stream `from` into a freshly created `to`.
    ///
    /// # Returns
    ///
    /// The number of bytes copied.
    ///
    /// # Errors
    ///
    /// Fails with `ErrorKind::AlreadyExists` in the chain when `to` exists.
    async fn copy_no_clobber(from: &Path, to: &Path) -> Result<u64> {
        let mut source = fs::File::open(from)
            .await
            .with_context(|| format!("open source failed: {}", from.display()))?;
        let permissions = source.metadata().await?.permissions();

        let mut target = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(to)
            .await
            .with_context(|| format!("create target failed: {}", to.display()))?;

        let bytes = tokio::io::copy(&mut source, &mut target)
            .await
            .with_context(|| format!("copy {} -> {} failed", from.display(), to.display()))?;
        target.flush().await?;
        drop(target);

        if let Err(e) = fs::set_permissions(to, permissions).await {
            warn!(target = %to.display(), error = %e, "Could not carry permissions over");
        }

        Ok(bytes)
    }
}

fn is_cross_device(err: &std::io::Error) -> bool {
    #[cfg(any(unix, windows))]
    {
        err.raw_os_error() == Some(CROSS_DEVICE_ERRNO)
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = err;
        false
    }
}

#[async_trait]
impl FileSystemPort for TokioFileSystem {
    async fn entry_kind(&self, path: &Path) -> Result<EntryKind> {
        let meta = fs::metadata(path)
            .await
            .with_context(|| format!("stat failed: {}", path.display()))?;
        Ok(if meta.is_file() {
            EntryKind::File
        } else if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        })
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    async fn copy_file(&self, from: &Path, to: &Path) -> Result<()> {
        let bytes = Self::copy_no_clobber(from, to).await?;
        debug!(from = %from.display(), to = %to.display(), bytes, "Copied file");
        Ok(())
    }

    async fn move_file(&self, from: &Path, to: &Path) -> Result<()> {
        match fs::rename(from, to).await {
            Ok(()) => {
                debug!(from = %from.display(), to = %to.display(), "Renamed file");
                Ok(())
            }
            Err(e) if is_cross_device(&e) => {
                debug!(from = %from.display(), "Rename crosses filesystems, copying instead");
                Self::copy_no_clobber(from, to).await?;
                fs::remove_file(from).await.with_context(|| {
                    format!("copied but could not remove source: {}", from.display())
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(e).with_context(|| format!("source vanished: {}", from.display()))
            }
            Err(e) => Err(e)
                .with_context(|| format!("rename {} -> {} failed", from.display(), to.display())),
        }
    }

    async fn write_new_file(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await
            .with_context(|| format!("create file failed: {}", path.display()))?;
        file.write_all(contents)
            .await
            .with_context(|| format!("write file failed: {}", path.display()))?;
        file.flush().await?;
        Ok(())
    }
}
