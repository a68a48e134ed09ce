use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

/// Hands files to the desktop: the default application, or the file manager.
#[async_trait]
pub trait LauncherPort: Send + Sync {
    /// Open `path` with its default application.
    async fn open(&self, path: &Path) -> Result<()>;

    /// Show `path` selected in the file manager.
    async fn reveal(&self, path: &Path) -> Result<()>;
}
