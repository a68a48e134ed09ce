use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, warn};

use si_core::drop::text_file_name;
use si_core::ports::FileSystemPort;
use si_core::{DropMode, DropReport, FileItem, StackItem, StashError, TextItem};

/// Materializes stack items inside a destination directory.
///
/// Items are processed in stack order. A failing item is recorded in the
/// report and the batch moves on; nothing is rolled back. Existing files are
/// never overwritten.
#[derive(Clone)]
pub struct DropExecutor {
    fs: Arc<dyn FileSystemPort>,
}

impl DropExecutor {
    pub fn new(fs: Arc<dyn FileSystemPort>) -> Self {
        Self { fs }
    }

    /// Drop every item into `destination`, which the caller has already
    /// checked to be a directory.
    pub async fn execute(&self, items: &[StackItem], destination: &Path, mode: DropMode) -> DropReport {
        let mut report = DropReport::default();
        let mut text_index = 0;

        for item in items {
            let result = match item {
                StackItem::File(file) => self.drop_file(file, destination, mode).await,
                StackItem::Text(text) => {
                    text_index += 1;
                    self.drop_text(text, destination, text_index).await
                }
            };

            match result {
                Ok(()) => report.record_success(),
                Err(error) if error.is_item_level() => {
                    warn!(item_id = %item.id(), kind = item.kind(), %error, "Item not dropped");
                    report.record_failure(item.id().clone(), error);
                }
                Err(error) => {
                    error!(item_id = %item.id(), kind = item.kind(), %error, "Stack item is unusable");
                    report.record_failure(item.id().clone(), error);
                }
            }
        }

        report
    }

    async fn drop_file(&self, file: &FileItem, destination: &Path, mode: DropMode) -> Result<(), StashError> {
        let source = Path::new(&file.path);
        if !self.fs.exists(source).await {
            return Err(StashError::SourceMissing(file.path.clone()));
        }

        // Names come from persisted state; keep them a single path component.
        if file.name.contains('/') || file.name == "." || file.name == ".." {
            return Err(StashError::InvalidItem(format!("unusable file name: {}", file.name)));
        }

        let target = destination.join(&file.name);
        self.ensure_free(&target).await?;

        let outcome = match mode {
            DropMode::Copy => self.fs.copy_file(source, &target).await,
            DropMode::Move => self.fs.move_file(source, &target).await,
        };
        outcome.map_err(|e| io_error(&target, e))?;

        debug!(from = %file.path, to = %target.display(), ?mode, "Dropped file");
        Ok(())
    }

    async fn drop_text(&self, text: &TextItem, destination: &Path, index: usize) -> Result<(), StashError> {
        let target = destination.join(text_file_name(index));
        self.ensure_free(&target).await?;

        self.fs
            .write_new_file(&target, text.text.as_bytes())
            .await
            .map_err(|e| io_error(&target, e))?;

        debug!(to = %target.display(), chars = text.text.chars().count(), "Dropped text");
        Ok(())
    }

    async fn ensure_free(&self, target: &Path) -> Result<(), StashError> {
        if self.fs.exists(target).await {
            return Err(StashError::TargetExists(target.display().to_string()));
        }
        Ok(())
    }
}

fn io_error(path: &Path, error: anyhow::Error) -> StashError {
    StashError::Io {
        path: path.display().to_string(),
        message: format!("{error:#}"),
    }
}
