use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};

use si_core::ports::{FileSystemPort, LauncherPort};
use si_core::{FileItem, ItemId, StackItem, StashError};

use crate::stack_store::StackStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchAction {
    /// Default application.
    Open,
    /// Selected in the file manager.
    Reveal,
}

/// Open a file item, or show it in the file manager. The stack is not
/// modified.
pub struct OpenStackItem {
    store: StackStore,
    fs: Arc<dyn FileSystemPort>,
    launcher: Arc<dyn LauncherPort>,
}

impl OpenStackItem {
    pub fn new(store: StackStore, fs: Arc<dyn FileSystemPort>, launcher: Arc<dyn LauncherPort>) -> Self {
        Self { store, fs, launcher }
    }

    /// # Errors
    /// - `ItemNotFound` for an unknown id
    /// - `Unsupported` for text items
    /// - `SourceMissing` when the file is gone from disk
    pub async fn execute(&self, id: &ItemId, action: LaunchAction) -> Result<FileItem> {
        let span = info_span!("usecase.open_stack_item.execute", item_id = %id, ?action);
        async move {
            let stack = self.store.load().await;
            let file = match stack.get(id) {
                Some(StackItem::File(file)) => file.clone(),
                Some(StackItem::Text(_)) => {
                    let what = match action {
                        LaunchAction::Open => "Cannot open text",
                        LaunchAction::Reveal => "Cannot reveal text",
                    };
                    return Err(StashError::Unsupported(what.to_string()).into());
                }
                None => return Err(StashError::ItemNotFound(id.to_string()).into()),
            };

            let path = Path::new(&file.path);
            if !self.fs.exists(path).await {
                return Err(StashError::SourceMissing(file.path.clone()).into());
            }

            match action {
                LaunchAction::Open => self.launcher.open(path).await,
                LaunchAction::Reveal => self.launcher.reveal(path).await,
            }
            .with_context(|| format!("Failed to launch {}", file.path))?;

            info!(name = %file.name, "Launched stack item");
            Ok(file)
        }
        .instrument(span)
        .await
    }
}
