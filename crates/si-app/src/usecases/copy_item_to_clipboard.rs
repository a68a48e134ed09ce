use anyhow::Result;
use tracing::{info, info_span, Instrument};

use si_core::{ItemId, StackItem, StashConfig, StashError};

use crate::clipboard_writer::NativeClipboardWriter;
use crate::stack_store::StackStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyItemOutcome {
    pub name: String,
    /// The item left the stack because auto-clear is on.
    pub removed: bool,
    /// The host should close its window.
    pub close_window: bool,
}

/// Drop a single file item onto the clipboard.
///
/// Text items cannot be dropped this way. With `auto_clear_on_drop` the item
/// is removed from the stack once it is on the clipboard.
pub struct CopyItemToClipboard {
    store: StackStore,
    writer: NativeClipboardWriter,
    config: StashConfig,
}

impl CopyItemToClipboard {
    pub fn new(store: StackStore, writer: NativeClipboardWriter, config: StashConfig) -> Self {
        Self {
            store,
            writer,
            config,
        }
    }

    pub async fn execute(&self, id: &ItemId) -> Result<CopyItemOutcome> {
        let span = info_span!("usecase.copy_item_to_clipboard.execute", item_id = %id);
        async move {
            let stack = self.store.load().await;
            let file = match stack.get(id) {
                None => return Err(StashError::ItemNotFound(id.to_string()).into()),
                Some(StackItem::Text(_)) => {
                    return Err(StashError::Unsupported("Cannot drop text".into()).into())
                }
                Some(StackItem::File(file)) => file.clone(),
            };

            self.writer.write_files(&[file.path.clone()]).await?;

            let removed = if self.config.auto_clear_on_drop {
                self.store.remove_by_id(id).await?.is_some()
            } else {
                false
            };

            info!(name = %file.name, removed, "Dropped item to clipboard");
            Ok(CopyItemOutcome {
                name: file.name,
                removed,
                close_window: self.config.close_window_on_drop,
            })
        }
        .instrument(span)
        .await
    }
}
