use anyhow::Result;
use tracing::{debug, info_span, Instrument};

use si_core::{ItemId, StackItem, StashError};

use crate::clipboard_writer::NativeClipboardWriter;
use crate::models::ItemKind;
use crate::stack_store::StackStore;

/// Copy an item's textual content: the text of a text item, the path of a
/// file item.
pub struct CopyItemText {
    store: StackStore,
    writer: NativeClipboardWriter,
}

impl CopyItemText {
    pub fn new(store: StackStore, writer: NativeClipboardWriter) -> Self {
        Self { store, writer }
    }

    pub async fn execute(&self, id: &ItemId) -> Result<ItemKind> {
        let span = info_span!("usecase.copy_item_text.execute", item_id = %id);
        async move {
            let stack = self.store.load().await;
            let (content, kind) = match stack.get(id) {
                Some(StackItem::Text(text)) => (text.text.as_str(), ItemKind::Text),
                Some(StackItem::File(file)) => (file.path.as_str(), ItemKind::File),
                None => return Err(StashError::ItemNotFound(id.to_string()).into()),
            };

            self.writer.write_text(content).await?;
            debug!(?kind, "Copied item content");
            Ok(kind)
        }
        .instrument(span)
        .await
    }
}
