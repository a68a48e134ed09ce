use anyhow::Result;
use tracing::{info, info_span, Instrument};

use si_core::StashError;

use crate::clipboard_writer::{ClipboardWriteStrategy, NativeClipboardWriter};
use crate::stack_store::StackStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyStackOutcome {
    pub copied_files: usize,
    /// Text items left out of the clipboard payload.
    pub skipped_text: usize,
    pub strategy: ClipboardWriteStrategy,
}

/// Put every stashed file on the clipboard, in stack order. Text items are
/// not part of a file payload and are only counted.
pub struct CopyStackToClipboard {
    store: StackStore,
    writer: NativeClipboardWriter,
}

impl CopyStackToClipboard {
    pub fn new(store: StackStore, writer: NativeClipboardWriter) -> Self {
        Self { store, writer }
    }

    /// # Errors
    /// - [`StashError::EmptyStack`] when nothing is stashed.
    /// - [`StashError::NoFilesToCopy`] when only text is stashed.
    pub async fn execute(&self) -> Result<CopyStackOutcome> {
        async move {
            let stack = self.store.load().await;
            if stack.is_empty() {
                return Err(StashError::EmptyStack.into());
            }

            let paths: Vec<String> = stack.file_items().map(|f| f.path.clone()).collect();
            let skipped_text = stack.text_count();
            let strategy = self.writer.write_files(&paths).await?;

            info!(files = paths.len(), skipped_text, ?strategy, "Copied stack to clipboard");
            Ok(CopyStackOutcome {
                copied_files: paths.len(),
                skipped_text,
                strategy,
            })
        }
        .instrument(info_span!("usecase.copy_stack_to_clipboard.execute"))
        .await
    }
}
