use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn, Instrument};

use si_core::ports::{ClockPort, EntryKind, FileSelectionPort, FileSystemPort, SystemClipboardPort};
use si_core::{normalize_path, FileItem, StackItem, StashError, TextItem, TimestampMs};

use crate::stack_store::StackStore;

/// Where captured items came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSource {
    Selection,
    Clipboard,
}

#[derive(Debug, Clone)]
pub struct CaptureOutcome {
    pub source: CaptureSource,
    /// The appended items, in append order.
    pub added: Vec<StackItem>,
}

impl CaptureOutcome {
    pub fn added_count(&self) -> usize {
        self.added.len()
    }
}

/// Pull new items from the file-manager selection, or from the clipboard when
/// the selection yields no regular file.
///
/// # Behavior
/// 1. Each selected entry is stat'ed; regular files become file items,
///    directories and unreadable entries are skipped silently.
/// 2. Otherwise clipboard file references become file items (no existence
///    check) and non-empty clipboard text becomes one text item.
/// 3. Everything found is appended in one persisted write.
///
/// Selection text is never mixed with clipboard text: a non-empty selection
/// wins outright.
pub struct CaptureItems {
    selection: Arc<dyn FileSelectionPort>,
    clipboard: Arc<dyn SystemClipboardPort>,
    fs: Arc<dyn FileSystemPort>,
    clock: Arc<dyn ClockPort>,
    store: StackStore,
}

impl CaptureItems {
    pub fn new(
        selection: Arc<dyn FileSelectionPort>,
        clipboard: Arc<dyn SystemClipboardPort>,
        fs: Arc<dyn FileSystemPort>,
        clock: Arc<dyn ClockPort>,
        store: StackStore,
    ) -> Self {
        Self {
            selection,
            clipboard,
            fs,
            clock,
            store,
        }
    }

    pub async fn execute(&self) -> Result<CaptureOutcome> {
        let span = info_span!("usecase.capture_items.execute");
        async move {
            let mut stack = self.store.load().await;
            let mut stamper = Stamper::new(self.clock.now_ms(), stack.last_added_at());

            let (source, added) = match self.from_selection(&mut stamper).await {
                files if !files.is_empty() => (CaptureSource::Selection, files),
                _ => (CaptureSource::Clipboard, self.from_clipboard(&mut stamper).await?),
            };

            if added.is_empty() {
                info!("Nothing to capture");
                return Err(StashError::EmptySelection.into());
            }

            stack.append(added.iter().cloned());
            self.store.save(&stack).await?;

            info!(added = added.len(), ?source, total = stack.len(), "Captured items");
            Ok(CaptureOutcome { source, added })
        }
        .instrument(span)
        .await
    }

    async fn from_selection(&self, stamper: &mut Stamper) -> Vec<StackItem> {
        let raw_paths = match self.selection.selected_paths().await {
            Ok(paths) => paths,
            Err(e) => {
                debug!(error = %e, "File-manager selection unavailable");
                return Vec::new();
            }
        };

        let mut items = Vec::new();
        for raw in raw_paths {
            let path = normalize_path(&raw);
            if path.is_empty() {
                continue;
            }
            match self.fs.entry_kind(Path::new(&path)).await {
                Ok(EntryKind::File) => {}
                Ok(kind) => {
                    debug!(%path, ?kind, "Skipping non-file selection entry");
                    continue;
                }
                Err(e) => {
                    debug!(%path, error = %e, "Skipping unreadable selection entry");
                    continue;
                }
            }
            match FileItem::new(&path, None, stamper.next()) {
                Ok(item) => items.push(item.into()),
                Err(e) => debug!(%path, error = %e, "Skipping invalid selection entry"),
            }
        }
        items
    }

    async fn from_clipboard(&self, stamper: &mut Stamper) -> Result<Vec<StackItem>> {
        let payload = self
            .clipboard
            .read()
            .await
            .context("Failed to read the clipboard")?;

        let mut items: Vec<StackItem> = Vec::new();
        for raw in &payload.files {
            match FileItem::new(raw, None, stamper.next()) {
                Ok(item) => items.push(item.into()),
                Err(e) => warn!(reference = %raw, error = %e, "Skipping clipboard file reference"),
            }
        }

        if let Some(text) = payload.text.filter(|t| !t.is_empty()) {
            items.push(TextItem::new(text, stamper.next()).into());
        }

        Ok(items)
    }
}

/// Hands out strictly increasing timestamps, starting no earlier than now and
/// always after the newest item already stashed.
struct Stamper {
    last: Option<TimestampMs>,
    now_ms: i64,
}

impl Stamper {
    fn new(now_ms: i64, last: Option<TimestampMs>) -> Self {
        Self { last, now_ms }
    }

    fn next(&mut self) -> TimestampMs {
        let next = match self.last {
            Some(last) => last.next_after(self.now_ms),
            None => TimestampMs::from_epoch_millis(self.now_ms),
        };
        self.last = Some(next);
        next
    }
}
