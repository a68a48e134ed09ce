use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, debug_span, warn, Instrument};

use si_core::normalize_path;
use si_core::ports::{PasteboardPort, SystemClipboardPort};
use si_core::StashError;

/// How a payload reached the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardWriteStrategy {
    /// The host's single-file primitive.
    SingleFile,
    /// One pasteboard payload carrying several file references.
    MultiFile { count: usize },
    Text,
}

/// Serializes stack content back into the OS clipboard.
///
/// A single file goes through the host clipboard primitive. Several files
/// cannot be expressed by that primitive, so they are written as one
/// pasteboard payload and the write is verified by re-reading the declared
/// types.
#[derive(Clone)]
pub struct NativeClipboardWriter {
    clipboard: Arc<dyn SystemClipboardPort>,
    pasteboard: Arc<dyn PasteboardPort>,
}

impl NativeClipboardWriter {
    pub fn new(clipboard: Arc<dyn SystemClipboardPort>, pasteboard: Arc<dyn PasteboardPort>) -> Self {
        Self {
            clipboard,
            pasteboard,
        }
    }

    /// Put `paths` on the clipboard as file references.
    ///
    /// Paths are normalized first; entries normalizing to nothing are dropped.
    ///
    /// # Errors
    /// - [`StashError::NoFilesToCopy`] when no path is left.
    /// - [`StashError::WriteVerificationFailed`] when a multi-file write does not
    ///   show up as file references afterwards.
    pub async fn write_files(&self, paths: &[String]) -> Result<ClipboardWriteStrategy> {
        let paths: Vec<String> = paths
            .iter()
            .map(|p| normalize_path(p))
            .filter(|p| !p.is_empty())
            .collect();

        match paths.as_slice() {
            [] => Err(StashError::NoFilesToCopy.into()),
            [single] => {
                self.clipboard
                    .write_file(single)
                    .await
                    .with_context(|| format!("Failed to put {single} on the clipboard"))?;
                debug!(path = %single, "Wrote single file to clipboard");
                Ok(ClipboardWriteStrategy::SingleFile)
            }
            many => {
                let span = debug_span!("clipboard_writer.multi_file", count = many.len());
                self.write_many(many).instrument(span).await?;
                Ok(ClipboardWriteStrategy::MultiFile { count: many.len() })
            }
        }
    }

    async fn write_many(&self, paths: &[String]) -> Result<()> {
        self.pasteboard
            .write_file_references(paths)
            .await
            .context("Failed to write file references to the pasteboard")?;

        let expected = self.pasteboard.file_reference_type();
        let declared = match self.pasteboard.declared_types().await {
            Ok(types) => types,
            Err(e) => {
                warn!(error = %e, "Could not read back pasteboard types");
                return Err(StashError::WriteVerificationFailed.into());
            }
        };

        if !declared.iter().any(|t| t == expected) {
            warn!(expected, ?declared, "Pasteboard does not declare file references");
            return Err(StashError::WriteVerificationFailed.into());
        }

        debug!(count = paths.len(), "Verified multi-file pasteboard write");
        Ok(())
    }

    pub async fn write_text(&self, text: &str) -> Result<ClipboardWriteStrategy> {
        self.clipboard
            .write_text(text)
            .await
            .context("Failed to put text on the clipboard")?;
        Ok(ClipboardWriteStrategy::Text)
    }
}
