//! Clipboard ports - abstract the host clipboard and its multi-item pasteboard.

use anyhow::Result;
use async_trait::async_trait;

use crate::clipboard::ClipboardPayload;

/// Host clipboard primitives.
#[async_trait]
pub trait SystemClipboardPort: Send + Sync {
    /// Read the file references and text currently on the clipboard.
    async fn read(&self) -> Result<ClipboardPayload>;

    /// Put exactly one file on the clipboard.
    async fn write_file(&self, path: &str) -> Result<()>;

    /// Put plain text on the clipboard.
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Pasteboard mechanism able to hold a list of file references as a single
/// clipboard entry.
///
/// The single-file clipboard primitive does not generalize to several files,
/// so multi-file payloads go through this port instead.
#[async_trait]
pub trait PasteboardPort: Send + Sync {
    /// Replace the pasteboard contents with one file reference per path,
    /// written as one atomic payload.
    async fn write_file_references(&self, paths: &[String]) -> Result<()>;

    /// Types the pasteboard currently declares.
    async fn declared_types(&self) -> Result<Vec<String>>;

    /// The declared type that marks file references on this platform.
    fn file_reference_type(&self) -> &str;
}
