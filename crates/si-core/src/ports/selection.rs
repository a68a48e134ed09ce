use anyhow::Result;
use async_trait::async_trait;

/// The file manager's current selection.
#[async_trait]
pub trait FileSelectionPort: Send + Sync {
    /// Raw references of the selected entries, in selection order.
    ///
    /// An error means the selection is unavailable (no file manager running,
    /// automation denied, ...); callers treat it like an empty selection when
    /// another source can take over.
    async fn selected_paths(&self) -> Result<Vec<String>>;
}
