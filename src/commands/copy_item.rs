//! Single-item clipboard commands.

use si_app::models::ItemKind;
use si_app::UseCases;
use si_core::ItemId;
use tracing::debug;

use super::CommandOutput;
use crate::notice::Notice;

/// `copy-item`: one file item onto the clipboard as a file reference.
pub async fn run_file(use_cases: &UseCases, id: String) -> CommandOutput {
    let id = ItemId::from_string(id);
    CommandOutput::notice(match use_cases.copy_item_to_clipboard().execute(&id).await {
        Ok(outcome) => {
            if outcome.close_window {
                // A terminal has no window to close.
                debug!(name = %outcome.name, "close_window_on_drop set, nothing to close");
            }
            let title = if outcome.removed {
                "File dropped & removed"
            } else {
                "File ready to paste"
            };
            Notice::success(title, format!("{} - Press ⌘V anywhere", outcome.name))
        }
        Err(e) => Notice::from_error("Failed to copy file", &e),
    })
}

/// `copy-text`: an item's text, or a file item's path, as plain text.
pub async fn run_text(use_cases: &UseCases, id: String) -> CommandOutput {
    let id = ItemId::from_string(id);
    CommandOutput::notice(match use_cases.copy_item_text().execute(&id).await {
        Ok(ItemKind::Text) => Notice::success("Copied to clipboard", "Text copied"),
        Ok(ItemKind::File) => Notice::success("Copied to clipboard", "File path copied"),
        Err(e) => Notice::from_error("Failed to copy text", &e),
    })
}
