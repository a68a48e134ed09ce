use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use si_core::ports::{ConfirmPrompt, ConfirmationPort};
use si_core::{ItemId, StackItem, StashError};

use crate::stack_store::StackStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(StackItem),
    Cancelled,
}

/// Remove one item from the stack after confirmation.
pub struct RemoveStackItem {
    store: StackStore,
    confirmation: Arc<dyn ConfirmationPort>,
}

impl RemoveStackItem {
    pub fn new(store: StackStore, confirmation: Arc<dyn ConfirmationPort>) -> Self {
        Self { store, confirmation }
    }

    /// # Errors
    /// [`StashError::ItemNotFound`] when `id` is not on the stack; nothing is
    /// asked and nothing is written.
    pub async fn execute(&self, id: &ItemId) -> Result<RemoveOutcome> {
        let span = info_span!("usecase.remove_stack_item.execute", item_id = %id);
        async move {
            let stack = self.store.load().await;
            let Some(item) = stack.get(id) else {
                return Err(StashError::ItemNotFound(id.to_string()).into());
            };

            let prompt = ConfirmPrompt::destructive(
                "Remove item?",
                "This will permanently remove the item from the stack.",
                "Remove",
            );
            if !self.confirmation.confirm(&prompt).await? {
                info!("Removal cancelled");
                return Ok(RemoveOutcome::Cancelled);
            }

            match self.store.remove_by_id(item.id()).await? {
                Some(removed) => {
                    info!(kind = removed.kind(), "Removed item");
                    Ok(RemoveOutcome::Removed(removed))
                }
                // Gone between the snapshot and the write.
                None => Err(StashError::ItemNotFound(id.to_string()).into()),
            }
        }
        .instrument(span)
        .await
    }
}
