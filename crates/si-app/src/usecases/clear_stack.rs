use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use si_core::ports::{ConfirmPrompt, ConfirmationPort};

use crate::stack_store::StackStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    AlreadyEmpty,
    Cleared { removed: usize },
    Cancelled,
}

/// Empty the stack after confirmation.
pub struct ClearStack {
    store: StackStore,
    confirmation: Arc<dyn ConfirmationPort>,
}

impl ClearStack {
    pub fn new(store: StackStore, confirmation: Arc<dyn ConfirmationPort>) -> Self {
        Self { store, confirmation }
    }

    pub async fn execute(&self) -> Result<ClearOutcome> {
        async move {
            let stack = self.store.load().await;
            if stack.is_empty() {
                return Ok(ClearOutcome::AlreadyEmpty);
            }

            let prompt = ConfirmPrompt::destructive(
                "Clear entire stack?",
                format!(
                    "This will permanently remove all {} from your stack.",
                    crate::models::count_noun(stack.len(), "item")
                ),
                "Clear Stack",
            );
            if !self.confirmation.confirm(&prompt).await? {
                info!("Clear cancelled");
                return Ok(ClearOutcome::Cancelled);
            }

            let removed = self.store.clear().await?;
            info!(removed, "Cleared stack");
            Ok(ClearOutcome::Cleared { removed })
        }
        .instrument(info_span!("usecase.clear_stack.execute"))
        .await
    }
}
