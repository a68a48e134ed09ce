use tracing::{info_span, Instrument};

use si_core::StashConfig;

use crate::stack_store::StackStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub config: StashConfig,
    pub total: usize,
    pub files: usize,
    pub texts: usize,
}

/// Effective configuration plus stack size.
pub struct StackStatus {
    store: StackStore,
    config: StashConfig,
}

impl StackStatus {
    pub fn new(store: StackStore, config: StashConfig) -> Self {
        Self { store, config }
    }

    pub async fn execute(&self) -> StatusReport {
        async move {
            let stack = self.store.load().await;
            StatusReport {
                config: self.config,
                total: stack.len(),
                files: stack.file_count(),
                texts: stack.text_count(),
            }
        }
        .instrument(info_span!("usecase.stack_status.execute"))
        .await
    }
}
