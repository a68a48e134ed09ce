use tracing::{debug, info_span, Instrument};

use crate::models::StackItemView;
use crate::stack_store::StackStore;

/// Newest-first, read-only listing of the stack.
pub struct ListStack {
    store: StackStore,
}

impl ListStack {
    pub fn new(store: StackStore) -> Self {
        Self { store }
    }

    /// Never fails; an unreadable stack lists as empty.
    pub async fn execute(&self) -> Vec<StackItemView> {
        async move {
            let stack = self.store.load().await;
            let views: Vec<StackItemView> = stack.newest_first().iter().map(StackItemView::from).collect();
            debug!(count = views.len(), "Listed stack");
            views
        }
        .instrument(info_span!("usecase.list_stack.execute"))
        .await
    }
}
