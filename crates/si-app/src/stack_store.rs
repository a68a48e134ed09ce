use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use si_core::ports::KeyValueStorePort;
use si_core::stack::DecodedStack;
use si_core::{ItemId, Stack, StackItem};

/// Key the whole stack is persisted under.
pub const STACK_STORAGE_KEY: &str = "stashit-stack";

/// Sole writer of the persisted stack.
///
/// Every mutation is load, mutate, save: the blob is always replaced whole.
/// There is no protection against a concurrent writer; overlapping
/// invocations may lose an update.
#[derive(Clone)]
pub struct StackStore {
    kv: Arc<dyn KeyValueStorePort>,
}

impl StackStore {
    pub fn new(kv: Arc<dyn KeyValueStorePort>) -> Self {
        Self { kv }
    }

    /// Current stack. Never fails: a missing, unreadable or corrupt blob reads
    /// as an empty stack.
    pub async fn load(&self) -> Stack {
        let raw = match self.kv.get(STACK_STORAGE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Stack::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read persisted stack, treating as empty");
                return Stack::new();
            }
        };

        match Stack::from_json(&raw) {
            Ok(DecodedStack { stack, skipped }) => {
                if skipped > 0 {
                    warn!(skipped, kept = stack.len(), "Dropped invalid persisted stack items");
                }
                stack
            }
            Err(e) => {
                warn!(error = %e, "Persisted stack is corrupt, treating as empty");
                Stack::new()
            }
        }
    }

    /// Replace the persisted blob with `stack`.
    pub async fn save(&self, stack: &Stack) -> Result<()> {
        let json = stack.to_json().context("Failed to serialize stack")?;
        self.kv
            .set(STACK_STORAGE_KEY, &json)
            .await
            .context("Failed to persist stack")?;
        debug!(items = stack.len(), "Persisted stack");
        Ok(())
    }

    /// Append `items` at the end in one write and return the new stack.
    pub async fn append(&self, items: Vec<StackItem>) -> Result<Stack> {
        let mut stack = self.load().await;
        stack.append(items);
        self.save(&stack).await?;
        Ok(stack)
    }

    /// Remove one item. An unknown id writes nothing and returns `None`.
    pub async fn remove_by_id(&self, id: &ItemId) -> Result<Option<StackItem>> {
        let mut stack = self.load().await;
        let Some(removed) = stack.remove_by_id(id) else {
            debug!(item_id = %id, "Nothing to remove");
            return Ok(None);
        };
        self.save(&stack).await?;
        Ok(Some(removed))
    }

    /// Empty the stack, returning how many items were removed.
    pub async fn clear(&self) -> Result<usize> {
        let mut stack = self.load().await;
        let removed = stack.clear();
        self.save(&stack).await?;
        Ok(removed)
    }
}
