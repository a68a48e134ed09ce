//! Stack use cases
//!
//! ```text
//! capture ──► StackStore::append
//! list / status ◄── StackStore::load
//! copy / copy-item / copy-text ──► NativeClipboardWriter
//! drop ──► DropExecutor ──► filesystem, then conditional clear
//! remove / clear ──► confirmation ──► StackStore
//! open / reveal ──► LauncherPort
//! ```

pub mod capture_items;
pub mod clear_stack;
pub mod copy_item_text;
pub mod copy_item_to_clipboard;
pub mod copy_stack_to_clipboard;
pub mod drop_stack;
pub mod list_stack;
pub mod open_stack_item;
pub mod remove_stack_item;
pub mod stack_status;

pub use capture_items::{CaptureItems, CaptureOutcome, CaptureSource};
pub use clear_stack::{ClearOutcome, ClearStack};
pub use copy_item_text::CopyItemText;
pub use copy_item_to_clipboard::{CopyItemOutcome, CopyItemToClipboard};
pub use copy_stack_to_clipboard::{CopyStackOutcome, CopyStackToClipboard};
pub use drop_stack::{DropOutcome, DropStack, DropTarget};
pub use list_stack::ListStack;
pub use open_stack_item::{LaunchAction, OpenStackItem};
pub use remove_stack_item::{RemoveOutcome, RemoveStackItem};
pub use stack_status::{StackStatus, StatusReport};

use si_core::StashConfig;

use crate::clipboard_writer::NativeClipboardWriter;
use crate::deps::AppDeps;
use crate::drop_executor::DropExecutor;
use crate::stack_store::StackStore;

/// Builds use cases out of [`AppDeps`] and the loaded configuration.
pub struct UseCases {
    deps: AppDeps,
    config: StashConfig,
}

impl UseCases {
    pub fn new(deps: AppDeps, config: StashConfig) -> Self {
        Self { deps, config }
    }

    pub fn config(&self) -> StashConfig {
        self.config
    }

    fn store(&self) -> StackStore {
        StackStore::new(self.deps.kv.clone())
    }

    fn writer(&self) -> NativeClipboardWriter {
        NativeClipboardWriter::new(self.deps.clipboard.clone(), self.deps.pasteboard.clone())
    }

    pub fn capture_items(&self) -> CaptureItems {
        CaptureItems::new(
            self.deps.selection.clone(),
            self.deps.clipboard.clone(),
            self.deps.fs.clone(),
            self.deps.clock.clone(),
            self.store(),
        )
    }

    pub fn list_stack(&self) -> ListStack {
        ListStack::new(self.store())
    }

    pub fn remove_stack_item(&self) -> RemoveStackItem {
        RemoveStackItem::new(self.store(), self.deps.confirmation.clone())
    }

    pub fn clear_stack(&self) -> ClearStack {
        ClearStack::new(self.store(), self.deps.confirmation.clone())
    }

    pub fn copy_stack_to_clipboard(&self) -> CopyStackToClipboard {
        CopyStackToClipboard::new(self.store(), self.writer())
    }

    pub fn copy_item_to_clipboard(&self) -> CopyItemToClipboard {
        CopyItemToClipboard::new(self.store(), self.writer(), self.config)
    }

    pub fn copy_item_text(&self) -> CopyItemText {
        CopyItemText::new(self.store(), self.writer())
    }

    pub fn drop_stack(&self) -> DropStack {
        DropStack::new(
            self.store(),
            DropExecutor::new(self.deps.fs.clone()),
            self.deps.selection.clone(),
            self.deps.fs.clone(),
            self.deps.confirmation.clone(),
            self.config,
        )
    }

    pub fn open_stack_item(&self) -> OpenStackItem {
        OpenStackItem::new(self.store(), self.deps.fs.clone(), self.deps.launcher.clone())
    }

    pub fn stack_status(&self) -> StackStatus {
        StackStatus::new(self.store(), self.config)
    }
}
