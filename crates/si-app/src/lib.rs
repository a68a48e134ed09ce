//! StashIt application layer
//!
//! Use cases orchestrating the stack: capture, list, copy to the clipboard,
//! drop onto disk, remove and clear. Every host capability comes in through
//! the ports defined in `si-core`.

pub mod clipboard_writer;
pub mod deps;
pub mod drop_executor;
pub mod models;
pub mod stack_store;
pub mod usecases;

pub use clipboard_writer::{ClipboardWriteStrategy, NativeClipboardWriter};
pub use deps::AppDeps;
pub use drop_executor::DropExecutor;
pub use stack_store::{StackStore, STACK_STORAGE_KEY};
pub use usecases::UseCases;
