//! Port interfaces for the application layer
//!
//! Ports define the contract between the stack use cases and the host
//! capabilities they rely on: the clipboard, the file-manager selection, the
//! filesystem, the key-value store, the desktop launcher and user
//! confirmation. Adapters live in `si-infra` and `si-platform`; tests
//! substitute fakes.

mod clipboard;
mod clock;
mod confirmation;
mod fs;
mod kv_store;
mod launcher;
mod selection;

pub use clipboard::{PasteboardPort, SystemClipboardPort};
pub use clock::ClockPort;
pub use confirmation::{ConfirmPrompt, ConfirmationPort};
pub use fs::{EntryKind, FileSystemPort};
pub use kv_store::KeyValueStorePort;
pub use launcher::LauncherPort;
pub use selection::FileSelectionPort;
