//! Platform adapters for StashIt
//!
//! - [`ClipboardRsClipboard`]: host clipboard through `clipboard-rs`
//! - [`OsascriptPasteboard`] / [`FinderSelection`]: macOS automation through
//!   `osascript`
//! - [`ClipboardRsPasteboard`] / [`StaticSelection`]: portable fallbacks
//! - [`SystemLauncher`]: default applications and file-manager reveal

use std::sync::Arc;

use si_core::ports::{FileSelectionPort, PasteboardPort};

pub mod clipboard;
pub mod launcher;
pub mod osascript;
pub mod selection;

pub use clipboard::{ClipboardRsClipboard, ClipboardRsPasteboard};
pub use launcher::{LauncherError, SystemLauncher};
pub use osascript::{FinderSelection, OsascriptError, OsascriptPasteboard};
pub use selection::StaticSelection;

/// Multi-file pasteboard for the current platform.
pub fn native_pasteboard() -> Arc<dyn PasteboardPort> {
    #[cfg(target_os = "macos")]
    {
        Arc::new(OsascriptPasteboard::new())
    }
    #[cfg(not(target_os = "macos"))]
    {
        Arc::new(ClipboardRsPasteboard::new())
    }
}

/// File-manager selection for the current platform. Hosts without a
/// scriptable file manager get an empty selection.
pub fn native_selection() -> Arc<dyn FileSelectionPort> {
    #[cfg(target_os = "macos")]
    {
        Arc::new(FinderSelection::new())
    }
    #[cfg(not(target_os = "macos"))]
    {
        Arc::new(StaticSelection::empty())
    }
}
