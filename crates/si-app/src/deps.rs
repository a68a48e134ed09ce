//! # Application Dependencies
//!
//! Dependency grouping for use case construction. This is NOT a builder:
//! no defaults, no hidden logic, every port is required.

use std::sync::Arc;
use si_core::ports::*;

/// Ports every StashIt use case draws from.
#[derive(Clone)]
pub struct AppDeps {
    // Clipboard
    pub clipboard: Arc<dyn SystemClipboardPort>,
    pub pasteboard: Arc<dyn PasteboardPort>,

    // File manager and disk
    pub selection: Arc<dyn FileSelectionPort>,
    pub fs: Arc<dyn FileSystemPort>,
    pub launcher: Arc<dyn LauncherPort>,

    // Storage
    pub kv: Arc<dyn KeyValueStorePort>,

    // System
    pub clock: Arc<dyn ClockPort>,

    // User interaction
    pub confirmation: Arc<dyn ConfirmationPort>,
}
