//! Dependency wiring: picks the concrete adapter for every port.

use std::sync::Arc;

use si_app::{AppDeps, UseCases};
use si_core::ports::FileSelectionPort;
use si_core::StashConfig;
use si_infra::{FileKeyValueStore, StashDirs, SystemClock, TokioFileSystem};
use si_platform::{
    native_pasteboard, native_selection, ClipboardRsClipboard, StaticSelection, SystemLauncher,
};
use tracing::debug;

use crate::prompt::TerminalConfirmation;

/// Options that influence which adapters are used.
#[derive(Debug, Clone, Default)]
pub struct WiringOptions {
    /// Explicit selection; replaces the file manager when non-empty.
    pub selection: Vec<String>,
    pub assume_yes: bool,
}

pub fn build_use_cases(dirs: &StashDirs, config: StashConfig, options: WiringOptions) -> UseCases {
    let selection: Arc<dyn FileSelectionPort> = if options.selection.is_empty() {
        native_selection()
    } else {
        debug!(count = options.selection.len(), "Using explicit selection");
        Arc::new(StaticSelection::new(options.selection))
    };

    let deps = AppDeps {
        clipboard: Arc::new(ClipboardRsClipboard::new()),
        pasteboard: native_pasteboard(),
        selection,
        fs: Arc::new(TokioFileSystem::new()),
        launcher: Arc::new(SystemLauncher::new()),
        kv: Arc::new(FileKeyValueStore::new(dirs.kv_dir())),
        clock: Arc::new(SystemClock),
        confirmation: Arc::new(TerminalConfirmation::new(options.assume_yes)),
    };

    UseCases::new(deps, config)
}
