use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn, Instrument};

use si_core::ports::{ConfirmPrompt, ConfirmationPort, EntryKind, FileSelectionPort, FileSystemPort};
use si_core::{normalize_path, DropMode, DropReport, StashConfig, StashError};

use crate::drop_executor::DropExecutor;
use crate::models::count_noun;
use crate::stack_store::StackStore;

/// Where the drop lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Whatever the file manager has selected.
    Selection,
    /// Paths given by the caller.
    Explicit(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Move was declined; nothing touched the disk.
    Cancelled,
    Completed {
        destination: PathBuf,
        mode: DropMode,
        report: DropReport,
        cleared: bool,
    },
}

/// Drop the whole stack into one destination directory.
///
/// # Behavior
/// 1. Preconditions, in order and before any I/O on items: the stack is not
///    empty, exactly one destination is selected, and it is a directory.
/// 2. Move asks for confirmation; declining cancels the drop.
/// 3. Every item is attempted; failures are collected, never fatal.
/// 4. When at least one item landed, the stack is cleared, either right away
///    (`auto_clear_on_drop`) or after confirmation.
pub struct DropStack {
    store: StackStore,
    executor: DropExecutor,
    selection: Arc<dyn FileSelectionPort>,
    fs: Arc<dyn FileSystemPort>,
    confirmation: Arc<dyn ConfirmationPort>,
    config: StashConfig,
}

impl DropStack {
    pub fn new(
        store: StackStore,
        executor: DropExecutor,
        selection: Arc<dyn FileSelectionPort>,
        fs: Arc<dyn FileSystemPort>,
        confirmation: Arc<dyn ConfirmationPort>,
        config: StashConfig,
    ) -> Self {
        Self {
            store,
            executor,
            selection,
            fs,
            confirmation,
            config,
        }
    }

    pub async fn execute(&self, target: DropTarget, mode: DropMode) -> Result<DropOutcome> {
        let span = info_span!("usecase.drop_stack.execute", ?mode);
        async move {
            let stack = self.store.load().await;
            if stack.is_empty() {
                return Err(StashError::EmptyStack.into());
            }

            let destination = self.resolve_destination(target).await?;

            if mode.is_destructive() {
                let prompt = ConfirmPrompt::destructive(
                    "Move items?",
                    format!(
                        "Move {} to {}? The originals will be removed.",
                        count_noun(stack.len(), "item"),
                        destination.display()
                    ),
                    "Move",
                );
                if !self.confirmation.confirm(&prompt).await? {
                    info!("Move declined, drop cancelled");
                    return Ok(DropOutcome::Cancelled);
                }
            }

            let report = self.executor.execute(stack.items(), &destination, mode).await;
            info!(
                attempted = report.attempted(),
                success = report.success_count,
                failed = report.failed_count,
                destination = %destination.display(),
                "Drop finished"
            );

            let cleared = self.maybe_clear(&report).await?;

            Ok(DropOutcome::Completed {
                destination,
                mode,
                report,
                cleared,
            })
        }
        .instrument(span)
        .await
    }

    async fn resolve_destination(&self, target: DropTarget) -> Result<PathBuf> {
        // Selection entries are host references (maybe `file://` URLs); explicit
        // paths are taken literally and must already be absolute.
        let (candidates, explicit) = match target {
            DropTarget::Explicit(paths) => (paths, true),
            DropTarget::Selection => (
                self.selection
                    .selected_paths()
                    .await
                    .context("Failed to read the file-manager selection")?,
                false,
            ),
        };

        let destination = match candidates.as_slice() {
            [single] if explicit => single.clone(),
            [single] => normalize_path(single),
            [] => {
                return Err(StashError::InvalidDestination("no destination folder selected".into()).into())
            }
            _ => {
                return Err(StashError::InvalidDestination(
                    "select exactly one destination folder".into(),
                )
                .into())
            }
        };
        if destination.is_empty() {
            return Err(StashError::InvalidDestination("no destination folder selected".into()).into());
        }

        let destination = PathBuf::from(destination);
        if !destination.is_absolute() {
            return Err(StashError::InvalidDestination(format!(
                "{} is not an absolute path",
                destination.display()
            ))
            .into());
        }
        match self.fs.entry_kind(&destination).await {
            Ok(EntryKind::Directory) => Ok(destination),
            Ok(_) => Err(StashError::InvalidDestination(format!(
                "{} is not a folder",
                destination.display()
            ))
            .into()),
            Err(e) => {
                warn!(destination = %destination.display(), error = %e, "Destination not accessible");
                Err(StashError::InvalidDestination(format!(
                    "{} does not exist",
                    destination.display()
                ))
                .into())
            }
        }
    }

    async fn maybe_clear(&self, report: &DropReport) -> Result<bool> {
        if !report.may_clear() {
            return Ok(false);
        }

        if !self.config.auto_clear_on_drop {
            let prompt = ConfirmPrompt::destructive(
                "Clear stack?",
                format!(
                    "{} dropped. Do you want to clear the stack?",
                    count_noun(report.success_count, "item")
                ),
                "Clear Stack",
            );
            if !self.confirmation.confirm(&prompt).await? {
                return Ok(false);
            }
        }

        let removed = self.store.clear().await?;
        info!(removed, auto = self.config.auto_clear_on_drop, "Cleared stack after drop");
        Ok(true)
    }
}
