use thiserror::Error;

/// Error taxonomy shared by every stack operation.
///
/// Operation-level variants (`EmptyStack`, `EmptySelection`,
/// `InvalidDestination`, `NoFilesToCopy`, ...) abort a command before any
/// mutation. Item-level variants (`SourceMissing`, `TargetExists`, `Io`) are
/// collected per item during bulk operations and never abort the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StashError {
    #[error("stack is empty")]
    EmptyStack,

    #[error("nothing capturable in the file-manager selection or the clipboard")]
    EmptySelection,

    #[error("invalid destination: {0}")]
    InvalidDestination(String),

    #[error("source file missing: {0}")]
    SourceMissing(String),

    #[error("target already exists: {0}")]
    TargetExists(String),

    #[error("no files to copy")]
    NoFilesToCopy,

    #[error("clipboard write could not be verified")]
    WriteVerificationFailed,

    #[error("invalid item: {0}")]
    InvalidItem(String),

    #[error("persisted stack is unreadable: {0}")]
    PersistCorrupt(String),

    #[error("no stack item with id {0}")]
    ItemNotFound(String),

    #[error("unsupported operation: {0}")]
    Unsupported(String),

    #[error("i/o failure on {path}: {message}")]
    Io { path: String, message: String },
}

impl StashError {
    /// Whether this error describes a single item inside a bulk operation.
    pub fn is_item_level(&self) -> bool {
        matches!(
            self,
            StashError::SourceMissing(_) | StashError::TargetExists(_) | StashError::Io { .. }
        )
    }
}
