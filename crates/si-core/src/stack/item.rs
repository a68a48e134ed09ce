use serde::{Deserialize, Serialize};

use crate::error::StashError;
use crate::ids::ItemId;
use crate::path::{file_name_of, normalize_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimestampMs(i64);

impl TimestampMs {
    /// Unix epoch milliseconds (UTC)
    pub fn from_epoch_millis(ms: i64) -> Self {
        Self(ms)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// The timestamp for an item created at `now_ms` after an item stamped `self`.
    ///
    /// Never goes backwards, so display order stays total even when several
    /// items are created within the same millisecond.
    pub fn next_after(self, now_ms: i64) -> Self {
        Self(now_ms.max(self.0.saturating_add(1)))
    }
}

/// A reference to a file on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileItem {
    pub id: ItemId,
    pub path: String,
    pub name: String,
    pub added_at: TimestampMs,
}

/// A stashed text snippet. Empty text is legal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextItem {
    pub id: ItemId,
    pub text: String,
    pub added_at: TimestampMs,
}

/// One entry of the stack.
///
/// Persisted as `{"type": "file", "id", "path", "name", "addedAt"}` or
/// `{"type": "text", "id", "text", "addedAt"}`. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StackItem {
    File(FileItem),
    Text(TextItem),
}

impl FileItem {
    /// Build a file item from any supported path encoding.
    ///
    /// The path is normalized before validation; `name` falls back to the final
    /// path segment when not supplied (or blank).
    pub fn new(raw_path: &str, name: Option<&str>, added_at: TimestampMs) -> Result<Self, StashError> {
        let path = normalize_path(raw_path);
        let name = match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => name.to_string(),
            None => file_name_of(&path).unwrap_or_default().to_string(),
        };

        let item = Self {
            id: ItemId::new(),
            path,
            name,
            added_at,
        };
        item.validate()?;
        Ok(item)
    }

    pub fn validate(&self) -> Result<(), StashError> {
        if self.path.is_empty() {
            return Err(StashError::InvalidItem("file item has an empty path".into()));
        }
        if !self.path.starts_with('/') {
            return Err(StashError::InvalidItem(format!(
                "file item path is not absolute: {}",
                self.path
            )));
        }
        if self.name.is_empty() {
            return Err(StashError::InvalidItem(format!(
                "file item has no name: {}",
                self.path
            )));
        }
        Ok(())
    }
}

impl TextItem {
    pub fn new(text: impl Into<String>, added_at: TimestampMs) -> Self {
        Self {
            id: ItemId::new(),
            text: text.into(),
            added_at,
        }
    }
}

impl StackItem {
    pub fn id(&self) -> &ItemId {
        match self {
            StackItem::File(f) => &f.id,
            StackItem::Text(t) => &t.id,
        }
    }

    pub fn added_at(&self) -> TimestampMs {
        match self {
            StackItem::File(f) => f.added_at,
            StackItem::Text(t) => t.added_at,
        }
    }

    pub fn validate(&self) -> Result<(), StashError> {
        match self {
            StackItem::File(f) => f.validate(),
            StackItem::Text(_) => Ok(()),
        }
    }

    pub fn as_file(&self) -> Option<&FileItem> {
        match self {
            StackItem::File(f) => Some(f),
            StackItem::Text(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            StackItem::File(_) => "file",
            StackItem::Text(_) => "text",
        }
    }
}

// Identity is the id, nothing else.
impl PartialEq for StackItem {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for StackItem {}

impl From<FileItem> for StackItem {
    fn from(item: FileItem) -> Self {
        StackItem::File(item)
    }
}

impl From<TextItem> for StackItem {
    fn from(item: TextItem) -> Self {
        StackItem::Text(item)
    }
}
