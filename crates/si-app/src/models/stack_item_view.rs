use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

use si_core::{ItemId, StackItem};

/// Titles derived from text are cut to this many characters.
pub const TITLE_MAX_CHARS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    File,
    Text,
}

/// Read-only projection of a stack item for list rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StackItemView {
    pub id: ItemId,
    pub kind: ItemKind,
    pub title: String,
    pub subtitle: String,
    pub added_at_ms: i64,
    /// File items only.
    pub path: Option<String>,
    pub detail: String,
}

impl StackItemView {
    pub fn added_at_local(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.added_at_ms).single()
    }
}

impl From<&StackItem> for StackItemView {
    fn from(item: &StackItem) -> Self {
        match item {
            StackItem::File(file) => Self {
                id: file.id.clone(),
                kind: ItemKind::File,
                title: file.name.clone(),
                subtitle: "File".to_string(),
                added_at_ms: file.added_at.as_millis(),
                path: Some(file.path.clone()),
                detail: format!("{}\n{}", file.name, file.path),
            },
            StackItem::Text(text) => Self {
                id: text.id.clone(),
                kind: ItemKind::Text,
                title: text_title(&text.text),
                subtitle: format!("Text · {} chars", text.text.chars().count()),
                added_at_ms: text.added_at.as_millis(),
                path: None,
                detail: text_detail(&text.text),
            },
        }
    }
}

/// First line with visible content, cut to [`TITLE_MAX_CHARS`].
fn text_title(text: &str) -> String {
    text.lines()
        .find(|line| !line.trim().is_empty())
        .map(|line| line.chars().take(TITLE_MAX_CHARS).collect())
        .unwrap_or_else(|| "Text".to_string())
}

fn looks_like_code(text: &str) -> bool {
    ["import ", "{", ";", "const "]
        .iter()
        .any(|marker| text.contains(marker))
}

fn text_detail(text: &str) -> String {
    if looks_like_code(text) {
        format!("```\n{text}\n```")
    } else {
        text.to_string()
    }
}
