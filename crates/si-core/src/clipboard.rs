use serde::{Deserialize, Serialize};

/// What the host clipboard currently holds, as far as the stack cares.
///
/// `files` are raw references exactly as the platform reported them (plain
/// paths or `file://` URLs); they are normalized when items are built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardPayload {
    pub files: Vec<String>,
    pub text: Option<String>,
}

impl ClipboardPayload {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.text.as_deref().map_or(true, str::is_empty)
    }
}
