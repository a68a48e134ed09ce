//! User-facing result messages: a short title plus a one-line detail.

use std::fmt;

use serde::Serialize;
use si_core::StashError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeStyle {
    Success,
    /// Finished, but not everything went through.
    Partial,
    Info,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub style: NoticeStyle,
    pub title: String,
    pub detail: Option<String>,
}

impl Notice {
    pub fn new(style: NoticeStyle, title: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            style,
            title: title.into(),
            detail,
        }
    }

    pub fn success(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(NoticeStyle::Success, title, Some(detail.into()))
    }

    pub fn info(title: impl Into<String>, detail: Option<String>) -> Self {
        Self::new(NoticeStyle::Info, title, detail)
    }

    pub fn failure(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(NoticeStyle::Failure, title, Some(detail.into()))
    }

    /// Map an operation error to a notice.
    ///
    /// Known [`StashError`]s get their own wording; anything else is reported
    /// under `fallback_title` with the full error chain on one line.
    pub fn from_error(fallback_title: &str, err: &anyhow::Error) -> Self {
        match err.downcast_ref::<StashError>() {
            Some(stash) => Self::from_stash_error(fallback_title, stash),
            None => Self::failure(fallback_title, one_line(&format!("{err:#}"))),
        }
    }

    fn from_stash_error(fallback_title: &str, err: &StashError) -> Self {
        match err {
            StashError::EmptyStack => Self::failure("Stack is empty", "Add files to stack first"),
            StashError::EmptySelection => Self::failure(
                "Nothing to add",
                "Select files in Finder or copy files/text to clipboard",
            ),
            StashError::InvalidDestination(reason) => Self::failure("Invalid destination", reason.as_str()),
            StashError::NoFilesToCopy => Self::failure("No files in stack", "Only files can be pasted."),
            StashError::WriteVerificationFailed => Self::failure(
                fallback_title,
                "The pasteboard did not report file references after the write",
            ),
            StashError::Unsupported(what) => {
                Self::failure(what.as_str(), "Only files can be dropped. Use copy-text for text.")
            }
            StashError::ItemNotFound(id) => Self::failure("Item not found", format!("No stack item with id {id}")),
            other => Self::failure(fallback_title, other.to_string()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.style == NoticeStyle::Failure
    }
}

fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.style {
            NoticeStyle::Success => "✓",
            NoticeStyle::Partial => "!",
            NoticeStyle::Info => "•",
            NoticeStyle::Failure => "✗",
        };
        write!(f, "{marker} {}", self.title)?;
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}
