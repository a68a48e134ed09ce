//! Command handlers: run a use case, turn its outcome into output.
//!
//! Handlers never fail. Errors become failure notices so the binary can
//! render them uniformly and pick the exit code.

pub mod capture;
pub mod clear;
pub mod copy;
pub mod copy_item;
pub mod drop;
pub mod list;
pub mod open;
pub mod remove;
pub mod status;

use crate::notice::Notice;

/// What a command prints: an optional body on stdout, then a notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub body: Option<String>,
    pub notice: Option<Notice>,
}

impl CommandOutput {
    pub fn notice(notice: Notice) -> Self {
        Self {
            body: None,
            notice: Some(notice),
        }
    }

    pub fn with_body(body: String, notice: Option<Notice>) -> Self {
        Self {
            body: Some(body),
            notice,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.notice.as_ref().is_some_and(Notice::is_failure)
    }
}
