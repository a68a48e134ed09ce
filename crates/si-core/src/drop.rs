//! Drop model: how items are materialized and what a drop reports back.

use serde::{Deserialize, Serialize};

use crate::error::StashError;
use crate::ids::ItemId;

/// Prefix of files written for text items; the full name is `stash-text-<n>.txt`.
pub const TEXT_FILE_PREFIX: &str = "stash-text-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropMode {
    Copy,
    Move,
}

impl DropMode {
    pub fn is_destructive(self) -> bool {
        matches!(self, DropMode::Move)
    }
}

/// File name for the `index`-th text item of a drop (1-based).
pub fn text_file_name(index: usize) -> String {
    format!("{TEXT_FILE_PREFIX}{index}.txt")
}

/// One item that could not be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropFailure {
    pub item_id: ItemId,
    pub error: StashError,
}

/// Aggregated outcome of a drop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropReport {
    pub success_count: usize,
    pub failed_count: usize,
    pub failures: Vec<DropFailure>,
}

impl DropReport {
    pub fn record_success(&mut self) {
        self.success_count += 1;
    }

    pub fn record_failure(&mut self, item_id: ItemId, error: StashError) {
        self.failed_count += 1;
        self.failures.push(DropFailure { item_id, error });
    }

    pub fn attempted(&self) -> usize {
        self.success_count + self.failed_count
    }

    /// Clearing is only ever offered once something actually landed.
    pub fn may_clear(&self) -> bool {
        self.success_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_file_names_are_one_based() {
        assert_eq!(text_file_name(1), "stash-text-1.txt");
        assert_eq!(text_file_name(12), "stash-text-12.txt");
    }

    #[test]
    fn report_aggregates_counts() {
        let mut report = DropReport::default();
        assert!(!report.may_clear());

        report.record_success();
        report.record_failure(ItemId::from("x"), StashError::SourceMissing("/x".into()));

        assert_eq!(report.attempted(), 2);
        assert_eq!(report.failed_count, 1);
        assert_eq!(report.failures[0].item_id.as_str(), "x");
        assert!(report.may_clear());
    }

    #[test]
    fn only_move_is_destructive() {
        assert!(DropMode::Move.is_destructive());
        assert!(!DropMode::Copy.is_destructive());
    }
}
