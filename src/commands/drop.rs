use std::fmt::Write;

use si_app::models::count_noun;
use si_app::usecases::{DropOutcome, DropTarget};
use si_app::UseCases;
use si_core::{DropMode, DropReport};

use super::CommandOutput;
use crate::notice::{Notice, NoticeStyle};
use crate::paths::PathArgs;

pub async fn run(
    use_cases: &UseCases,
    paths: &PathArgs,
    destinations: Vec<String>,
    move_items: bool,
) -> CommandOutput {
    let target = if destinations.is_empty() {
        DropTarget::Selection
    } else {
        DropTarget::Explicit(paths.resolve_all(destinations))
    };
    let mode = if move_items { DropMode::Move } else { DropMode::Copy };

    match use_cases.drop_stack().execute(target, mode).await {
        Ok(DropOutcome::Cancelled) => {
            CommandOutput::notice(Notice::info("Drop cancelled", Some("Nothing was moved".to_string())))
        }
        Ok(DropOutcome::Completed {
            destination,
            report,
            cleared,
            ..
        }) => {
            let notice = summary_notice(&report, cleared);
            if report.failures.is_empty() {
                return CommandOutput::notice(notice);
            }
            let mut body = format!("Dropped into {}", destination.display());
            for failure in &report.failures {
                let _ = write!(body, "\n  ✗ {}: {}", failure.item_id, failure.error);
            }
            CommandOutput::with_body(body, Some(notice))
        }
        Err(e) => CommandOutput::notice(Notice::from_error("Failed to drop stack", &e)),
    }
}

/// `"2 items dropped, 1 failed, stack cleared"`.
pub(crate) fn summary_notice(report: &DropReport, cleared: bool) -> Notice {
    let mut parts = Vec::new();
    if report.success_count > 0 {
        parts.push(format!("{} dropped", count_noun(report.success_count, "item")));
    }
    if report.failed_count > 0 {
        parts.push(format!("{} failed", report.failed_count));
    }
    if cleared {
        parts.push("stack cleared".to_string());
    }

    let (style, title) = match (report.success_count, report.failed_count) {
        (0, _) => (NoticeStyle::Failure, "Drop failed"),
        (_, 0) => (NoticeStyle::Success, "Drop complete"),
        _ => (NoticeStyle::Partial, "Drop complete"),
    };
    let detail = (!parts.is_empty()).then(|| parts.join(", "));
    Notice::new(style, title, detail)
}
