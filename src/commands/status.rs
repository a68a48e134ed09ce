use std::path::Path;

use si_app::models::count_noun;
use si_app::UseCases;

use super::CommandOutput;
use crate::notice::Notice;

fn on_off(flag: bool) -> &'static str {
    if flag {
        "✓ ON"
    } else {
        "✗ OFF"
    }
}

pub async fn run(use_cases: &UseCases, config_file: &Path, data_dir: &Path) -> CommandOutput {
    let report = use_cases.stack_status().execute().await;

    let body = format!(
        "Config: {}\nData:   {}",
        config_file.display(),
        data_dir.display()
    );
    let detail = format!(
        "Auto-clear: {} | Close window: {} | Stack: {} ({}, {})",
        on_off(report.config.auto_clear_on_drop),
        on_off(report.config.close_window_on_drop),
        count_noun(report.total, "item"),
        count_noun(report.files, "file"),
        count_noun(report.texts, "text"),
    );
    CommandOutput::with_body(body, Some(Notice::info("StashIt status", Some(detail))))
}
