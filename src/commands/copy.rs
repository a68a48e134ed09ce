use si_app::models::count_noun;
use si_app::UseCases;

use super::CommandOutput;
use crate::notice::Notice;

pub async fn run(use_cases: &UseCases) -> CommandOutput {
    CommandOutput::notice(match use_cases.copy_stack_to_clipboard().execute().await {
        Ok(outcome) => {
            let mut detail = format!(
                "{} copied - Press ⌘V anywhere",
                count_noun(outcome.copied_files, "file")
            );
            if outcome.skipped_text > 0 {
                detail.push_str(&format!(
                    " ({} skipped)",
                    count_noun(outcome.skipped_text, "text item")
                ));
            }
            Notice::success("Files ready to paste!", detail)
        }
        Err(e) => Notice::from_error("Failed to copy stack", &e),
    })
}
