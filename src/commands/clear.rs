use si_app::models::count_noun;
use si_app::usecases::ClearOutcome;
use si_app::UseCases;

use super::CommandOutput;
use crate::notice::Notice;

pub async fn run(use_cases: &UseCases) -> CommandOutput {
    CommandOutput::notice(match use_cases.clear_stack().execute().await {
        Ok(ClearOutcome::AlreadyEmpty) => Notice::info("Stack is already empty", None),
        Ok(ClearOutcome::Cleared { removed }) => {
            Notice::success("Stack cleared", format!("Removed {}", count_noun(removed, "item")))
        }
        Ok(ClearOutcome::Cancelled) => Notice::info("Clear cancelled", None),
        Err(e) => Notice::from_error("Failed to clear stack", &e),
    })
}
