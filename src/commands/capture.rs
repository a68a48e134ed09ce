use si_app::models::count_noun;
use si_app::UseCases;
use tracing::info_span;
use tracing::Instrument;

use super::CommandOutput;
use crate::notice::Notice;

pub async fn run(use_cases: &UseCases) -> CommandOutput {
    let result = use_cases
        .capture_items()
        .execute()
        .instrument(info_span!("command.capture"))
        .await;

    CommandOutput::notice(match result {
        Ok(outcome) => Notice::success(
            "Added to Stack",
            format!("{} stashed", count_noun(outcome.added_count(), "item")),
        ),
        Err(e) => Notice::from_error("Failed to add to stack", &e),
    })
}
