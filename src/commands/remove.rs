use si_app::models::StackItemView;
use si_app::usecases::RemoveOutcome;
use si_app::UseCases;
use si_core::ItemId;

use super::CommandOutput;
use crate::notice::Notice;

pub async fn run(use_cases: &UseCases, id: String) -> CommandOutput {
    let id = ItemId::from_string(id);
    CommandOutput::notice(match use_cases.remove_stack_item().execute(&id).await {
        Ok(RemoveOutcome::Removed(item)) => {
            Notice::success("Item removed", StackItemView::from(&item).title)
        }
        Ok(RemoveOutcome::Cancelled) => Notice::info("Remove cancelled", None),
        Err(e) => Notice::from_error("Failed to remove item", &e),
    })
}
