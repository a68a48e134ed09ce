use si_app::usecases::LaunchAction;
use si_app::UseCases;
use si_core::{ItemId, StashError};

use super::CommandOutput;
use crate::notice::Notice;

pub async fn run(use_cases: &UseCases, id: String, action: LaunchAction) -> CommandOutput {
    let id = ItemId::from_string(id);
    let (done, fallback) = match action {
        LaunchAction::Open => ("Opened", "Failed to open file"),
        LaunchAction::Reveal => ("Shown in file manager", "Failed to show file"),
    };

    CommandOutput::notice(match use_cases.open_stack_item().execute(&id, action).await {
        Ok(file) => Notice::success(done, file.name),
        Err(e) => match e.downcast_ref::<StashError>() {
            Some(StashError::Unsupported(what)) => {
                Notice::failure(what.as_str(), "Only file items can be opened.")
            }
            Some(StashError::SourceMissing(path)) => {
                Notice::failure("File no longer exists", path.as_str())
            }
            _ => Notice::from_error(fallback, &e),
        },
    })
}
