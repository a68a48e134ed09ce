use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use si_core::ports::FileSelectionPort;

use super::{run, ScriptLanguage};

const SELECTION_SCRIPT: &str = r#"tell application "Finder"
	set selectedItems to selection as alias list
	set output to ""
	repeat with anItem in selectedItems
		set output to output & POSIX path of anItem & linefeed
	end repeat
	return output
end tell"#;

/// Finder's current selection as POSIX paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct FinderSelection;

impl FinderSelection {
    pub fn new() -> Self {
        Self
    }
}

/// One path per line; blank lines are ignored. Folders keep Finder's
/// trailing slash.
pub(crate) fn parse_selection(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl FileSelectionPort for FinderSelection {
    async fn selected_paths(&self) -> Result<Vec<String>> {
        let stdout = run(ScriptLanguage::AppleScript, SELECTION_SCRIPT)
            .await
            .context("Failed to read Finder selection")?;
        let paths = parse_selection(&stdout);
        debug!(count = paths.len(), "Read Finder selection");
        Ok(paths)
    }
}
