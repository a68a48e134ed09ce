//! macOS automation through the `osascript` binary.
//!
//! The multi-file pasteboard write and the Finder selection have no
//! `clipboard-rs` counterpart; both are short scripts run as a child process.

mod finder;
mod pasteboard;

pub use finder::FinderSelection;
pub use pasteboard::OsascriptPasteboard;

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Error)]
pub enum OsascriptError {
    #[error("failed to launch osascript: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("osascript exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("osascript printed unexpected output: {0}")]
    Output(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScriptLanguage {
    AppleScript,
    JavaScript,
}

/// Run `script` and return its trimmed standard output.
pub(crate) async fn run(language: ScriptLanguage, script: &str) -> Result<String, OsascriptError> {
    let mut command = Command::new("osascript");
    if language == ScriptLanguage::JavaScript {
        command.args(["-l", "JavaScript"]);
    }
    let output = command.arg("-e").arg(script).kill_on_drop(true).output().await?;

    if !output.status.success() {
        return Err(OsascriptError::Failed {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
    debug!(?language, bytes = stdout.len(), "osascript finished");
    Ok(stdout)
}
