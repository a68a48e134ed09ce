use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use si_core::ports::{ConfirmPrompt, ConfirmationPort};

/// Asks on the terminal. `--yes` accepts everything; without a terminal on
/// stdin every destructive prompt is declined.
pub struct TerminalConfirmation {
    assume_yes: bool,
}

impl TerminalConfirmation {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

/// `y`/`yes` in any case accepts; anything else declines.
pub(crate) fn parse_answer(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn ask(prompt: &ConfirmPrompt) -> Result<bool> {
    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{}", prompt.title)?;
    writeln!(stderr, "{}", prompt.message)?;
    write!(stderr, "{}? [y/N] ", prompt.primary_action)?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(parse_answer(&line))
}

#[async_trait]
impl ConfirmationPort for TerminalConfirmation {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> Result<bool> {
        if self.assume_yes {
            debug!(title = %prompt.title, "Confirmed by --yes");
            return Ok(true);
        }
        if !io::stdin().is_terminal() {
            debug!(title = %prompt.title, "No terminal, declining");
            return Ok(false);
        }

        let prompt = prompt.clone();
        tokio::task::spawn_blocking(move || ask(&prompt))
            .await
            .context("Prompt task panicked")?
    }
}
