//! Desktop launcher: default applications and the file manager.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use si_core::ports::LauncherPort;

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("{program} exited with {status}")]
    Failed { program: &'static str, status: String },
    #[error("{0} has no parent folder")]
    NoParent(PathBuf),
}

/// How to show a file in the file manager on this platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RevealStrategy {
    /// Run a program that selects the file.
    Command {
        program: &'static str,
        args: Vec<OsString>,
    },
    /// Open the containing folder.
    OpenParent(PathBuf),
}

pub(crate) fn reveal_strategy(path: &Path) -> Result<RevealStrategy, LauncherError> {
    if cfg!(target_os = "macos") {
        Ok(RevealStrategy::Command {
            program: "open",
            args: vec!["-R".into(), path.as_os_str().to_owned()],
        })
    } else if cfg!(target_os = "windows") {
        let mut select = OsString::from("/select,");
        select.push(path.as_os_str());
        Ok(RevealStrategy::Command {
            program: "explorer",
            args: vec![select],
        })
    } else {
        path.parent()
            .map(|parent| RevealStrategy::OpenParent(parent.to_path_buf()))
            .ok_or_else(|| LauncherError::NoParent(path.to_path_buf()))
    }
}

/// Launcher backed by the `open` crate, plus `open -R` / `explorer /select`
/// for revealing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }
}

async fn open_detached(target: PathBuf) -> Result<()> {
    let shown = target.display().to_string();
    tokio::task::spawn_blocking(move || open::that_detached(&target))
        .await
        .context("Launcher task panicked")?
        .with_context(|| format!("Failed to open {shown}"))
}

#[async_trait]
impl LauncherPort for SystemLauncher {
    async fn open(&self, path: &Path) -> Result<()> {
        open_detached(path.to_path_buf()).await?;
        debug!(path = %path.display(), "Opened with default application");
        Ok(())
    }

    async fn reveal(&self, path: &Path) -> Result<()> {
        match reveal_strategy(path)? {
            RevealStrategy::Command { program, args } => {
                let status = tokio::process::Command::new(program)
                    .args(&args)
                    .status()
                    .await
                    .with_context(|| format!("Failed to run {program}"))?;
                // explorer.exe reports 1 even when it selected the file.
                if !status.success() && program != "explorer" {
                    return Err(LauncherError::Failed {
                        program,
                        status: status.to_string(),
                    }
                    .into());
                }
            }
            RevealStrategy::OpenParent(parent) => open_detached(parent).await?,
        }
        debug!(path = %path.display(), "Revealed in file manager");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(target_os = "macos")]
    #[test]
    fn macos_reveals_with_open_r() {
        let strategy = reveal_strategy(Path::new("/Users/x/a b.txt")).unwrap();
        assert_eq!(
            strategy,
            RevealStrategy::Command {
                program: "open",
                args: vec!["-R".into(), "/Users/x/a b.txt".into()],
            }
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_opens_the_parent_folder() {
        let strategy = reveal_strategy(Path::new("/home/x/docs/a.txt")).unwrap();
        assert_eq!(strategy, RevealStrategy::OpenParent(PathBuf::from("/home/x/docs")));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn root_has_nothing_to_reveal_into() {
        assert!(matches!(
            reveal_strategy(Path::new("/")),
            Err(LauncherError::NoParent(_))
        ));
    }
}
