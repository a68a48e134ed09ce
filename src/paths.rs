//! Paths typed on the command line.
//!
//! Shell paths are relative to the working directory. They are made absolute
//! here, before they reach the use cases, which only ever see host
//! references (`file://` URLs, Finder POSIX paths) or absolute paths.

use std::path::{Component, PathBuf};

use anyhow::{Context, Result};

/// Resolves command-line path arguments against a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathArgs {
    cwd: PathBuf,
}

impl PathArgs {
    /// Resolve against the process working directory.
    ///
    /// # Errors
    /// Fails when the working directory cannot be read (e.g. it was removed).
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read the current directory")?;
        Ok(Self::rooted_at(cwd))
    }

    /// Resolve against `cwd`.
    ///
    /// # Examples
    /// ```
    /// use stashit_lib::paths::PathArgs;
    ///
    /// let args = PathArgs::rooted_at("/Users/x/work");
    /// assert_eq!(args.resolve("out"), "/Users/x/work/out");
    /// assert_eq!(args.resolve("/tmp"), "/tmp");
    /// ```
    pub fn rooted_at(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Make `arg` absolute. `.` segments are dropped; `..` is kept since
    /// resolving it lexically would be wrong across symlinks. An empty
    /// argument stays empty so the caller can reject it.
    pub fn resolve(&self, arg: &str) -> String {
        if arg.is_empty() {
            return String::new();
        }
        let joined = self.cwd.join(arg);
        let cleaned: PathBuf = joined
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        cleaned.to_string_lossy().into_owned()
    }

    pub fn resolve_all(&self, args: impl IntoIterator<Item = String>) -> Vec<String> {
        args.into_iter().map(|arg| self.resolve(&arg)).collect()
    }
}
