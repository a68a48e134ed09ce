use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR_NAME: &str = "stashit";
const PROFILE_ENV: &str = "STASHIT_PROFILE";
const DATA_DIR_ENV: &str = "STASHIT_DATA_DIR";

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("unable to resolve the platform {0} directory")]
    Unavailable(&'static str),
}

/// Resolved locations for StashIt's files.
///
/// # Platform-specific Paths
/// - macOS: ~/Library/Application Support/stashit
/// - Windows: %LOCALAPPDATA%\stashit
/// - Linux: $XDG_DATA_HOME/stashit or ~/.local/share/stashit
///
/// `STASHIT_PROFILE=<name>` switches to `stashit-<name>`; `STASHIT_DATA_DIR`
/// replaces the data root entirely.
///
/// Nothing here creates directories; callers decide when to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StashDirs {
    pub data_root: PathBuf,
    pub config_root: PathBuf,
}

fn resolved_app_dir_name(profile: Option<String>) -> String {
    match profile {
        Some(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

impl StashDirs {
    /// Resolve from the environment and the platform conventions.
    ///
    /// # Errors
    ///
    /// [`AppDirsError::Unavailable`] when the platform reports no data or
    /// config directory (e.g. `$HOME` is unset).
    pub fn resolve() -> Result<Self, AppDirsError> {
        let name = resolved_app_dir_name(std::env::var(PROFILE_ENV).ok());

        let data_root = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::data_local_dir()
                .ok_or(AppDirsError::Unavailable("data"))?
                .join(&name),
        };
        let config_root = dirs::config_dir()
            .ok_or(AppDirsError::Unavailable("config"))?
            .join(&name);

        Ok(Self {
            data_root,
            config_root,
        })
    }

    /// Everything under one root.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use si_infra::StashDirs;
    ///
    /// let dirs = StashDirs::rooted_at("/tmp/stashit");
    /// assert_eq!(dirs.kv_dir(), Path::new("/tmp/stashit/kv"));
    /// assert_eq!(dirs.config_file(), Path::new("/tmp/stashit/config.toml"));
    /// ```
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            data_root: root.to_path_buf(),
            config_root: root.to_path_buf(),
        }
    }

    pub fn kv_dir(&self) -> PathBuf {
        self.data_root.join("kv")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_root.join("logs")
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_root.join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_suffixes_the_dir_name() {
        assert_eq!(resolved_app_dir_name(None), "stashit");
        assert_eq!(resolved_app_dir_name(Some(String::new())), "stashit");
        assert_eq!(resolved_app_dir_name(Some("dev".into())), "stashit-dev");
    }

    #[test]
    fn derived_locations_hang_off_their_roots() {
        let dirs = StashDirs::rooted_at("/tmp/stashit");
        assert_eq!(dirs.kv_dir(), PathBuf::from("/tmp/stashit/kv"));
        assert_eq!(dirs.logs_dir(), PathBuf::from("/tmp/stashit/logs"));
        assert_eq!(dirs.config_file(), PathBuf::from("/tmp/stashit/config.toml"));
    }
}
