//! # Stash configuration
//!
//! Pure data: the recognized user options and their TOML mapping. Reading the
//! file is the binary's job; this module only maps an already parsed value.

use serde::{Deserialize, Serialize};

/// Recognized user options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StashConfig {
    /// Clear the stack after a drop without asking.
    pub auto_clear_on_drop: bool,

    /// Whether the host window should close after a single-item drop.
    pub close_window_on_drop: bool,
}

impl StashConfig {
    /// Create StashConfig from a parsed TOML document.
    ///
    /// Keys are looked up in a `[drop]` table first, then at top level. Both
    /// `snake_case` and the `camelCase` preference names are accepted. Missing
    /// keys fall back to `false`; keys of the wrong type are an error.
    ///
    /// ```
    /// use si_core::StashConfig;
    ///
    /// let value: toml::Value = toml::from_str("[drop]\nauto_clear_on_drop = true").unwrap();
    /// let config = StashConfig::from_toml(&value).unwrap();
    /// assert!(config.auto_clear_on_drop);
    /// assert!(!config.close_window_on_drop);
    /// ```
    pub fn from_toml(value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            auto_clear_on_drop: lookup_bool(value, "auto_clear_on_drop", "autoClearOnDrop")?,
            close_window_on_drop: lookup_bool(value, "close_window_on_drop", "closeWindowOnDrop")?,
        })
    }
}

fn lookup_bool(value: &toml::Value, snake: &str, camel: &str) -> anyhow::Result<bool> {
    let tables = [value.get("drop"), Some(value)];
    for table in tables.into_iter().flatten() {
        for key in [snake, camel] {
            if let Some(found) = table.get(key) {
                return found
                    .as_bool()
                    .ok_or_else(|| anyhow::anyhow!("config key `{key}` must be a boolean"));
            }
        }
    }
    Ok(false)
}
