//! # Configuration loader
//!
//! Reads `config.toml` and maps it onto [`StashConfig`]. A missing file is not
//! an error: every option defaults to off. Anything else that goes wrong is
//! reported with the offending path.
//!
//! ```toml
//! [drop]
//! auto_clear_on_drop = true
//! close_window_on_drop = false
//! ```

use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use si_core::StashConfig;
use tracing::debug;

pub fn load_config(config_path: &Path) -> anyhow::Result<StashConfig> {
    let content = match std::fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(StashConfig::default());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })
        }
    };

    let toml_value: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config as TOML: {}", config_path.display()))?;
    StashConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid config: {}", config_path.display()))
}
