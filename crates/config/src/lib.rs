pub mod schema;
pub mod settings;
pub mod watcher;

pub use schema::{ClockAnchor, ClockLocation, DockConfig, PanelPosition, PreviewConfig, TaskbarPosition};
pub use settings::{changed_keys, SettingKey, Settings};
pub use watcher::ConfigWatcher;

use dock_core::{DockError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `DockConfig::default()` if
/// the file doesn't exist so the dock always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<DockConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(DockConfig::default());
    }

    let raw = std::fs::read_to_string(path)?;
    parse(&raw)
}

/// Parse a config document.
pub fn parse(raw: &str) -> Result<DockConfig> {
    toml::from_str(raw).map_err(|e| DockError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("dock").join("dock.toml")
}
