//! Centralized path definitions for tasktrack
//!
//! All state is user-level; there is no per-project configuration.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/tasktrack/
//! └── config.toml               # Store endpoint, credentials, preferences
//! ```
//!
//! The config directory can be overridden with the `TASKTRACK_CONFIG_DIR`
//! environment variable, which the integration tests rely on.

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = "tasktrack";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "TASKTRACK_CONFIG_DIR";

/// Get the global tasktrack config directory.
///
/// Honors `TASKTRACK_CONFIG_DIR` when set, otherwise resolves to
/// `~/.config/tasktrack` (XDG standard).
#[must_use]
pub fn global_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    dirs::config_dir().map_or_else(|| PathBuf::from("."), |dir| dir.join(GLOBAL_DIR))
}

/// Get path to the global `config.toml` file.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
