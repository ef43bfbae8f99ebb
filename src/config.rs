//! Global configuration management
//!
//! Provides persistent storage for the hosted store connection and user
//! preferences. Config is stored at `~/.config/tasktrack/config.toml`
//! (XDG standard).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// Global tasktrack configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Hosted store connection
    #[serde(default)]
    pub store: StoreConfig,
    /// Credentials of the signed-in user
    #[serde(default)]
    pub auth: AuthConfig,
    /// Notification preferences
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Hosted store connection settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the hosted store (e.g. `https://xyz.example.co`)
    #[serde(default)]
    pub url: String,
    /// Public API key sent with every request
    #[serde(default)]
    pub api_key: String,
}

/// Credentials of the signed-in user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Bearer token scoping store access to this user's rows
    #[serde(default)]
    pub access_token: String,
    /// Owner id stamped on created assignments
    #[serde(default)]
    pub user_id: String,
}

/// Notification preferences
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Whether deadline reminders may be emitted
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

impl GlobalConfig {
    /// Get the config directory path
    #[must_use]
    pub fn config_dir() -> PathBuf {
        paths::global_config_dir()
    }

    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or create default if not exists
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific path, falling back to defaults
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            fs::read_to_string(path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific path, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Whether the store connection has been configured
    #[must_use]
    pub fn is_store_configured(&self) -> bool {
        !self.store.url.is_empty() && !self.store.api_key.is_empty()
    }
}
