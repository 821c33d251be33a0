// SPDX-License-Identifier: MPL-2.0
//! This module handles the overlay runtime's configuration, including loading
//! and saving user preferences to a `settings.toml` file.
//!
//! Every value is optional. Missing values fall back to the constants in
//! [`defaults`], out-of-range values are clamped when resolved.
//!
//! # Examples
//!
//! ```no_run
//! use weightlog::config::{self, Config};
//!
//! let mut config = config::load();
//! config.overlay.exit_grace_ms = Some(250);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::notifications::QueueSettings;
use crate::ui::state::GracePeriod;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "WeightLog";

/// Persisted user preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// `[overlay]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Exit-transition grace period for dialogs and toasts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_grace_ms: Option<u64>,
}

/// `[notifications]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_ttl_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_ttl_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_ttl_ms: Option<u64>,
}

impl Config {
    /// Resolved exit grace period.
    #[must_use]
    pub fn exit_grace(&self) -> GracePeriod {
        self.overlay
            .exit_grace_ms
            .map(GracePeriod::from_millis)
            .unwrap_or_default()
    }

    /// Resolved notification queue settings.
    #[must_use]
    pub fn queue_settings(&self) -> QueueSettings {
        let n = &self.notifications;
        let ttl = |value: Option<u64>, default: u64| {
            Duration::from_millis(value.unwrap_or(default).min(MAX_TTL_MS))
        };

        QueueSettings {
            capacity: n
                .max_entries
                .unwrap_or(DEFAULT_MAX_NOTIFICATIONS)
                .clamp(MIN_MAX_NOTIFICATIONS, MAX_MAX_NOTIFICATIONS),
            removal_grace: self.exit_grace(),
            success_ttl: ttl(n.success_ttl_ms, DEFAULT_SUCCESS_TTL_MS),
            info_ttl: ttl(n.info_ttl_ms, DEFAULT_INFO_TTL_MS),
            error_ttl: ttl(n.error_ttl_ms, DEFAULT_ERROR_TTL_MS),
        }
    }
}

/// Default location: `<config_dir>/WeightLog/settings.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields defaults, an unreadable or invalid one
/// yields defaults and a warning in the log.
#[must_use]
pub fn load() -> Config {
    match default_config_path() {
        Some(path) if path.exists() => load_or_default(&path),
        _ => Config::default(),
    }
}

/// Loads from `path`, falling back to defaults (with a warning) on any error.
#[must_use]
pub fn load_or_default(path: &Path) -> Config {
    match load_from_path(path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Ignoring config at {}: {err}", path.display());
            Config::default()
        }
    }
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
