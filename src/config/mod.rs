// SPDX-License-Identifier: MPL-2.0
//! This module handles the site's i18n configuration, including loading and saving
//! the persisted preferences in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[preferences]` - Free-form key-value store (holds `preferred-language`)
//! - `[i18n]` - Stored-preference policy and optional catalog directory
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set `FOLIO_I18N_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use folio_i18n::config::{self, PREFERRED_LANGUAGE_KEY};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config
//!     .preferences
//!     .insert(PREFERRED_LANGUAGE_KEY.to_string(), "en-US".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::locale::StoredPreferencePolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

// =============================================================================
// Section Structs
// =============================================================================

/// Translation bootstrap settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct I18nConfig {
    /// Ignore a stored preference that is not a supported locale.
    #[serde(default)]
    pub validate_stored_preference: bool,

    /// Directory of `.ftl` catalogs replacing the embedded ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_dir: Option<PathBuf>,
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Persisted user preferences, keyed by name.
    #[serde(default)]
    pub preferences: BTreeMap<String, String>,

    #[serde(default)]
    pub i18n: I18nConfig,
}

impl Config {
    pub fn stored_preference_policy(&self) -> StoredPreferencePolicy {
        if self.i18n.validate_stored_preference {
            StoredPreferencePolicy::Validate
        } else {
            StoredPreferencePolicy::Passthrough
        }
    }
}

// =============================================================================
// Load Functions
// =============================================================================

/// Returns the settings file path for the given config directory override.
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Never fails: a missing file yields defaults, an unreadable one yields
/// defaults plus a warning naming the file and the parse problem.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    warn!("failed to load {}: {}", path.display(), err);
                    let warning = format!(
                        "settings in {} could not be read ({}), using defaults",
                        path.display(),
                        err
                    );
                    return (Config::default(), Some(warning));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
