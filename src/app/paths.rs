// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the config directory.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - `--config-dir` on the command line, or a test path
//! 2. **Environment variable** (`FOLIO_I18N_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate
//!
//! The override is passed down explicitly from [`crate::app::Flags`]; there is
//! no process-wide override state.

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "FolioI18n";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FOLIO_I18N_CONFIG_DIR";

/// Returns the application config directory path.
///
/// This directory holds `settings.toml`, which doubles as the persistent
/// key-value store for the stored language preference.
///
/// # Resolution Order
///
/// 1. `override_path`, when given
/// 2. `FOLIO_I18N_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory:
///    - Linux: `~/.config/FolioI18n/`
///    - macOS: `~/Library/Application Support/FolioI18n/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\FolioI18n\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 3: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
