// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and startup.
//!
//! # Categories
//!
//! - **Locale**: the preference key and the platform list separator
//! - **Files**: settings file and catalog naming
//! - **Logging**: default log filter for the binary

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Key under which the user's chosen locale is stored.
pub const PREFERRED_LANGUAGE_KEY: &str = "preferred-language";

/// Separator for the `--platform` list on the command line.
pub const PLATFORM_LIST_SEPARATOR: char = ',';

// ==========================================================================
// File Defaults
// ==========================================================================

/// Settings file name within the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Extension of Fluent catalog files.
pub const CATALOG_EXTENSION: &str = "ftl";

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!PREFERRED_LANGUAGE_KEY.is_empty());
    assert!(!CATALOG_EXTENSION.is_empty());
    // The separator must not split a single `xx-YY` or `xx_YY` tag
    assert!(PLATFORM_LIST_SEPARATOR != '-');
    assert!(PLATFORM_LIST_SEPARATOR != '_');
};
