// SPDX-License-Identifier: MPL-2.0
//! Injected inputs for locale resolution.
//!
//! The resolver never touches the environment directly. Production wiring
//! passes a [`SettingsStore`] and [`SystemLocales`]; tests pass a
//! [`MemoryStore`] and [`FixedLocales`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::{self, Config, PREFERRED_LANGUAGE_KEY};
use crate::error::Result;
use crate::locale::LocaleTag;

/// Persistent key-value store scoped to the running client.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Ordered list of locales reported by the host, most preferred first.
pub trait PlatformLocales {
    fn locales(&self) -> Vec<String>;
}

/// Store backed by the `[preferences]` table of `settings.toml`.
///
/// Every call re-reads the file so writes from another process are seen.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the resolved config directory (see [`crate::app::paths`]).
    ///
    /// Returns `None` when no config directory can be determined.
    pub fn with_override(base_dir: Option<PathBuf>) -> Option<Self> {
        config::config_path_with_override(base_dir).map(Self::at)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        config::load_from_path(&self.path)
    }

    /// Current contents for a write; an unreadable file yields defaults and
    /// `true`.
    fn read_for_write(&self) -> (Config, bool) {
        match self.read() {
            Ok(cfg) => (cfg, false),
            Err(err) => {
                warn!("overwriting unreadable {}: {}", self.path.display(), err);
                (Config::default(), true)
            }
        }
    }
}

impl PreferenceStore for SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.preferences.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let (mut cfg, _) = self.read_for_write();
        cfg.preferences.insert(key.to_string(), value.to_string());
        config::save_to_path(&cfg, &self.path)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let (mut cfg, recovered) = self.read_for_write();
        if cfg.preferences.remove(key).is_some() || recovered {
            config::save_to_path(&cfg, &self.path)?;
        }
        Ok(())
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// OS preferred languages via `sys-locale`.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemLocales;

impl PlatformLocales for SystemLocales {
    fn locales(&self) -> Vec<String> {
        let locales: Vec<String> = sys_locale::get_locales().collect();
        debug!("system locales: {:?}", locales);
        locales
    }
}

/// A fixed platform list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLocales(Vec<String>);

impl FixedLocales {
    pub fn new<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(locales.into_iter().map(Into::into).collect())
    }

    /// Parses a separator-delimited list such as `"en-GB,pt-BR"`.
    ///
    /// Entries are kept raw; an empty input yields an empty list.
    pub fn parse_list(list: &str) -> Self {
        if list.is_empty() {
            return Self::default();
        }
        Self::new(list.split(config::PLATFORM_LIST_SEPARATOR))
    }
}

impl PlatformLocales for FixedLocales {
    fn locales(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// Persists the user's language choice.
///
/// This is the write side of the preference; resolution only ever reads it.
pub fn set_preferred_language<P>(store: &mut P, locale: &LocaleTag) -> Result<()>
where
    P: PreferenceStore + ?Sized,
{
    debug!("storing preferred language {}", locale);
    store.set(PREFERRED_LANGUAGE_KEY, locale.as_str())
}

/// Forgets the user's language choice so platform detection applies again.
pub fn clear_preferred_language<P>(store: &mut P) -> Result<()>
where
    P: PreferenceStore + ?Sized,
{
    debug!("clearing preferred language");
    store.remove(PREFERRED_LANGUAGE_KEY)
}
