// SPDX-License-Identifier: MPL-2.0
//! Startup wiring between configuration, preference storage, platform
//! detection and the catalog loader.
//!
//! Everything here runs once per process. The result is a
//! [`TranslationConfig`] owned by the caller; nothing is kept in globals.

pub mod paths;

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::i18n::{Catalog, CatalogLoader, TranslationConfig};
use crate::locale::{LocaleResolver, LocaleTag, StoredPreferencePolicy, SubtagRegistry};
use crate::sources::{
    self, FixedLocales, MemoryStore, PlatformLocales, PreferenceStore, SettingsStore,
    SystemLocales,
};

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FOLIO_I18N_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Ignore stored preferences that are not a supported locale.
    pub validate_stored: bool,
    /// Comma-separated platform locale list replacing OS detection.
    pub platform: Option<String>,
}

impl Flags {
    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(PathBuf::from)
    }
}

/// Result of startup: the translation configuration plus any config warning
/// worth surfacing to the user.
#[derive(Debug)]
pub struct Startup {
    pub translation: TranslationConfig,
    pub config_warning: Option<String>,
}

/// Loads catalogs, resolves the initial locale and builds the configuration.
///
/// The subtag registry comes from the catalogs that were actually loaded, so
/// a custom catalog directory extends detection without code changes.
pub fn bootstrap<P, L>(
    store: &P,
    platform: &L,
    loader: &CatalogLoader,
    policy: StoredPreferencePolicy,
) -> Result<TranslationConfig>
where
    P: PreferenceStore + ?Sized,
    L: PlatformLocales + ?Sized,
{
    let messages = loader.load()?;
    let registry = SubtagRegistry::from_locales(messages.values().map(Catalog::langid));
    let locale = LocaleResolver::new(registry)
        .with_policy(policy)
        .resolve_from(store, platform);
    info!("starting with locale {}", locale);
    TranslationConfig::new(locale, messages)
}

/// Performs the full startup sequence described by `flags`.
pub fn start(flags: &Flags) -> Result<Startup> {
    let (config, config_warning) = config::load_with_override(flags.config_dir());

    let loader = catalog_loader(flags, &config);
    let policy = if flags.validate_stored {
        StoredPreferencePolicy::Validate
    } else {
        config.stored_preference_policy()
    };

    let store: Box<dyn PreferenceStore> = match SettingsStore::with_override(flags.config_dir()) {
        Some(store) => Box::new(store),
        None => {
            warn!("no config directory available, ignoring stored preference");
            Box::new(MemoryStore::default())
        }
    };
    let platform = platform_locales(flags);

    let translation = bootstrap(store.as_ref(), platform.as_ref(), &loader, policy)?;
    Ok(Startup {
        translation,
        config_warning,
    })
}

/// Validates `tag` against the loaded catalogs and stores it as the
/// preferred language.
pub fn change_language(flags: &Flags, tag: &str) -> Result<LocaleTag> {
    let (config, _) = config::load_with_override(flags.config_dir());
    let messages = catalog_loader(flags, &config).load()?;
    let registry = SubtagRegistry::from_locales(messages.values().map(Catalog::langid));

    let tag = tag.trim();
    if !registry.contains_tag(tag) {
        return Err(Error::UnsupportedLocale(tag.to_string()));
    }

    let locale = LocaleTag::new(tag);
    let mut store = settings_store(flags)?;
    sources::set_preferred_language(&mut store, &locale)?;
    info!("preferred language set to {}", locale);
    Ok(locale)
}

/// Removes the stored preference.
pub fn clear_language(flags: &Flags) -> Result<()> {
    let mut store = settings_store(flags)?;
    sources::clear_preferred_language(&mut store)?;
    info!("preferred language cleared");
    Ok(())
}

fn settings_store(flags: &Flags) -> Result<SettingsStore> {
    SettingsStore::with_override(flags.config_dir())
        .ok_or_else(|| Error::Config("no config directory available".to_string()))
}

fn catalog_loader(flags: &Flags, config: &Config) -> CatalogLoader {
    let dir = flags
        .i18n_dir
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.i18n.catalog_dir.clone());
    match dir {
        Some(dir) => {
            debug!("loading catalogs from {}", dir.display());
            CatalogLoader::from_dir(dir)
        }
        None => CatalogLoader::embedded(),
    }
}

fn platform_locales(flags: &Flags) -> Box<dyn PlatformLocales> {
    match &flags.platform {
        Some(list) => Box::new(FixedLocales::parse_list(list)),
        None => Box::new(SystemLocales),
    }
}
