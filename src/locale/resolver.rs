// SPDX-License-Identifier: MPL-2.0
//! Startup locale resolution.
//!
//! # Priority
//!
//! 1. Stored user preference (`preferred-language`), returned verbatim
//! 2. First platform-reported locale, reduced to its language subtag
//! 3. `pt-BR`
//!
//! Only the first platform locale is consulted: `["fr-FR", "en-US"]` resolves
//! to `pt-BR`, not `en-US`.

use tracing::{debug, warn};

use super::{language_subtag, LocaleTag, SubtagRegistry};
use crate::config::defaults::PREFERRED_LANGUAGE_KEY;
use crate::sources::{PlatformLocales, PreferenceStore};

/// How a stored preference is treated before platform detection runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoredPreferencePolicy {
    /// Return any non-empty stored value unchanged.
    #[default]
    Passthrough,
    /// Accept the stored value only when it is a registered locale tag;
    /// otherwise continue with platform detection.
    Validate,
}

/// Resolves the locale the site starts in.
#[derive(Debug, Clone, Default)]
pub struct LocaleResolver {
    registry: SubtagRegistry,
    policy: StoredPreferencePolicy,
}

impl LocaleResolver {
    pub fn new(registry: SubtagRegistry) -> Self {
        Self {
            registry,
            policy: StoredPreferencePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: StoredPreferencePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn registry(&self) -> &SubtagRegistry {
        &self.registry
    }

    pub fn policy(&self) -> StoredPreferencePolicy {
        self.policy
    }

    /// Resolves from already-read inputs. Never fails.
    pub fn resolve<I, S>(&self, stored: Option<&str>, platform: I) -> LocaleTag
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some(stored) = stored.filter(|s| !s.is_empty()) {
            match self.policy {
                StoredPreferencePolicy::Passthrough => {
                    debug!("using stored preference {:?}", stored);
                    return LocaleTag::new(stored);
                }
                StoredPreferencePolicy::Validate if self.registry.contains_tag(stored) => {
                    debug!("using stored preference {:?}", stored);
                    return LocaleTag::new(stored);
                }
                StoredPreferencePolicy::Validate => {
                    debug!("ignoring unsupported stored preference {:?}", stored);
                }
            }
        }

        let Some(candidate) = platform.into_iter().next() else {
            debug!("no platform locales, using {}", self.registry.fallback());
            return self.registry.fallback().clone();
        };

        let subtag = language_subtag(candidate.as_ref());
        match self.registry.lookup(subtag) {
            Some(tag) => {
                debug!("platform locale {:?} -> {}", candidate.as_ref(), tag);
                tag.clone()
            }
            None => {
                debug!(
                    "platform locale {:?} not supported, using {}",
                    candidate.as_ref(),
                    self.registry.fallback()
                );
                self.registry.fallback().clone()
            }
        }
    }

    /// Reads the stored preference and the platform list once each, then resolves.
    ///
    /// A store that cannot be read counts as having no preference.
    pub fn resolve_from<P, L>(&self, store: &P, platform: &L) -> LocaleTag
    where
        P: PreferenceStore + ?Sized,
        L: PlatformLocales + ?Sized,
    {
        let stored = match store.get(PREFERRED_LANGUAGE_KEY) {
            Ok(value) => value,
            Err(err) => {
                warn!("preference store unavailable, ignoring it: {}", err);
                None
            }
        };
        self.resolve(stored.as_deref(), platform.locales())
    }
}

/// Resolves against the built-in `pt`/`en`/`es` registry with passthrough
/// of stored preferences.
///
/// ```
/// use folio_i18n::locale::resolve;
///
/// assert_eq!(resolve(None, ["en-GB"]).as_str(), "en-US");
/// assert_eq!(resolve(Some("es-ES"), ["en-US"]).as_str(), "es-ES");
/// assert_eq!(resolve(None, Vec::<String>::new()).as_str(), "pt-BR");
/// ```
pub fn resolve<I, S>(stored: Option<&str>, platform: I) -> LocaleTag
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    LocaleResolver::default().resolve(stored, platform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::sources::{FixedLocales, MemoryStore};
    use unic_langid::LanguageIdentifier;

    const NO_LOCALES: [&str; 0] = [];

    struct UnreadableStore;

    impl PreferenceStore for UnreadableStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Io("permission denied".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Io("permission denied".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(Error::Io("permission denied".to_string()))
        }
    }

    #[test]
    fn supported_subtags_map_regardless_of_region() {
        for (subtag, expected) in [("pt", "pt-BR"), ("en", "en-US"), ("es", "es-ES")] {
            for region in ["US", "GB", "BR", "PT", "MX", "419", "x"] {
                let raw = format!("{subtag}-{region}");
                assert_eq!(resolve(None, [raw.as_str()]).as_str(), expected, "{raw}");
            }
        }
    }

    #[test]
    fn unsupported_subtags_fall_back() {
        for raw in ["fr", "de", "", "zh-CN", "EN-US", "ptBR", "-"] {
            assert_eq!(resolve(None, [raw]).as_str(), "pt-BR", "{raw:?}");
        }
    }

    #[test]
    fn empty_platform_list_falls_back() {
        assert_eq!(resolve(None, NO_LOCALES).as_str(), "pt-BR");
    }

    #[test]
    fn stored_preference_wins_over_platform() {
        assert_eq!(resolve(Some("en-US"), ["es-ES"]).as_str(), "en-US");
        assert_eq!(resolve(Some("en-US"), NO_LOCALES).as_str(), "en-US");
    }

    #[test]
    fn stored_preference_passes_through_unvalidated() {
        assert_eq!(resolve(Some("fr-FR"), ["en-US"]).as_str(), "fr-FR");
        assert_eq!(resolve(Some(" weird "), NO_LOCALES).as_str(), " weird ");
    }

    #[test]
    fn empty_stored_preference_counts_as_absent() {
        assert_eq!(resolve(Some(""), ["es"]).as_str(), "es-ES");
    }

    #[test]
    fn separators_and_whitespace_normalize() {
        assert_eq!(resolve(None, ["pt_BR"]).as_str(), "pt-BR");
        assert_eq!(resolve(None, ["pt-BR"]).as_str(), "pt-BR");
        assert_eq!(resolve(None, [" pt-BR "]).as_str(), "pt-BR");
        assert_eq!(resolve(None, [" en_GB"]).as_str(), "en-US");
    }

    #[test]
    fn only_first_platform_locale_is_consulted() {
        assert_eq!(resolve(None, ["fr-FR", "en-US"]).as_str(), "pt-BR");
        assert_eq!(resolve(None, ["es-MX", "en-US"]).as_str(), "es-ES");
    }

    #[test]
    fn concrete_scenarios() {
        assert_eq!(resolve(None, ["en-US"]).as_str(), "en-US");
        assert_eq!(resolve(None, ["es"]).as_str(), "es-ES");
        assert_eq!(resolve(None, NO_LOCALES).as_str(), "pt-BR");
        assert_eq!(resolve(Some("es-ES"), ["en-US"]).as_str(), "es-ES");
        assert_eq!(resolve(None, ["de-DE"]).as_str(), "pt-BR");
    }

    #[test]
    fn validate_policy_rejects_unknown_stored_value() {
        let resolver = LocaleResolver::default().with_policy(StoredPreferencePolicy::Validate);
        assert_eq!(resolver.resolve(Some("fr-FR"), ["es"]).as_str(), "es-ES");
        assert_eq!(resolver.resolve(Some("en-us"), NO_LOCALES).as_str(), "pt-BR");
        assert_eq!(resolver.resolve(Some("en-US"), ["es"]).as_str(), "en-US");
    }

    #[test]
    fn custom_registry_keeps_fallback() {
        let locales: [LanguageIdentifier; 2] =
            ["de-DE".parse().unwrap(), "en-GB".parse().unwrap()];
        let resolver = LocaleResolver::new(SubtagRegistry::from_locales(&locales));
        assert_eq!(resolver.resolve(None, ["de-AT"]).as_str(), "de-DE");
        assert_eq!(resolver.resolve(None, ["en"]).as_str(), "en-GB");
        assert_eq!(resolver.resolve(None, ["pt-BR"]).as_str(), "pt-BR");
    }

    #[test]
    fn resolve_from_reads_store_and_platform() {
        let mut store = MemoryStore::default();
        let platform = FixedLocales::new(["en-AU"]);
        let resolver = LocaleResolver::default();

        assert_eq!(resolver.resolve_from(&store, &platform).as_str(), "en-US");

        store.set(PREFERRED_LANGUAGE_KEY, "es-ES").unwrap();
        assert_eq!(resolver.resolve_from(&store, &platform).as_str(), "es-ES");
    }

    #[test]
    fn unreadable_store_is_treated_as_absent() {
        let platform = FixedLocales::new(["es-AR"]);
        let locale = LocaleResolver::default().resolve_from(&UnreadableStore, &platform);
        assert_eq!(locale.as_str(), "es-ES");
    }
}
