// SPDX-License-Identifier: MPL-2.0
//! Locale identifiers and the language-subtag registry.
//!
//! The site ships three catalogs (`pt-BR`, `en-US`, `es-ES`). A platform locale
//! such as `en-GB` or `pt_BR` is reduced to its language subtag and mapped onto
//! one of them through a [`SubtagRegistry`]. Anything the registry does not know
//! falls back to `pt-BR`.

pub mod resolver;

pub use resolver::{resolve, LocaleResolver, StoredPreferencePolicy};

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// A locale identifier such as `pt-BR`.
///
/// Values produced by platform detection are always canonical. A stored user
/// preference is carried verbatim, so a `LocaleTag` is not guaranteed to name a
/// supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleTag(String);

impl LocaleTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocaleTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SupportedLocale> for LocaleTag {
    fn from(locale: SupportedLocale) -> Self {
        Self(locale.as_tag().to_string())
    }
}

impl From<&LanguageIdentifier> for LocaleTag {
    fn from(langid: &LanguageIdentifier) -> Self {
        Self(langid.to_string())
    }
}

/// The locales the site ships catalogs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SupportedLocale {
    #[default]
    PtBr,
    EnUs,
    EsEs,
}

impl SupportedLocale {
    pub const ALL: [SupportedLocale; 3] = [
        SupportedLocale::PtBr,
        SupportedLocale::EnUs,
        SupportedLocale::EsEs,
    ];

    /// Locale used when nothing better is known.
    pub const DEFAULT: SupportedLocale = SupportedLocale::PtBr;

    pub fn as_tag(self) -> &'static str {
        match self {
            SupportedLocale::PtBr => "pt-BR",
            SupportedLocale::EnUs => "en-US",
            SupportedLocale::EsEs => "es-ES",
        }
    }

    pub fn language_subtag(self) -> &'static str {
        match self {
            SupportedLocale::PtBr => "pt",
            SupportedLocale::EnUs => "en",
            SupportedLocale::EsEs => "es",
        }
    }

    /// Exact, case-sensitive match on the canonical tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.as_tag() == tag)
    }
}

impl fmt::Display for SupportedLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for SupportedLocale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s.trim()).ok_or_else(|| Error::UnsupportedLocale(s.to_string()))
    }
}

/// Extracts the language subtag from a raw platform locale string.
///
/// Surrounding whitespace is trimmed and everything from the first `-` or `_`
/// on is dropped. No case folding happens here.
///
/// ```
/// use folio_i18n::locale::language_subtag;
///
/// assert_eq!(language_subtag(" pt_BR "), "pt");
/// assert_eq!(language_subtag("es"), "es");
/// assert_eq!(language_subtag(""), "");
/// ```
pub fn language_subtag(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.split(['-', '_']).next().unwrap_or(trimmed)
}

/// Mapping from a two-letter language subtag to the locale that serves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtagRegistry {
    by_subtag: BTreeMap<String, LocaleTag>,
    known: BTreeSet<LocaleTag>,
    fallback: LocaleTag,
}

impl Default for SubtagRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SubtagRegistry {
    /// The fixed `pt`/`en`/`es` mapping.
    pub fn builtin() -> Self {
        let by_subtag = SupportedLocale::ALL
            .into_iter()
            .map(|locale| (locale.language_subtag().to_string(), locale.into()))
            .collect();
        let known = SupportedLocale::ALL.into_iter().map(LocaleTag::from).collect();
        Self {
            by_subtag,
            known,
            fallback: SupportedLocale::DEFAULT.into(),
        }
    }

    /// Builds the registry from the locales a catalog loader discovered.
    ///
    /// A discovered built-in locale keeps its fixed language (`en-US` serves
    /// `en` even next to `en-GB`). Other languages go to their lowest tag in
    /// sort order, so the result does not depend on discovery order.
    /// The fallback stays `pt-BR` whatever the loader found.
    pub fn from_locales<'a>(locales: impl IntoIterator<Item = &'a LanguageIdentifier>) -> Self {
        let known: BTreeSet<LocaleTag> = locales.into_iter().map(LocaleTag::from).collect();

        let mut by_subtag = BTreeMap::new();
        for locale in SupportedLocale::ALL {
            let tag = LocaleTag::from(locale);
            if known.contains(&tag) {
                by_subtag.insert(locale.language_subtag().to_string(), tag);
            }
        }
        for tag in &known {
            by_subtag
                .entry(language_subtag(tag.as_str()).to_string())
                .or_insert_with(|| tag.clone());
        }

        Self {
            by_subtag,
            known,
            fallback: SupportedLocale::DEFAULT.into(),
        }
    }

    pub fn lookup(&self, subtag: &str) -> Option<&LocaleTag> {
        self.by_subtag.get(subtag)
    }

    pub fn fallback(&self) -> &LocaleTag {
        &self.fallback
    }

    /// Whether `tag` is exactly one of the registered locales, including
    /// ones that do not serve a language subtag (`en-GB` next to `en-US`).
    pub fn contains_tag(&self, tag: &str) -> bool {
        tag == self.fallback.as_str() || self.known.iter().any(|t| t.as_str() == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn langid(s: &str) -> LanguageIdentifier {
        s.parse().expect("valid language identifier")
    }

    #[test]
    fn language_subtag_splits_on_first_separator() {
        assert_eq!(language_subtag("en-GB"), "en");
        assert_eq!(language_subtag("pt_BR"), "pt");
        assert_eq!(language_subtag("zh-Hant-TW"), "zh");
        assert_eq!(language_subtag("es_419-x"), "es");
    }

    #[test]
    fn language_subtag_trims_and_keeps_case() {
        assert_eq!(language_subtag("  en-US\t"), "en");
        assert_eq!(language_subtag("EN-us"), "EN");
    }

    #[test]
    fn language_subtag_of_separator_only_input_is_empty() {
        assert_eq!(language_subtag("-BR"), "");
        assert_eq!(language_subtag("   "), "");
    }

    #[test]
    fn builtin_registry_maps_three_subtags() {
        let registry = SubtagRegistry::builtin();
        assert_eq!(registry.lookup("pt").map(LocaleTag::as_str), Some("pt-BR"));
        assert_eq!(registry.lookup("en").map(LocaleTag::as_str), Some("en-US"));
        assert_eq!(registry.lookup("es").map(LocaleTag::as_str), Some("es-ES"));
        assert!(registry.lookup("fr").is_none());
        assert!(registry.lookup("PT").is_none());
        assert_eq!(registry.fallback().as_str(), "pt-BR");
    }

    #[test]
    fn registry_from_locales_picks_lowest_tag_for_other_languages() {
        let locales = [langid("pt-PT"), langid("pt-BR"), langid("de-DE"), langid("de-AT")];
        let registry = SubtagRegistry::from_locales(&locales);
        assert_eq!(registry.lookup("pt").map(LocaleTag::as_str), Some("pt-BR"));
        assert_eq!(registry.lookup("de").map(LocaleTag::as_str), Some("de-AT"));
        assert_eq!(registry.fallback().as_str(), "pt-BR");
    }

    #[test]
    fn registry_from_builtin_locales_matches_builtin() {
        let locales: Vec<LanguageIdentifier> = SupportedLocale::ALL
            .iter()
            .map(|l| langid(l.as_tag()))
            .collect();
        assert_eq!(SubtagRegistry::from_locales(&locales), SubtagRegistry::builtin());
    }

    #[test]
    fn contains_tag_is_exact() {
        let registry = SubtagRegistry::builtin();
        assert!(registry.contains_tag("es-ES"));
        assert!(!registry.contains_tag("es"));
        assert!(!registry.contains_tag("en-us"));
    }

    #[test]
    fn supported_locale_parses_canonical_tags_only() {
        assert_eq!("en-US".parse::<SupportedLocale>().ok(), Some(SupportedLocale::EnUs));
        assert!(matches!(
            "fr-FR".parse::<SupportedLocale>(),
            Err(Error::UnsupportedLocale(tag)) if tag == "fr-FR"
        ));
        assert!(SupportedLocale::from_tag("pt_BR").is_none());
    }

    #[test]
    fn default_locale_tag_is_pt_br() {
        assert_eq!(LocaleTag::from(SupportedLocale::DEFAULT).to_string(), "pt-BR");
    }

    #[test]
    fn builtin_locale_keeps_its_language_over_regional_siblings() {
        let locales = [langid("en-AU"), langid("en-GB"), langid("en-US"), langid("pt-BR")];
        let registry = SubtagRegistry::from_locales(&locales);

        assert_eq!(registry.lookup("en").map(LocaleTag::as_str), Some("en-US"));
        assert!(registry.contains_tag("en-GB"));
        assert!(registry.contains_tag("en-AU"));
        assert!(!registry.contains_tag("es-ES"));
    }
}
