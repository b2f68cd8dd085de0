// SPDX-License-Identifier: MPL-2.0
//! The configuration handed to the rendering layer.

use std::collections::BTreeMap;

use super::fluent::Catalog;
use crate::error::{CatalogError, Result};
use crate::locale::{LocaleTag, SupportedLocale};

/// Initial locale, fallback locale and all catalogs, built once at startup.
///
/// There is no global instance: whatever composes the UI receives this value
/// and keeps it for the lifetime of the process.
#[derive(Debug)]
pub struct TranslationConfig {
    locale: LocaleTag,
    fallback_locale: LocaleTag,
    messages: BTreeMap<LocaleTag, Catalog>,
}

impl TranslationConfig {
    /// Fails if there is no catalog for the fallback locale (`pt-BR`).
    ///
    /// `locale` may name a locale without a catalog (a verbatim stored
    /// preference); lookups then go to the fallback catalog.
    pub fn new(locale: LocaleTag, messages: BTreeMap<LocaleTag, Catalog>) -> Result<Self> {
        let fallback_locale = LocaleTag::from(SupportedLocale::DEFAULT);
        if !messages.contains_key(&fallback_locale) {
            return Err(CatalogError::MissingFallback(fallback_locale.to_string()).into());
        }
        Ok(Self {
            locale,
            fallback_locale,
            messages,
        })
    }

    pub fn locale(&self) -> &LocaleTag {
        &self.locale
    }

    pub fn fallback_locale(&self) -> &LocaleTag {
        &self.fallback_locale
    }

    pub fn messages(&self) -> &BTreeMap<LocaleTag, Catalog> {
        &self.messages
    }

    pub fn catalog(&self, locale: &LocaleTag) -> Option<&Catalog> {
        self.messages.get(locale)
    }

    pub fn has_catalog_for_locale(&self) -> bool {
        self.messages.contains_key(&self.locale)
    }

    /// Catalog for the initial locale, or the fallback catalog.
    pub fn active_catalog(&self) -> &Catalog {
        self.messages
            .get(&self.locale)
            .unwrap_or_else(|| &self.messages[&self.fallback_locale])
    }
}
