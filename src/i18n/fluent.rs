// SPDX-License-Identifier: MPL-2.0
use crate::config::CATALOG_EXTENSION;
use crate::error::{CatalogError, Error, Result};
use crate::locale::LocaleTag;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Parsed translation catalog for one locale.
pub struct Catalog {
    tag: LocaleTag,
    langid: LanguageIdentifier,
    bundle: FluentBundle<FluentResource>,
}

impl Catalog {
    /// Parses Fluent source. Any syntax error rejects the whole catalog.
    pub fn parse(langid: LanguageIdentifier, source: String) -> Result<Self> {
        let tag = LocaleTag::from(&langid);
        let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
            Error::from(CatalogError::Parse {
                locale: tag.to_string(),
                errors: errors.len(),
            })
        })?;

        let mut bundle = FluentBundle::new(vec![langid.clone()]);
        bundle.add_resource(resource).map_err(|errors| {
            Error::from(CatalogError::Parse {
                locale: tag.to_string(),
                errors: errors.len(),
            })
        })?;

        Ok(Self {
            tag,
            langid,
            bundle,
        })
    }

    pub fn tag(&self) -> &LocaleTag {
        &self.tag
    }

    pub fn langid(&self) -> &LanguageIdentifier {
        &self.langid
    }

    pub fn has_message(&self, id: &str) -> bool {
        self.bundle.has_message(id)
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog").field("tag", &self.tag).finish()
    }
}

/// Where catalogs are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CatalogSource {
    Embedded,
    Directory(PathBuf),
}

/// Discovers and parses `<locale>.ftl` catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLoader {
    source: CatalogSource,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::embedded()
    }
}

impl CatalogLoader {
    /// Catalogs compiled into the binary from `assets/i18n/`.
    pub fn embedded() -> Self {
        Self {
            source: CatalogSource::Embedded,
        }
    }

    /// Catalogs read from a directory at load time (custom builds).
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: CatalogSource::Directory(dir.into()),
        }
    }

    /// Loads every catalog, keyed by locale tag.
    pub fn load(&self) -> Result<BTreeMap<LocaleTag, Catalog>> {
        let catalogs = match &self.source {
            CatalogSource::Embedded => load_embedded()?,
            CatalogSource::Directory(dir) => load_dir(dir)?,
        };
        if catalogs.is_empty() {
            let location = match &self.source {
                CatalogSource::Embedded => "embedded assets".to_string(),
                CatalogSource::Directory(dir) => dir.display().to_string(),
            };
            return Err(CatalogError::Empty(location).into());
        }
        debug!(
            "loaded catalogs: {:?}",
            catalogs.keys().map(LocaleTag::as_str).collect::<Vec<_>>()
        );
        Ok(catalogs)
    }
}

/// Parses the locale from a file name like `en-US.ftl`.
fn locale_from_file_name(file_name: &str) -> Option<LanguageIdentifier> {
    let stem = file_name.strip_suffix(CATALOG_EXTENSION)?.strip_suffix('.')?;
    match stem.parse::<LanguageIdentifier>() {
        Ok(langid) => Some(langid),
        Err(_) => {
            warn!("skipping catalog with invalid locale name: {}", file_name);
            None
        }
    }
}

fn load_embedded() -> Result<BTreeMap<LocaleTag, Catalog>> {
    let mut catalogs = BTreeMap::new();
    for file in Asset::iter() {
        let filename = file.as_ref();
        let Some(langid) = locale_from_file_name(filename) else {
            continue;
        };
        let Some(content) = Asset::get(filename) else {
            continue;
        };
        let source = String::from_utf8(content.data.into_owned())
            .map_err(|_| CatalogError::Encoding(langid.to_string()))?;
        let catalog = Catalog::parse(langid, source)?;
        catalogs.insert(catalog.tag().clone(), catalog);
    }
    Ok(catalogs)
}

fn load_dir(dir: &Path) -> Result<BTreeMap<LocaleTag, Catalog>> {
    let mut catalogs = BTreeMap::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(langid) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(locale_from_file_name)
        else {
            continue;
        };
        let bytes = fs::read(&path)?;
        let source =
            String::from_utf8(bytes).map_err(|_| CatalogError::Encoding(langid.to_string()))?;
        let catalog = Catalog::parse(langid, source)?;
        catalogs.insert(catalog.tag().clone(), catalog);
    }
    Ok(catalogs)
}
