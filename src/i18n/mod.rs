// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the site.
//!
//! This module loads the Fluent catalogs and assembles the translation
//! configuration consumed by the rendering layer. Message lookup and
//! formatting are left to that layer.
//!
//! # Features
//!
//! - Embedded `.ftl` catalogs, or a directory of them for custom builds
//! - Locale-subtag registry derived from the catalogs that were found
//! - Fallback to `pt-BR` when the initial locale has no catalog

pub mod fluent;
pub mod translation;

pub use fluent::{Catalog, CatalogLoader};
pub use translation::TranslationConfig;
