// SPDX-License-Identifier: MPL-2.0
//! `folio_i18n` decides which locale the portfolio site starts in and builds
//! the translation configuration handed to the rendering layer.
//!
//! Resolution order: stored user preference, then the first platform locale
//! mapped by language subtag, then `pt-BR`.

#![doc(html_root_url = "https://docs.rs/folio_i18n/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod sources;
