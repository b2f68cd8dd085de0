// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    /// A locale tag that has no catalog or registry entry.
    UnsupportedLocale(String),
}

/// Specific failures while loading Fluent translation catalogs.
#[derive(Debug, Clone)]
pub enum CatalogError {
    /// The `.ftl` file could not be parsed by Fluent.
    Parse { locale: String, errors: usize },

    /// The catalog file is not valid UTF-8.
    Encoding(String),

    /// The fallback locale has no catalog, so no configuration can be built.
    MissingFallback(String),

    /// No `.ftl` files were found at the requested location.
    Empty(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse { locale, errors } => {
                write!(f, "Failed to parse catalog {} ({} errors)", locale, errors)
            }
            CatalogError::Encoding(locale) => {
                write!(f, "Catalog {} is not valid UTF-8", locale)
            }
            CatalogError::MissingFallback(locale) => {
                write!(f, "No catalog for fallback locale {}", locale)
            }
            CatalogError::Empty(location) => write!(f, "No catalogs found in {}", location),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::UnsupportedLocale(tag) => write!(f, "Unsupported locale: {}", tag),
        }
    }
}

impl std::error::Error for Error {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_becomes_config_variant() {
        let parse_err = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn unsupported_locale_names_the_tag() {
        let err = Error::UnsupportedLocale("fr-FR".to_string());
        assert_eq!(format!("{}", err), "Unsupported locale: fr-FR");
    }

    #[test]
    fn catalog_error_display_includes_locale() {
        let err = Error::from(CatalogError::Parse {
            locale: "es-ES".into(),
            errors: 2,
        });
        let text = format!("{}", err);
        assert!(text.contains("es-ES"));
        assert!(text.starts_with("Catalog Error"));
    }
}
