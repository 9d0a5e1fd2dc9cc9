use thiserror::Error;

/// Errors reported by a [`crate::LocaleSource`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The package backing the locale is not present.
    #[error("locale package '{package}' not found")]
    NotFound { package: String },
    /// The package exists but could not be read.
    #[error("failed to read locale package '{package}': {message}")]
    Failed { package: String, message: String },
}

/// Errors emitted while resolving a locale.
///
/// `Clone` so that every caller joined on one in-flight load receives the
/// same failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("invalid locale identifier '{0}'")]
    InvalidLocale(String),
    #[error("locale '{locale}' is not a known locale and no data source provides it")]
    LocaleNotFound { locale: String },
    #[error(
        "locale '{locale}' is not loaded; resolve it asynchronously or preload it before synchronous use"
    )]
    NotLoaded { locale: String },
    #[error("failed to load locale '{locale}': {message}")]
    LoadFailed { locale: String, message: String },
    #[error("failed to auto-install locale '{locale}'; install it manually with: {command}")]
    AutoInstallFailed { locale: String, command: String },
    #[error("invalid locale data for '{locale}': {reason}")]
    InvalidLocaleData { locale: String, reason: String },
}

impl From<nanofaker_core::Error> for ResolveError {
    fn from(err: nanofaker_core::Error) -> Self {
        match err {
            nanofaker_core::Error::InvalidLocale(locale) => ResolveError::InvalidLocale(locale),
            nanofaker_core::Error::InvalidData { locale, reason } => {
                ResolveError::InvalidLocaleData { locale, reason }
            }
        }
    }
}
