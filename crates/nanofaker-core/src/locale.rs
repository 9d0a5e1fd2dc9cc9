use std::fmt;

use crate::error::{Error, Result};

/// npm-style scope prefixed to every locale package name.
pub const PACKAGE_SCOPE: &str = "@nanofaker/locale-";

/// Base locales that ship as installable packages.
pub const AVAILABLE_BASE_LOCALES: &[&str] = &[
    "af", "ar", "az", "cs", "da", "de", "en", "eo", "es", "fa", "fi", "fr", "he", "hi", "it", "ja",
    "ko", "nl", "no", "pl", "pt", "sv", "tl", "tr", "uk", "zh", "zu",
];

/// Region-specific variants layered on top of a base locale.
pub const AVAILABLE_LOCALE_VARIANTS: &[&str] = &[
    "af_ZA", "de_AT", "de_CH", "de_DE", "en_AU", "en_CA", "en_GB", "en_GH", "en_HK", "en_IE",
    "en_IN", "en_NG", "en_US", "en_ZA", "es_ES", "es_MX", "fr_BE", "fr_CA", "fr_CH", "fr_FR",
    "fr_LU", "fr_SN", "pt_BR", "pt_MZ", "pt_PT", "zh_CN", "zh_TW", "zu_ZA",
];

/// Parsed form of a locale identifier such as `en_US`, `es-MX` or `fr`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleInfo {
    /// Identifier as supplied by the caller.
    pub full: String,
    /// Lowercase language code (e.g. `en`).
    pub language: String,
    /// Uppercase region code, absent for base locales.
    pub region: Option<String>,
    /// Canonical cache key: `en` or `en_US`.
    pub normalized: String,
    /// Lowercase hyphenated package suffix: `en` or `en-us`.
    pub package_name: String,
}

impl LocaleInfo {
    /// Returns `true` when the identifier names a regional variant.
    pub fn is_variant(&self) -> bool {
        self.region.is_some()
    }

    /// Fully scoped package name, e.g. `@nanofaker/locale-en-us`.
    pub fn package(&self) -> String {
        format!("{PACKAGE_SCOPE}{}", self.package_name)
    }

    /// Info for the base language of this locale.
    pub fn base(&self) -> LocaleInfo {
        LocaleInfo {
            full: self.language.clone(),
            language: self.language.clone(),
            region: None,
            normalized: self.language.clone(),
            package_name: self.language.clone(),
        }
    }
}

impl fmt::Display for LocaleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

/// Parse a locale identifier, accepting `-` or `_` as separator in any case.
pub fn parse_locale(locale: &str) -> Result<LocaleInfo> {
    let unified = locale.trim().replace('-', "_");
    let mut parts = unified.split('_');

    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidLocale(locale.to_string()));
    }

    let region = match parts.next() {
        Some(region) if !region.is_empty() && region.chars().all(|c| c.is_ascii_alphanumeric()) => {
            Some(region.to_ascii_uppercase())
        }
        Some(_) => return Err(Error::InvalidLocale(locale.to_string())),
        None => None,
    };

    let (normalized, package_name) = match &region {
        Some(region) => (
            format!("{language}_{region}"),
            format!("{language}-{}", region.to_ascii_lowercase()),
        ),
        None => (language.clone(), language.clone()),
    };

    Ok(LocaleInfo {
        full: locale.to_string(),
        language,
        region,
        normalized,
        package_name,
    })
}

/// Canonical cache key for an identifier.
pub fn normalize(locale: &str) -> Result<String> {
    parse_locale(locale).map(|info| info.normalized)
}

/// Ordered identifiers tried when resolving: the variant first, then its base.
pub fn fallback_chain(locale: &str) -> Result<Vec<String>> {
    let info = parse_locale(locale)?;
    Ok(match info.region {
        Some(_) => vec![info.normalized, info.language],
        None => vec![info.language],
    })
}

/// Scoped package name for an identifier.
pub fn package_name(locale: &str) -> Result<String> {
    parse_locale(locale).map(|info| info.package())
}

/// Base locales followed by variants.
pub fn available_locales() -> Vec<&'static str> {
    AVAILABLE_BASE_LOCALES
        .iter()
        .chain(AVAILABLE_LOCALE_VARIANTS)
        .copied()
        .collect()
}

pub fn is_known_locale(normalized: &str) -> bool {
    AVAILABLE_BASE_LOCALES.contains(&normalized) || AVAILABLE_LOCALE_VARIANTS.contains(&normalized)
}
