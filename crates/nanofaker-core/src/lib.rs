//! Core contracts and helpers for nanofaker.
//!
//! This crate defines the locale data types, the bundled English locale, and
//! the identifier/merge utilities shared by the loader, the generators and the
//! CLI.

pub mod definition;
pub mod en;
pub mod error;
pub mod locale;
pub mod merge;

pub use definition::{
    AddressLocale, AnimalLocale, BookLocale, CommerceLocale, CompanyLocale, FoodLocale,
    HackerLocale, InternetLocale, LocaleDefinition, MusicLocale, PersonLocale, PhoneLocale,
    ScienceLocale, SportLocale, SystemLocale, VehicleLocale, WordLocale,
};
pub use en::english;
pub use error::{Error, Result};
pub use locale::{
    AVAILABLE_BASE_LOCALES, AVAILABLE_LOCALE_VARIANTS, LocaleInfo, PACKAGE_SCOPE,
    available_locales, fallback_chain, is_known_locale, normalize, package_name, parse_locale,
};
pub use merge::merge_locales;

/// Language served from the bundled definition without any loading step.
pub const DEFAULT_LOCALE: &str = "en";
