use thiserror::Error;

/// Core error type shared across nanofaker crates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The identifier cannot be parsed into a language (and region).
    #[error("invalid locale identifier '{0}'")]
    InvalidLocale(String),
    /// Raw locale data does not have the shape of a locale definition.
    #[error("invalid locale data for '{locale}': {reason}")]
    InvalidData { locale: String, reason: String },
}

/// Convenience alias for results returned by nanofaker crates.
pub type Result<T> = std::result::Result<T, Error>;
