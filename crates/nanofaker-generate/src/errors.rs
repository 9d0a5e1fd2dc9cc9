use thiserror::Error;

use nanofaker_loader::ResolveError;

/// Errors emitted while generating values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenerateError {
    #[error("cannot pick from an empty list")]
    EmptyInput,
    #[error("invalid range: max {max} is less than min {min}")]
    InvalidRange { min: String, max: String },
    #[error("locale '{locale}' has no data for '{field}'")]
    MissingData { locale: String, field: &'static str },
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("unknown method '{method}' in category '{category}'")]
    UnknownMethod { category: String, method: String },
    #[error("locale error: {0}")]
    Resolve(#[from] ResolveError),
}

pub type GenerateResult<T> = Result<T, GenerateError>;
