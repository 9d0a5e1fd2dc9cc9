//! Locale-aware fake data generation for nanofaker.
//!
//! A [`Faker`] owns one [`Random`] stream and one resolved locale; the data
//! modules it hands out are short-lived views over both.

pub mod errors;
pub mod faker;
pub mod modules;
pub mod random;
pub mod registry;

pub use errors::{GenerateError, GenerateResult};
pub use faker::{Faker, FakerOptions};
pub use modules::{
    CardIssuer, Casing, Category, CssFormat, EmailOptions, Field, FullNameOptions, Gender,
};
pub use random::Random;
pub use registry::{MethodEntry, MethodKind, Registry, registry};
