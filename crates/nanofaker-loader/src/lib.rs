//! Locale resolution for nanofaker.
//!
//! Maps locale identifiers to ready-to-use [`LocaleDefinition`]s with caching,
//! single-flight loading, base/variant merging and optional installation of
//! missing locale packages.

pub mod error;
pub mod installer;
pub mod options;
pub mod resolver;
pub mod source;

pub use error::{ResolveError, SourceError};
pub use installer::{CommandInstaller, PackageInstaller, PackageManager};
pub use options::LoaderOptions;
pub use resolver::{LocaleResolver, PreloadReport};
pub use source::{DirectorySource, LocaleSource, MemorySource};

pub use nanofaker_core::LocaleDefinition;
