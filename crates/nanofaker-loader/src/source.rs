use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use nanofaker_core::{LocaleInfo, parse_locale};
use serde_json::Value;

use crate::error::SourceError;

/// Supplies raw (possibly partial) locale data by package.
#[async_trait]
pub trait LocaleSource: Send + Sync {
    /// Returns the source identifier (e.g. `directory`).
    fn name(&self) -> &'static str;

    /// Load the raw data for one locale; a missing package is [`SourceError::NotFound`].
    async fn load(&self, locale: &LocaleInfo) -> Result<Value, SourceError>;
}

/// In-process locale data keyed by normalized identifier.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: HashMap<String, Value>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MemorySource::insert`].
    pub fn with_locale(mut self, locale: &str, data: Value) -> Self {
        self.insert(locale, data);
        self
    }

    /// Register data under the normalized form of `locale`; invalid identifiers are ignored.
    pub fn insert(&mut self, locale: &str, data: Value) {
        if let Ok(info) = parse_locale(locale) {
            self.entries.insert(info.normalized, data);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl LocaleSource for MemorySource {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn load(&self, locale: &LocaleInfo) -> Result<Value, SourceError> {
        self.entries
            .get(&locale.normalized)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                package: locale.package(),
            })
    }
}

/// Reads installed locale packages from `<root>/<package>/locale.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, locale: &LocaleInfo) -> PathBuf {
        self.root.join(locale.package()).join("locale.json")
    }
}

#[async_trait]
impl LocaleSource for DirectorySource {
    fn name(&self) -> &'static str {
        "directory"
    }

    async fn load(&self, locale: &LocaleInfo) -> Result<Value, SourceError> {
        let package = locale.package();
        let path = self.path_for(locale);
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(SourceError::NotFound { package });
            }
            Err(err) => {
                return Err(SourceError::Failed {
                    package,
                    message: format!("{}: {err}", path.display()),
                });
            }
        };

        let value: Value = serde_json::from_str(&contents).map_err(|err| SourceError::Failed {
            package: package.clone(),
            message: format!("invalid json in {}: {err}", path.display()),
        })?;

        Ok(unwrap_named_export(locale, value))
    }
}

/// Packages may wrap their data under the locale name (`{"en_GB": {...}}`)
/// or the language (`{"en": {...}}`); unwrap either form.
fn unwrap_named_export(locale: &LocaleInfo, value: Value) -> Value {
    if let Value::Object(map) = &value
        && map.len() == 1
    {
        for key in [&locale.normalized, &locale.language] {
            if let Some(inner @ Value::Object(_)) = map.get(key.as_str()) {
                return inner.clone();
            }
        }
    }
    value
}
