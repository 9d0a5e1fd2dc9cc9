use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use nanofaker_core::{
    DEFAULT_LOCALE, LocaleDefinition, LocaleInfo, english, fallback_chain, is_known_locale,
    merge_locales, parse_locale,
};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::error::{ResolveError, SourceError};
use crate::installer::{CommandInstaller, PackageInstaller, missing_locale_hint};
use crate::options::LoaderOptions;
use crate::source::LocaleSource;

type LoadOutcome = Result<Arc<LocaleDefinition>, ResolveError>;

/// One pending load shared by every caller asking for the same key.
#[derive(Default)]
struct InFlight {
    outcome: OnceCell<LoadOutcome>,
}

#[derive(Default)]
struct ResolverState {
    cache: HashMap<String, Arc<LocaleDefinition>>,
    loading: HashMap<String, Arc<InFlight>>,
}

/// Resolves locale identifiers to merged, cached definitions.
///
/// At most one load per normalized key is in flight; concurrent callers join
/// it and observe the same `Arc` (or the same error). Failed loads leave no
/// cache entry, so a later call retries.
pub struct LocaleResolver {
    source: Arc<dyn LocaleSource>,
    installer: Arc<dyn PackageInstaller>,
    options: LoaderOptions,
    state: Mutex<ResolverState>,
}

/// Outcome of [`LocaleResolver::preload`], in input order.
#[derive(Debug, Clone, Default)]
pub struct PreloadReport {
    pub loaded: Vec<String>,
    pub failed: Vec<(String, ResolveError)>,
}

impl PreloadReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// First failure, for callers that want all-or-nothing semantics.
    pub fn into_result(self) -> Result<(), ResolveError> {
        match self.failed.into_iter().next() {
            Some((_, err)) => Err(err),
            None => Ok(()),
        }
    }
}

impl LocaleResolver {
    pub fn new(source: Arc<dyn LocaleSource>, options: LoaderOptions) -> Self {
        Self {
            source,
            installer: Arc::new(CommandInstaller::from_current_dir()),
            options,
            state: Mutex::new(ResolverState::default()),
        }
    }

    pub fn with_installer(mut self, installer: Arc<dyn PackageInstaller>) -> Self {
        self.installer = installer;
        self
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Resolve a locale, loading and merging it on first use.
    pub async fn resolve(&self, locale: &str) -> Result<Arc<LocaleDefinition>, ResolveError> {
        let info = parse_locale(locale)?;
        if info.normalized == DEFAULT_LOCALE {
            return Ok(english());
        }
        let key = info.normalized.clone();

        let flight = {
            let mut state = self.lock();
            if let Some(cached) = state.cache.get(&key) {
                debug!(event = "locale_cache_hit", locale = %key);
                return Ok(Arc::clone(cached));
            }
            match state.loading.get(&key) {
                Some(pending) => {
                    debug!(event = "locale_join_pending", locale = %key);
                    Arc::clone(pending)
                }
                None => {
                    let pending = Arc::new(InFlight::default());
                    state.loading.insert(key.clone(), Arc::clone(&pending));
                    pending
                }
            }
        };

        let outcome = flight
            .outcome
            .get_or_init(|| self.load_with_fallback(&info))
            .await
            .clone();

        // A flight no longer registered was dropped by `clear_cache`.
        let mut state = self.lock();
        if state
            .loading
            .get(&key)
            .is_some_and(|current| Arc::ptr_eq(current, &flight))
        {
            state.loading.remove(&key);
            if let Ok(definition) = &outcome {
                state
                    .cache
                    .entry(key)
                    .or_insert_with(|| Arc::clone(definition));
            }
        }
        outcome
    }

    /// Return an already-resolved locale without loading anything.
    pub fn resolve_sync(&self, locale: &str) -> Result<Arc<LocaleDefinition>, ResolveError> {
        let info = parse_locale(locale)?;
        if info.normalized == DEFAULT_LOCALE {
            return Ok(english());
        }
        self.lock()
            .cache
            .get(&info.normalized)
            .cloned()
            .ok_or_else(|| ResolveError::NotLoaded {
                locale: locale.to_string(),
            })
    }

    pub fn is_cached(&self, locale: &str) -> bool {
        match parse_locale(locale) {
            Ok(info) if info.normalized == DEFAULT_LOCALE => true,
            Ok(info) => self.lock().cache.contains_key(&info.normalized),
            Err(_) => false,
        }
    }

    /// Resolve every identifier concurrently. A failing identifier does not
    /// stop the others; each outcome is reported.
    pub async fn preload<I, S>(self: &Arc<Self>, locales: I) -> PreloadReport
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let handles: Vec<_> = locales
            .into_iter()
            .map(|locale| {
                let locale = locale.into();
                let resolver = Arc::clone(self);
                let task_locale = locale.clone();
                let handle =
                    tokio::spawn(async move { resolver.resolve(&task_locale).await.map(|_| ()) });
                (locale, handle)
            })
            .collect();

        let mut report = PreloadReport::default();
        for (locale, handle) in handles {
            let outcome = handle.await.unwrap_or_else(|err| {
                Err(ResolveError::LoadFailed {
                    locale: locale.clone(),
                    message: format!("preload task failed: {err}"),
                })
            });
            match outcome {
                Ok(()) => report.loaded.push(locale),
                Err(err) => {
                    warn!(event = "locale_preload_failed", locale = %locale, error = %err);
                    report.failed.push((locale, err));
                }
            }
        }
        info!(
            event = "locale_preload_finished",
            loaded = report.loaded.len(),
            failed = report.failed.len()
        );
        report
    }

    /// Drop every cached and pending entry.
    pub fn clear_cache(&self) {
        let mut state = self.lock();
        state.cache.clear();
        state.loading.clear();
    }

    fn lock(&self) -> MutexGuard<'_, ResolverState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn load_with_fallback(&self, info: &LocaleInfo) -> LoadOutcome {
        let chain = fallback_chain(&info.normalized)?;
        info!(
            event = "locale_loading",
            locale = %info.normalized,
            source = self.source.name(),
            chain = %chain.join(" -> ")
        );

        let primary = match self.load_entry(info).await {
            Ok(primary) => primary,
            Err(err) if info.is_variant() && is_unavailable(&err) => {
                return self.load_base_instead(info, err).await;
            }
            Err(err) => return Err(err),
        };
        let data = if info.is_variant() {
            match self.load_base(&info.base()).await {
                Ok(base) => {
                    debug!(
                        event = "locale_merged",
                        locale = %info.normalized,
                        base = %info.language
                    );
                    merge_locales(&base, &primary)
                }
                Err(err) => {
                    warn!(
                        event = "locale_base_unavailable",
                        locale = %info.normalized,
                        base = %info.language,
                        error = %err
                    );
                    primary
                }
            }
        } else {
            primary
        };

        let definition = LocaleDefinition::from_value(&info.normalized, data)?;
        info!(event = "locale_loaded", locale = %info.normalized, title = %definition.title);
        Ok(Arc::new(definition))
    }

    /// Serve a missing variant from its base. The variant's error wins when
    /// the base is missing too.
    async fn load_base_instead(&self, info: &LocaleInfo, variant_err: ResolveError) -> LoadOutcome {
        let base = info.base();
        let data = match self.load_base(&base).await {
            Ok(data) => data,
            Err(base_err) => {
                debug!(
                    event = "locale_base_unavailable",
                    locale = %info.normalized,
                    base = %base.normalized,
                    error = %base_err
                );
                return Err(variant_err);
            }
        };
        warn!(
            event = "locale_variant_unavailable",
            locale = %info.normalized,
            base = %base.normalized,
            error = %variant_err
        );
        let definition = LocaleDefinition::from_value(&info.normalized, data)?;
        info!(event = "locale_loaded", locale = %info.normalized, title = %definition.title);
        Ok(Arc::new(definition))
    }

    /// The bundled default backs its own variants when no package provides it.
    async fn load_base(&self, base: &LocaleInfo) -> Result<Value, ResolveError> {
        if base.normalized != DEFAULT_LOCALE {
            return self.load_entry(base).await;
        }
        match self.source.load(base).await {
            Ok(value) => Ok(value),
            Err(err) => {
                debug!(event = "locale_base_bundled", locale = %base.normalized, reason = %err);
                Ok(english().to_value())
            }
        }
    }

    async fn load_entry(&self, info: &LocaleInfo) -> Result<Value, ResolveError> {
        match self.source.load(info).await {
            Ok(value) => Ok(value),
            Err(SourceError::NotFound { package }) => self.handle_missing(info, &package).await,
            Err(err @ SourceError::Failed { .. }) => Err(ResolveError::LoadFailed {
                locale: info.full.clone(),
                message: err.to_string(),
            }),
        }
    }

    async fn handle_missing(
        &self,
        info: &LocaleInfo,
        package: &str,
    ) -> Result<Value, ResolveError> {
        if !is_known_locale(&info.normalized) {
            return Err(ResolveError::LocaleNotFound {
                locale: info.full.clone(),
            });
        }

        if !self.options.auto_install_locales {
            return Err(ResolveError::LoadFailed {
                locale: info.full.clone(),
                message: missing_locale_hint(self.installer.as_ref(), package),
            });
        }

        info!(event = "locale_install_started", locale = %info.normalized, package = %package);
        let installer = Arc::clone(&self.installer);
        let install_package = package.to_string();
        let installed = tokio::task::spawn_blocking(move || installer.install(&install_package))
            .await
            .unwrap_or(false);
        if !installed {
            return Err(ResolveError::AutoInstallFailed {
                locale: info.full.clone(),
                command: self.installer.install_command(package),
            });
        }

        self.source
            .load(info)
            .await
            .map_err(|err| ResolveError::LoadFailed {
                locale: info.full.clone(),
                message: format!(
                    "still unavailable after installation ({err}); install it manually with: {}",
                    self.installer.install_command(package)
                ),
            })
    }
}

/// Failures that mean "no data for this identifier", as opposed to bad data.
fn is_unavailable(err: &ResolveError) -> bool {
    matches!(
        err,
        ResolveError::LocaleNotFound { .. }
            | ResolveError::LoadFailed { .. }
            | ResolveError::AutoInstallFailed { .. }
    )
}
