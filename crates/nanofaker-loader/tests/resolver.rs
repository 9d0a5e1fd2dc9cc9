use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use nanofaker_core::LocaleInfo;
use nanofaker_loader::{
    LoaderOptions, LocaleResolver, LocaleSource, PackageInstaller, ResolveError, SourceError,
};
use serde_json::{Value, json};

#[derive(Clone, Default)]
struct SharedSource {
    entries: Arc<Mutex<HashMap<String, Value>>>,
    loads: Arc<Mutex<Vec<String>>>,
    delay: Duration,
}

impl SharedSource {
    fn with(self, locale: &str, data: Value) -> Self {
        self.put(locale, data);
        self
    }

    fn put(&self, locale: &str, data: Value) {
        self.entries
            .lock()
            .expect("entries lock")
            .insert(locale.to_string(), data);
    }

    fn loads_of(&self, locale: &str) -> usize {
        self.loads
            .lock()
            .expect("loads lock")
            .iter()
            .filter(|loaded| loaded.as_str() == locale)
            .count()
    }
}

#[async_trait]
impl LocaleSource for SharedSource {
    fn name(&self) -> &'static str {
        "shared"
    }

    async fn load(&self, locale: &LocaleInfo) -> Result<Value, SourceError> {
        self.loads
            .lock()
            .expect("loads lock")
            .push(locale.normalized.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.entries
            .lock()
            .expect("entries lock")
            .get(&locale.normalized)
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                package: locale.package(),
            })
    }
}

/// Installer that "installs" by publishing prepared data into the source.
struct FakeInstaller {
    source: SharedSource,
    available: HashMap<String, (String, Value)>,
    succeed: bool,
    calls: AtomicUsize,
}

impl FakeInstaller {
    fn new(source: &SharedSource, succeed: bool) -> Self {
        Self {
            source: source.clone(),
            available: HashMap::new(),
            succeed,
            calls: AtomicUsize::new(0),
        }
    }

    fn offering(mut self, package: &str, locale: &str, data: Value) -> Self {
        self.available
            .insert(package.to_string(), (locale.to_string(), data));
        self
    }
}

impl PackageInstaller for FakeInstaller {
    fn install(&self, package: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some((locale, data)) = self.available.get(package) {
            self.source.put(locale, data.clone());
        }
        self.succeed
    }

    fn install_command(&self, package: &str) -> String {
        format!("bun add {package}")
    }
}

fn spanish() -> Value {
    json!({
        "title": "Spanish",
        "person": {"firstNameMale": ["Juan"], "lastName": ["García"]},
        "address": {"city": ["Madrid"]},
        "phone": {"formats": ["+34 ### ### ###"]}
    })
}

fn resolver(source: &SharedSource, auto_install: bool) -> LocaleResolver {
    let installer = Arc::new(FakeInstaller::new(source, false));
    LocaleResolver::new(
        Arc::new(source.clone()),
        LoaderOptions {
            auto_install_locales: auto_install,
        },
    )
    .with_installer(installer)
}

#[tokio::test]
async fn concurrent_requests_share_one_load() {
    let source = SharedSource {
        delay: Duration::from_millis(20),
        ..SharedSource::default()
    }
    .with("es", spanish());
    let resolver = resolver(&source, false);

    let (first, second) = tokio::join!(resolver.resolve("es"), resolver.resolve("es"));
    let first = first.expect("first resolve");
    let second = second.expect("second resolve");

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(source.loads_of("es"), 1);
    assert_eq!(first.title, "Spanish");
}

#[tokio::test]
async fn concurrent_failures_share_one_error() {
    let source = SharedSource {
        delay: Duration::from_millis(20),
        ..SharedSource::default()
    };
    let resolver = resolver(&source, false);

    let (first, second) = tokio::join!(resolver.resolve("fr"), resolver.resolve("fr"));
    let first = first.expect_err("fr is not installed");
    assert_eq!(Some(first), second.err());
    assert_eq!(source.loads_of("fr"), 1);
}

#[tokio::test]
async fn variant_replaces_base_lists() {
    let source = SharedSource::default()
        .with("en", json!({"title": "English", "address": {"city": ["NYC"]}}))
        .with(
            "en_US",
            json!({"title": "English (US)", "address": {"city": ["Austin"]}}),
        );
    let resolver = resolver(&source, false);

    let locale = resolver.resolve("en_US").await.expect("resolve en_US");
    assert_eq!(locale.title, "English (US)");
    assert_eq!(locale.address.city, vec!["Austin".to_string()]);
    assert!(locale.person.last_name.is_empty());
}

#[tokio::test]
async fn variant_inherits_untouched_base_sections() {
    let source = SharedSource::default().with("es", spanish()).with(
        "es_MX",
        json!({"title": "Spanish (Mexico)", "address": {"city": ["Guadalajara"]}}),
    );
    let resolver = resolver(&source, false);

    let locale = resolver.resolve("es-MX").await.expect("resolve es-MX");
    assert_eq!(locale.title, "Spanish (Mexico)");
    assert_eq!(locale.address.city, vec!["Guadalajara".to_string()]);
    assert_eq!(locale.person.first_name_male, vec!["Juan".to_string()]);
    assert_eq!(locale.phone.formats, vec!["+34 ### ### ###".to_string()]);
}

#[tokio::test]
async fn english_variant_falls_back_to_bundled_base() {
    let source = SharedSource::default().with(
        "en_GB",
        json!({"title": "English (United Kingdom)", "address": {"city": ["London"]}}),
    );
    let resolver = resolver(&source, false);

    let locale = resolver.resolve("en_GB").await.expect("resolve en_GB");
    assert_eq!(locale.address.city, vec!["London".to_string()]);
    assert!(!locale.person.last_name.is_empty());
}

#[tokio::test]
async fn variant_without_base_is_used_alone() {
    let source = SharedSource::default().with(
        "pt_BR",
        json!({"title": "Portuguese (Brazil)", "address": {"city": ["Recife"]}}),
    );
    let resolver = resolver(&source, false);

    let locale = resolver.resolve("pt_BR").await.expect("resolve pt_BR");
    assert_eq!(locale.title, "Portuguese (Brazil)");
    assert!(locale.person.first_name_male.is_empty());
    assert!(resolver.is_cached("pt-br"));
}

#[tokio::test]
async fn missing_variant_is_served_by_its_base() {
    let source = SharedSource::default().with("es", spanish());
    let resolver = resolver(&source, false);

    let mexico = resolver.resolve("es_MX").await.expect("es_MX via es");
    assert_eq!(mexico.title, "Spanish");
    assert_eq!(mexico.address.city, vec!["Madrid".to_string()]);
    assert!(resolver.is_cached("es-mx"));

    let argentina = resolver.resolve("es_AR").await.expect("unlisted variant via es");
    assert_eq!(argentina.title, "Spanish");
    assert_eq!(source.loads_of("es_AR"), 1);
}

#[tokio::test]
async fn missing_variant_and_base_report_the_variant() {
    let source = SharedSource::default();
    let resolver = resolver(&source, false);

    let err = resolver.resolve("es_MX").await.expect_err("nothing installed");
    let ResolveError::LoadFailed { locale, message } = err else {
        panic!("expected LoadFailed, got {err:?}");
    };
    assert_eq!(locale, "es_MX");
    assert!(message.contains("@nanofaker/locale-es-mx"));
    assert_eq!(source.loads_of("es"), 1);
    assert!(!resolver.is_cached("es_MX"));

    let err = resolver.resolve("es_AR").await.expect_err("nothing installed");
    assert_eq!(
        err,
        ResolveError::LocaleNotFound {
            locale: "es_AR".to_string()
        }
    );
}

#[tokio::test]
async fn unknown_locale_fails_without_cache_entry() {
    let source = SharedSource::default();
    let resolver = resolver(&source, true);

    let err = resolver.resolve("xx").await.expect_err("xx is unknown");
    assert_eq!(
        err,
        ResolveError::LocaleNotFound {
            locale: "xx".to_string()
        }
    );
    assert!(!resolver.is_cached("xx"));
    assert!(matches!(
        resolver.resolve_sync("xx"),
        Err(ResolveError::NotLoaded { .. })
    ));
}

#[tokio::test]
async fn missing_package_names_manual_commands() {
    let source = SharedSource::default();
    let resolver = resolver(&source, false);

    let err = resolver.resolve("fr").await.expect_err("fr is not installed");
    let ResolveError::LoadFailed { locale, message } = err else {
        panic!("expected LoadFailed, got {err:?}");
    };
    assert_eq!(locale, "fr");
    assert!(message.contains("bun add @nanofaker/locale-fr"));
    assert!(message.contains("@nanofaker/locale-{af,ar,"));
}

#[tokio::test]
async fn auto_install_then_retry() {
    let source = SharedSource::default();
    let installer = Arc::new(FakeInstaller::new(&source, true).offering(
        "@nanofaker/locale-de",
        "de",
        json!({"title": "German"}),
    ));
    let resolver = LocaleResolver::new(
        Arc::new(source.clone()),
        LoaderOptions {
            auto_install_locales: true,
        },
    )
    .with_installer(installer.clone());

    let locale = resolver.resolve("de").await.expect("install and load de");
    assert_eq!(locale.title, "German");
    assert_eq!(installer.calls.load(Ordering::SeqCst), 1);
    assert_eq!(source.loads_of("de"), 2);
}

#[tokio::test]
async fn auto_install_failure_is_reported() {
    let source = SharedSource::default();
    let installer = Arc::new(FakeInstaller::new(&source, false));
    let resolver = LocaleResolver::new(
        Arc::new(source.clone()),
        LoaderOptions {
            auto_install_locales: true,
        },
    )
    .with_installer(installer);

    let err = resolver.resolve("it").await.expect_err("install fails");
    assert_eq!(
        err,
        ResolveError::AutoInstallFailed {
            locale: "it".to_string(),
            command: "bun add @nanofaker/locale-it".to_string(),
        }
    );
    assert!(!resolver.is_cached("it"));
}

#[tokio::test]
async fn install_without_data_still_fails() {
    let source = SharedSource::default();
    let installer = Arc::new(FakeInstaller::new(&source, true));
    let resolver = LocaleResolver::new(
        Arc::new(source.clone()),
        LoaderOptions {
            auto_install_locales: true,
        },
    )
    .with_installer(installer);

    let err = resolver.resolve("nl").await.expect_err("nothing installed");
    let ResolveError::LoadFailed { message, .. } = err else {
        panic!("expected LoadFailed, got {err:?}");
    };
    assert!(message.contains("bun add @nanofaker/locale-nl"));
}

#[tokio::test]
async fn failed_load_can_be_retried() {
    let source = SharedSource::default();
    let resolver = resolver(&source, false);

    assert!(resolver.resolve("es").await.is_err());
    source.put("es", spanish());
    let locale = resolver.resolve("es").await.expect("retry succeeds");
    assert_eq!(locale.title, "Spanish");
    assert_eq!(source.loads_of("es"), 2);
}

#[tokio::test]
async fn sync_resolution_requires_prior_load() {
    let source = SharedSource::default().with("es", spanish());
    let resolver = resolver(&source, false);

    assert_eq!(
        resolver.resolve_sync("es"),
        Err(ResolveError::NotLoaded {
            locale: "es".to_string()
        })
    );
    assert_eq!(resolver.resolve_sync("EN").expect("bundled").title, "English");

    let loaded = resolver.resolve("es").await.expect("resolve es");
    let cached = resolver.resolve_sync("ES").expect("cached es");
    assert!(Arc::ptr_eq(&loaded, &cached));
    assert_eq!(source.loads_of("es"), 1);
}

#[tokio::test]
async fn default_locale_needs_no_source() {
    let source = SharedSource::default();
    let resolver = resolver(&source, false);

    let en = resolver.resolve("en").await.expect("bundled en");
    assert_eq!(en.title, "English");
    assert!(resolver.is_cached("en"));
    assert_eq!(source.loads_of("en"), 0);
}

#[tokio::test]
async fn preload_isolates_failures() {
    let source = SharedSource::default()
        .with("es", spanish())
        .with("fr", json!({"title": "French"}));
    let resolver = Arc::new(resolver(&source, false));

    let report = resolver.preload(["es", "xx", "fr"]).await;
    assert_eq!(report.loaded, vec!["es".to_string(), "fr".to_string()]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "xx");
    assert!(!report.is_success());
    assert!(resolver.is_cached("es"));
    assert!(resolver.is_cached("fr"));
    assert!(!resolver.is_cached("xx"));
}

#[tokio::test]
async fn clear_cache_forces_reload() {
    let source = SharedSource::default().with("es", spanish());
    let resolver = resolver(&source, false);

    resolver.resolve("es").await.expect("first load");
    resolver.clear_cache();
    assert!(!resolver.is_cached("es"));
    resolver.resolve("es").await.expect("second load");
    assert_eq!(source.loads_of("es"), 2);
}

#[tokio::test]
async fn clear_cache_discards_a_load_in_progress() {
    let source = SharedSource {
        delay: Duration::from_millis(50),
        ..SharedSource::default()
    }
    .with("es", spanish());
    let resolver = Arc::new(resolver(&source, false));

    let pending = tokio::spawn({
        let resolver = Arc::clone(&resolver);
        async move { resolver.resolve("es").await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    resolver.clear_cache();

    let locale = pending.await.expect("task").expect("load completes");
    assert_eq!(locale.title, "Spanish");
    assert!(!resolver.is_cached("es"));
}

#[tokio::test]
async fn malformed_data_is_rejected() {
    let source = SharedSource::default().with("tr", json!({"phone": {"formats": 12}}));
    let resolver = resolver(&source, false);

    let err = resolver.resolve("tr").await.expect_err("bad data");
    assert!(matches!(err, ResolveError::InvalidLocaleData { ref locale, .. } if locale == "tr"));
    assert!(!resolver.is_cached("tr"));
}

#[tokio::test]
async fn invalid_identifier_is_rejected() {
    let source = SharedSource::default();
    let resolver = resolver(&source, false);

    let err = resolver.resolve("--").await.expect_err("invalid");
    assert!(matches!(err, ResolveError::InvalidLocale(_)));
}
