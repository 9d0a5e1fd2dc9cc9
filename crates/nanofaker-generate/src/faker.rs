use std::sync::Arc;

use nanofaker_core::{DEFAULT_LOCALE, LocaleDefinition, available_locales, english};
use nanofaker_loader::LocaleResolver;
use tracing::debug;

use crate::errors::GenerateResult;
use crate::modules::{
    AddressModule, CatalogModule, ColorModule, CompanyModule, DateModule, EmailOptions,
    FinanceModule, FullNameOptions, HelpersModule, InternetModule, LoremModule, NumberModule,
    PersonModule, PhoneModule, StringModule,
};
use crate::random::Random;
use crate::registry;

/// Construction options for [`Faker::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakerOptions {
    pub locale: String,
    pub seed: Option<u64>,
}

impl Default for FakerOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            seed: None,
        }
    }
}

impl FakerOptions {
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// One random stream bound to one resolved locale.
///
/// Module accessors borrow the faker mutably, so every draw advances the same
/// stream and a seeded faker replays identically.
#[derive(Debug, Clone)]
pub struct Faker {
    random: Random,
    locale: Arc<LocaleDefinition>,
    locale_id: String,
}

impl Default for Faker {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Faker {
    /// Faker over the bundled default locale.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_locale(DEFAULT_LOCALE, english(), seed)
    }

    pub fn with_locale(
        locale_id: impl Into<String>,
        locale: Arc<LocaleDefinition>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            random: Random::new(seed),
            locale,
            locale_id: locale_id.into(),
        }
    }

    /// Resolve `options.locale` (loading it if needed) and build a faker.
    pub async fn create(resolver: &LocaleResolver, options: &FakerOptions) -> GenerateResult<Self> {
        let locale = resolver.resolve(&options.locale).await?;
        Ok(Self::with_locale(options.locale.clone(), locale, options.seed))
    }

    /// Build a faker from an already-resolved locale without loading.
    pub fn from_cache(resolver: &LocaleResolver, options: &FakerOptions) -> GenerateResult<Self> {
        let locale = resolver.resolve_sync(&options.locale)?;
        Ok(Self::with_locale(options.locale.clone(), locale, options.seed))
    }

    /// Restart the stream from `seed`.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.random = Random::seeded(seed);
        self
    }

    /// Switch locales, loading the new one if needed. The stream is kept.
    pub async fn set_locale(
        &mut self,
        resolver: &LocaleResolver,
        locale_id: &str,
    ) -> GenerateResult<&mut Self> {
        let locale = resolver.resolve(locale_id).await?;
        Ok(self.replace_locale(locale_id, locale))
    }

    /// Switch to a locale that is already cached in `resolver`.
    pub fn set_locale_sync(
        &mut self,
        resolver: &LocaleResolver,
        locale_id: &str,
    ) -> GenerateResult<&mut Self> {
        let locale = resolver.resolve_sync(locale_id)?;
        Ok(self.replace_locale(locale_id, locale))
    }

    pub fn locale_title(&self) -> &str {
        &self.locale.title
    }

    /// Identifier the current locale was requested with.
    pub fn locale_id(&self) -> &str {
        &self.locale_id
    }

    pub fn locale(&self) -> &LocaleDefinition {
        &self.locale
    }

    pub fn random(&mut self) -> &mut Random {
        &mut self.random
    }

    pub fn available_locales() -> Vec<&'static str> {
        available_locales()
    }

    pub fn person(&mut self) -> PersonModule<'_> {
        PersonModule::new(&mut self.random, &self.locale)
    }

    pub fn address(&mut self) -> AddressModule<'_> {
        AddressModule::new(&mut self.random, &self.locale)
    }

    pub fn company(&mut self) -> CompanyModule<'_> {
        CompanyModule::new(&mut self.random, &self.locale)
    }

    pub fn internet(&mut self) -> InternetModule<'_> {
        InternetModule::new(&mut self.random, &self.locale)
    }

    pub fn phone(&mut self) -> PhoneModule<'_> {
        PhoneModule::new(&mut self.random, &self.locale)
    }

    pub fn catalog(&mut self) -> CatalogModule<'_> {
        CatalogModule::new(&mut self.random, &self.locale)
    }

    pub fn color(&mut self) -> ColorModule<'_> {
        ColorModule::new(&mut self.random, &self.locale)
    }

    pub fn number(&mut self) -> NumberModule<'_> {
        NumberModule::new(&mut self.random)
    }

    pub fn string(&mut self) -> StringModule<'_> {
        StringModule::new(&mut self.random)
    }

    pub fn lorem(&mut self) -> LoremModule<'_> {
        LoremModule::new(&mut self.random)
    }

    /// Dates relative to now; chain [`DateModule::at`] for a fixed reference.
    pub fn date(&mut self) -> DateModule<'_> {
        DateModule::new(&mut self.random)
    }

    pub fn finance(&mut self) -> FinanceModule<'_> {
        FinanceModule::new(&mut self.random)
    }

    pub fn helpers(&mut self) -> HelpersModule<'_> {
        HelpersModule::new(&mut self.random)
    }

    /// Shorthand for `person().full_name(..)`.
    pub fn name(&mut self) -> GenerateResult<String> {
        self.person().full_name(FullNameOptions::default())
    }

    /// Shorthand for `internet().email(..)`.
    pub fn email(&mut self) -> GenerateResult<String> {
        self.internet().email(EmailOptions::default())
    }

    /// Generate by name, e.g. `generate("person", "first_name")`.
    pub fn generate(&mut self, category: &str, method: &str) -> GenerateResult<String> {
        registry::lookup(category, method)?.generate(self)
    }

    fn replace_locale(&mut self, locale_id: &str, locale: Arc<LocaleDefinition>) -> &mut Self {
        debug!(event = "faker_locale_changed", from = %self.locale_id, to = %locale_id);
        self.locale = locale;
        self.locale_id = locale_id.to_string();
        self
    }
}
