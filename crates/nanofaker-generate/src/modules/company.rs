use nanofaker_core::{CompanyLocale, LocaleDefinition};

use crate::errors::GenerateResult;
use crate::modules::field::pick_required;
use crate::random::Random;

pub struct CompanyModule<'a> {
    random: &'a mut Random,
    locale: &'a LocaleDefinition,
}

impl<'a> CompanyModule<'a> {
    pub fn new(random: &'a mut Random, locale: &'a LocaleDefinition) -> Self {
        Self { random, locale }
    }

    /// Company name with a legal suffix, e.g. `Acme Corp`.
    pub fn name(&mut self) -> GenerateResult<String> {
        let name = self.pick("name", |company| &company.name)?;
        let suffix = self.suffix()?;
        Ok(format!("{name} {suffix}"))
    }

    pub fn suffix(&mut self) -> GenerateResult<String> {
        self.pick("suffix", |company| &company.suffix)
    }

    pub fn industry(&mut self) -> GenerateResult<String> {
        self.pick("industry", |company| &company.industry)
    }

    /// Adjective, descriptor and noun, e.g. `Innovative cloud-based solutions`.
    pub fn catchphrase(&mut self) -> GenerateResult<String> {
        let adjective = self.pick("adjective", |company| &company.adjective)?;
        let descriptor = self.pick("descriptor", |company| &company.descriptor)?;
        let noun = self.pick("noun", |company| &company.noun)?;
        Ok(format!("{adjective} {descriptor} {noun}"))
    }

    pub fn buzzword(&mut self) -> GenerateResult<String> {
        self.pick("buzzwords", |company| &company.buzzwords)
    }

    /// Buzzword, descriptor and noun, e.g. `synergize digital platforms`.
    pub fn bs(&mut self) -> GenerateResult<String> {
        let buzzword = self.buzzword()?;
        let descriptor = self.pick("descriptor", |company| &company.descriptor)?;
        let noun = self.pick("noun", |company| &company.noun)?;
        Ok(format!("{buzzword} {descriptor} {noun}"))
    }

    fn pick(
        &mut self,
        field: &'static str,
        select: fn(&CompanyLocale) -> &Vec<String>,
    ) -> GenerateResult<String> {
        let locale = self.locale;
        pick_required(self.random, locale, select(&locale.company), field)
    }
}
