use nanofaker_core::LocaleDefinition;

use crate::errors::GenerateResult;
use crate::modules::field::pick_required;
use crate::random::Random;

pub struct PhoneModule<'a> {
    random: &'a mut Random,
    locale: &'a LocaleDefinition,
}

impl<'a> PhoneModule<'a> {
    pub fn new(random: &'a mut Random, locale: &'a LocaleDefinition) -> Self {
        Self { random, locale }
    }

    /// Fill `format` (or one of the locale's formats) replacing `#` with digits.
    pub fn number(&mut self, format: Option<&str>) -> GenerateResult<String> {
        let format = match format {
            Some(format) => format.to_string(),
            None => pick_required(
                self.random,
                self.locale,
                &self.locale.phone.formats,
                "formats",
            )?,
        };
        Ok(self.random.fill_template(&format))
    }
}
