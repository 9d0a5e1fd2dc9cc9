use nanofaker_core::{AddressLocale, LocaleDefinition};

use crate::errors::GenerateResult;
use crate::modules::field::{pick_or_default, pick_required};
use crate::random::Random;

const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Place", "Boulevard", "Way",
];
const BUILDING_NUMBERS: &[&str] = &["#", "##", "###", "####"];
const DIRECTIONS: &[&str] = &[
    "North", "East", "South", "West", "Northeast", "Northwest", "Southeast", "Southwest",
];

/// Decimal places used for generated coordinates.
pub const COORDINATE_PRECISION: u32 = 4;

pub struct AddressModule<'a> {
    random: &'a mut Random,
    locale: &'a LocaleDefinition,
}

impl<'a> AddressModule<'a> {
    pub fn new(random: &'a mut Random, locale: &'a LocaleDefinition) -> Self {
        Self { random, locale }
    }

    /// Street name followed by a suffix, e.g. `Main Street`.
    pub fn street(&mut self) -> GenerateResult<String> {
        let name = self.pick("street", |address| &address.street)?;
        let suffix = self.street_suffix()?;
        Ok(format!("{name} {suffix}"))
    }

    pub fn street_suffix(&mut self) -> GenerateResult<String> {
        pick_or_default(
            self.random,
            &self.locale.address.street_suffix,
            STREET_SUFFIXES,
        )
    }

    /// `123 Main Street`, or with `full` the city, state and postal code too.
    pub fn street_address(&mut self, full: bool) -> GenerateResult<String> {
        let number = self.building_number()?;
        let street = self.street()?;
        if !full {
            return Ok(format!("{number} {street}"));
        }
        let city = self.city()?;
        let state = self.state_abbr()?;
        let zip = self.zip_code()?;
        Ok(format!("{number} {street}, {city}, {state} {zip}"))
    }

    pub fn building_number(&mut self) -> GenerateResult<String> {
        let format = pick_or_default(
            self.random,
            &self.locale.address.building_number,
            BUILDING_NUMBERS,
        )?;
        Ok(self.random.fill_template(&format))
    }

    pub fn city(&mut self) -> GenerateResult<String> {
        self.pick("city", |address| &address.city)
    }

    pub fn state(&mut self) -> GenerateResult<String> {
        self.pick("state", |address| &address.state)
    }

    pub fn state_abbr(&mut self) -> GenerateResult<String> {
        self.pick("state_abbr", |address| &address.state_abbr)
    }

    pub fn country(&mut self) -> GenerateResult<String> {
        self.pick("country", |address| &address.country)
    }

    pub fn country_code(&mut self) -> GenerateResult<String> {
        self.pick("country_code", |address| &address.country_code)
    }

    /// Postal code filled from one of the locale's `#`/`?` formats.
    pub fn zip_code(&mut self) -> GenerateResult<String> {
        let format = self.pick("zip_code", |address| &address.zip_code)?;
        Ok(self.random.fill_template(&format))
    }

    pub fn direction(&mut self) -> GenerateResult<String> {
        pick_or_default(self.random, &self.locale.address.direction, DIRECTIONS)
    }

    pub fn latitude(&mut self) -> GenerateResult<f64> {
        self.random.float(-90.0, 90.0, COORDINATE_PRECISION)
    }

    pub fn longitude(&mut self) -> GenerateResult<f64> {
        self.random.float(-180.0, 180.0, COORDINATE_PRECISION)
    }

    fn pick(
        &mut self,
        field: &'static str,
        select: fn(&AddressLocale) -> &Vec<String>,
    ) -> GenerateResult<String> {
        let locale = self.locale;
        pick_required(self.random, locale, select(&locale.address), field)
    }
}

#[cfg(test)]
mod tests {
    use nanofaker_core::english;

    use super::*;

    #[test]
    fn full_street_address_has_city_and_zip() {
        let locale = english();
        let mut random = Random::seeded(21);
        let mut address = AddressModule::new(&mut random, &locale);
        let value = address.street_address(true).unwrap();
        let parts: Vec<&str> = value.split(", ").collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[0].chars().next().unwrap().is_ascii_digit());
    }

    #[test]
    fn missing_suffixes_use_defaults() {
        let locale = LocaleDefinition {
            title: "Bare".to_string(),
            ..LocaleDefinition::default()
        };
        let mut random = Random::seeded(2);
        let mut address = AddressModule::new(&mut random, &locale);
        let suffix = address.street_suffix().unwrap();
        assert!(STREET_SUFFIXES.contains(&suffix.as_str()));
        let number = address.building_number().unwrap();
        assert!(number.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn coordinates_stay_in_range() {
        let locale = english();
        let mut random = Random::seeded(8);
        let mut address = AddressModule::new(&mut random, &locale);
        for _ in 0..100 {
            assert!((-90.0..=90.0).contains(&address.latitude().unwrap()));
            assert!((-180.0..=180.0).contains(&address.longitude().unwrap()));
        }
    }
}
