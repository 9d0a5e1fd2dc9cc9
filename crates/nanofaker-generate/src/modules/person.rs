use nanofaker_core::LocaleDefinition;

use crate::errors::{GenerateError, GenerateResult};
use crate::modules::field::pick_required;
use crate::random::Random;

/// Name pool for [`PersonModule::first_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Neutral,
}

impl Gender {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            "neutral" | "n" => Some(Self::Neutral),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FullNameOptions {
    pub prefix: bool,
    pub suffix: bool,
    pub gender: Option<Gender>,
}

pub struct PersonModule<'a> {
    random: &'a mut Random,
    locale: &'a LocaleDefinition,
}

impl<'a> PersonModule<'a> {
    pub fn new(random: &'a mut Random, locale: &'a LocaleDefinition) -> Self {
        Self { random, locale }
    }

    /// First name from the requested pool, or from every pool combined.
    pub fn first_name(&mut self, gender: Option<Gender>) -> GenerateResult<String> {
        match gender {
            Some(Gender::Male) => self.first_name_male(),
            Some(Gender::Female) => self.first_name_female(),
            Some(Gender::Neutral) => self.first_name_neutral(),
            None => {
                let person = &self.locale_ref().person;
                let pools = [
                    person.first_name_male.as_slice(),
                    person.first_name_female.as_slice(),
                    person.first_name_neutral.as_slice(),
                ];
                self.pick_across(&pools, "first_name")
            }
        }
    }

    pub fn first_name_male(&mut self) -> GenerateResult<String> {
        pick_required(
            self.random,
            self.locale,
            &self.locale.person.first_name_male,
            "first_name_male",
        )
    }

    pub fn first_name_female(&mut self) -> GenerateResult<String> {
        pick_required(
            self.random,
            self.locale,
            &self.locale.person.first_name_female,
            "first_name_female",
        )
    }

    /// Locales without neutral names draw from the male and female pools.
    pub fn first_name_neutral(&mut self) -> GenerateResult<String> {
        let person = &self.locale_ref().person;
        if !person.first_name_neutral.is_empty() {
            return pick_required(
                self.random,
                self.locale,
                &person.first_name_neutral,
                "first_name_neutral",
            );
        }
        let pools = [
            person.first_name_male.as_slice(),
            person.first_name_female.as_slice(),
        ];
        self.pick_across(&pools, "first_name_neutral")
    }

    pub fn last_name(&mut self) -> GenerateResult<String> {
        pick_required(
            self.random,
            self.locale,
            &self.locale.person.last_name,
            "last_name",
        )
    }

    pub fn full_name(&mut self, options: FullNameOptions) -> GenerateResult<String> {
        let mut parts = Vec::with_capacity(4);
        if options.prefix {
            parts.push(self.prefix()?);
        }
        parts.push(self.first_name(options.gender)?);
        parts.push(self.last_name()?);
        if options.suffix {
            parts.push(self.suffix()?);
        }
        Ok(parts.join(" "))
    }

    pub fn prefix(&mut self) -> GenerateResult<String> {
        pick_required(
            self.random,
            self.locale,
            &self.locale.person.prefix,
            "prefix",
        )
    }

    pub fn suffix(&mut self) -> GenerateResult<String> {
        pick_required(
            self.random,
            self.locale,
            &self.locale.person.suffix,
            "suffix",
        )
    }

    pub fn gender(&mut self) -> GenerateResult<String> {
        pick_required(
            self.random,
            self.locale,
            &self.locale.person.gender,
            "gender",
        )
    }

    pub fn job_title(&mut self) -> GenerateResult<String> {
        pick_required(
            self.random,
            self.locale,
            &self.locale.person.job_title,
            "job_title",
        )
    }

    fn locale_ref(&self) -> &'a LocaleDefinition {
        self.locale
    }

    /// Uniform pick over the concatenation of `pools` without copying them.
    fn pick_across(&mut self, pools: &[&[String]], field: &'static str) -> GenerateResult<String> {
        let total: usize = pools.iter().map(|pool| pool.len()).sum();
        if total == 0 {
            return Err(GenerateError::MissingData {
                locale: self.locale.title.clone(),
                field,
            });
        }
        let mut index = self.random.int(0, total as i64 - 1)? as usize;
        for pool in pools {
            if index < pool.len() {
                return Ok(pool[index].clone());
            }
            index -= pool.len();
        }
        Err(GenerateError::MissingData {
            locale: self.locale.title.clone(),
            field,
        })
    }
}

#[cfg(test)]
mod tests {
    use nanofaker_core::{LocaleDefinition, PersonLocale};

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn locale() -> LocaleDefinition {
        LocaleDefinition {
            title: "Test".to_string(),
            person: PersonLocale {
                first_name_male: strings(&["Adam"]),
                first_name_female: strings(&["Beth"]),
                last_name: strings(&["Stone"]),
                prefix: strings(&["Dr."]),
                suffix: strings(&["III"]),
                ..PersonLocale::default()
            },
            ..LocaleDefinition::default()
        }
    }

    #[test]
    fn neutral_names_fall_back_to_gendered_pools() {
        let locale = locale();
        let mut random = Random::seeded(11);
        let mut person = PersonModule::new(&mut random, &locale);
        for _ in 0..20 {
            let name = person.first_name_neutral().unwrap();
            assert!(name == "Adam" || name == "Beth");
        }
    }

    #[test]
    fn full_name_orders_prefix_and_suffix() {
        let locale = locale();
        let mut random = Random::seeded(4);
        let mut person = PersonModule::new(&mut random, &locale);
        let name = person
            .full_name(FullNameOptions {
                prefix: true,
                suffix: true,
                gender: Some(Gender::Female),
            })
            .unwrap();
        assert_eq!(name, "Dr. Beth Stone III");
    }

    #[test]
    fn empty_pool_reports_missing_field() {
        let locale = locale();
        let mut random = Random::seeded(4);
        let err = PersonModule::new(&mut random, &locale)
            .job_title()
            .unwrap_err();
        assert_eq!(
            err,
            GenerateError::MissingData {
                locale: "Test".to_string(),
                field: "job_title"
            }
        );
    }

    #[test]
    fn gender_names_parse_loosely() {
        assert_eq!(Gender::parse("Female"), Some(Gender::Female));
        assert_eq!(Gender::parse(" m "), Some(Gender::Male));
        assert_eq!(Gender::parse("other"), None);
    }
}
