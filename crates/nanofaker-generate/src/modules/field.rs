use nanofaker_core::LocaleDefinition;

use crate::errors::{GenerateError, GenerateResult};
use crate::random::Random;

/// Samples for one field: the locale's own list when it has one, otherwise
/// the built-in defaults.
#[derive(Debug, Clone, Copy)]
pub enum Field<'a> {
    Locale(&'a [String]),
    Builtin(&'static [&'static str]),
}

impl<'a> Field<'a> {
    pub fn resolve(overrides: Option<&'a [String]>, defaults: &'static [&'static str]) -> Self {
        match overrides {
            Some(values) if !values.is_empty() => Field::Locale(values),
            _ => Field::Builtin(defaults),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Field::Locale(values) => values.len(),
            Field::Builtin(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Field::Builtin(_))
    }

    pub fn pick(&self, random: &mut Random) -> GenerateResult<String> {
        match self {
            Field::Locale(values) => random.pick(values).cloned(),
            Field::Builtin(values) => random.pick(values).map(|value| value.to_string()),
        }
    }
}

/// Pick from a required locale list, naming the field when it is empty.
pub(crate) fn pick_required(
    random: &mut Random,
    locale: &LocaleDefinition,
    values: &[String],
    field: &'static str,
) -> GenerateResult<String> {
    random.pick(values).cloned().map_err(|err| match err {
        GenerateError::EmptyInput => GenerateError::MissingData {
            locale: locale.title.clone(),
            field,
        },
        other => other,
    })
}

/// [`Field::resolve`] over a required section list.
pub(crate) fn pick_or_default(
    random: &mut Random,
    values: &[String],
    defaults: &'static [&'static str],
) -> GenerateResult<String> {
    Field::resolve(Some(values), defaults).pick(random)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_values_win_over_defaults() {
        let values = vec!["Boulevard".to_string()];
        let field = Field::resolve(Some(&values), &["Street"]);
        assert!(!field.is_builtin());
        let mut random = Random::seeded(1);
        assert_eq!(field.pick(&mut random).unwrap(), "Boulevard");
    }

    #[test]
    fn empty_or_missing_values_use_defaults() {
        let empty: Vec<String> = Vec::new();
        assert!(Field::resolve(Some(&empty), &["Street"]).is_builtin());
        assert!(Field::resolve(None, &["Street"]).is_builtin());
        assert_eq!(Field::resolve(None, &["Street"]).len(), 1);
    }

    #[test]
    fn empty_required_list_names_the_field() {
        let locale = LocaleDefinition {
            title: "Empty".to_string(),
            ..LocaleDefinition::default()
        };
        let mut random = Random::seeded(1);
        let err = pick_required(&mut random, &locale, &[], "city").unwrap_err();
        assert_eq!(
            err,
            GenerateError::MissingData {
                locale: "Empty".to_string(),
                field: "city"
            }
        );
    }
}
