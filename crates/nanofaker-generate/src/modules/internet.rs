use nanofaker_core::LocaleDefinition;

use crate::errors::GenerateResult;
use crate::modules::field::pick_required;
use crate::modules::person::PersonModule;
use crate::random::Random;

const SAFE_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];
const SEPARATORS: &[&str] = &[".", "_", ""];
const FALLBACK_SLUG: &str = "user";

/// Overrides for the parts of a generated address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailOptions {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub provider: Option<String>,
}

pub struct InternetModule<'a> {
    random: &'a mut Random,
    locale: &'a LocaleDefinition,
}

impl<'a> InternetModule<'a> {
    pub fn new(random: &'a mut Random, locale: &'a LocaleDefinition) -> Self {
        Self { random, locale }
    }

    /// `first.last42`-style handle built from the locale's names.
    pub fn username(&mut self) -> GenerateResult<String> {
        self.username_from(None, None)
    }

    /// Address at one of the locale's free providers unless `provider` is set.
    pub fn email(&mut self, options: EmailOptions) -> GenerateResult<String> {
        let user = self.username_from(options.first_name, options.last_name)?;
        let provider = match options.provider {
            Some(provider) => provider,
            None => self.free_email()?,
        };
        Ok(format!("{user}@{provider}"))
    }

    /// Address on a reserved example domain.
    pub fn safe_email(&mut self) -> GenerateResult<String> {
        let user = self.username()?;
        let domain = self.random.pick(SAFE_DOMAINS)?;
        Ok(format!("{user}@{domain}"))
    }

    /// One of the locale's free email providers, e.g. `gmail.com`.
    pub fn free_email(&mut self) -> GenerateResult<String> {
        let locale = self.locale;
        pick_required(
            self.random,
            locale,
            &locale.internet.free_email,
            "free_email",
        )
    }

    pub fn domain_name(&mut self) -> GenerateResult<String> {
        let word = self.person().last_name()?;
        let locale = self.locale;
        let suffix = pick_required(
            self.random,
            locale,
            &locale.internet.domain_suffix,
            "domain_suffix",
        )?;
        Ok(format!("{}.{suffix}", slug(&word)))
    }

    pub fn url(&mut self) -> GenerateResult<String> {
        let domain = self.domain_name()?;
        Ok(format!("https://www.{domain}"))
    }

    fn username_from(
        &mut self,
        first: Option<String>,
        last: Option<String>,
    ) -> GenerateResult<String> {
        let first = match first {
            Some(first) => first,
            None => self.person().first_name(None)?,
        };
        let last = match last {
            Some(last) => last,
            None => self.person().last_name()?,
        };
        let separator = self.random.pick(SEPARATORS)?;
        let mut handle = format!("{}{separator}{}", slug(&first), slug(&last));
        if self.random.boolean(0.5) {
            handle.push_str(&self.random.int(1, 99)?.to_string());
        }
        Ok(handle)
    }

    fn person(&mut self) -> PersonModule<'_> {
        PersonModule::new(self.random, self.locale)
    }
}

/// Lowercase ASCII alphanumerics of `value`; names without any fall back to
/// a fixed word so addresses stay valid.
fn slug(value: &str) -> String {
    let slug: String = value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use nanofaker_core::english;

    use super::*;

    #[test]
    fn email_uses_given_parts() {
        let locale = english();
        let mut random = Random::seeded(9);
        let email = InternetModule::new(&mut random, &locale)
            .email(EmailOptions {
                first_name: Some("Zoë".to_string()),
                last_name: Some("O'Neil".to_string()),
                provider: Some("mail.test".to_string()),
            })
            .unwrap();
        let (user, provider) = email.split_once('@').unwrap();
        assert_eq!(provider, "mail.test");
        assert!(user.starts_with("zo"));
        assert!(user.contains("oneil"));
    }

    #[test]
    fn safe_email_targets_example_domains() {
        let locale = english();
        let mut random = Random::seeded(12);
        let mut internet = InternetModule::new(&mut random, &locale);
        for _ in 0..20 {
            let email = internet.safe_email().unwrap();
            let domain = email.rsplit_once('@').unwrap().1;
            assert!(SAFE_DOMAINS.contains(&domain));
        }
    }

    #[test]
    fn url_is_https_on_a_known_suffix() {
        let locale = english();
        let mut random = Random::seeded(30);
        let url = InternetModule::new(&mut random, &locale).url().unwrap();
        assert!(url.starts_with("https://www."));
        let suffix = url.rsplit_once('.').unwrap().1;
        assert!(locale.internet.domain_suffix.iter().any(|s| s == suffix));
    }

    #[test]
    fn non_ascii_names_keep_a_usable_slug() {
        assert_eq!(slug("Müller"), "mller");
        assert_eq!(slug("李"), FALLBACK_SLUG);
    }
}
