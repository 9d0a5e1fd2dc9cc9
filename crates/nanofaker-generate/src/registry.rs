//! Name-based lookup of every generator method, used by the CLI.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::errors::{GenerateError, GenerateResult};
use crate::faker::Faker;
use crate::modules::helpers::DEFAULT_CARD_FORMAT;
use crate::modules::{
    CATALOG, CatalogField, Casing, Category, EmailOptions, FullNameOptions,
};

pub type MethodFn = fn(&mut Faker) -> GenerateResult<String>;

#[derive(Debug, Clone, Copy)]
pub enum MethodKind {
    Module(MethodFn),
    Catalog(&'static CatalogField),
}

/// One callable generator method.
#[derive(Debug, Clone, Copy)]
pub struct MethodEntry {
    pub category: Category,
    pub name: &'static str,
    pub kind: MethodKind,
}

impl MethodEntry {
    pub fn generate(&self, faker: &mut Faker) -> GenerateResult<String> {
        match self.kind {
            MethodKind::Module(method) => method(faker),
            MethodKind::Catalog(field) => faker.catalog().pick(field),
        }
    }

    /// `category.method`
    pub fn id(&self) -> String {
        format!("{}.{}", self.category, self.name)
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    entries: BTreeMap<Category, Vec<MethodEntry>>,
}

impl Registry {
    pub fn new() -> Self {
        let mut registry = Self::default();
        register_person(&mut registry);
        register_address(&mut registry);
        register_company(&mut registry);
        register_internet(&mut registry);
        register_phone(&mut registry);
        register_number(&mut registry);
        register_string(&mut registry);
        register_lorem(&mut registry);
        register_date(&mut registry);
        register_color(&mut registry);
        register_finance(&mut registry);
        register_helpers(&mut registry);
        for field in CATALOG {
            registry.register(field.category, field.method, MethodKind::Catalog(field));
        }
        registry
    }

    fn register(&mut self, category: Category, name: &'static str, kind: MethodKind) {
        self.entries.entry(category).or_default().push(MethodEntry {
            category,
            name,
            kind,
        });
    }

    fn register_fn(&mut self, category: Category, name: &'static str, method: MethodFn) {
        self.register(category, name, MethodKind::Module(method));
    }

    /// Categories that have at least one method, in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.keys().copied()
    }

    pub fn methods(&self, category: Category) -> &[MethodEntry] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find a method by name. Case, `_` and `-` are ignored, so `firstName`,
    /// `first_name` and `first-name` all match.
    pub fn lookup(&self, category: &str, method: &str) -> GenerateResult<&MethodEntry> {
        let category = Category::parse(category)
            .ok_or_else(|| GenerateError::UnknownCategory(category.to_string()))?;
        let wanted = fold_name(method);
        self.methods(category)
            .iter()
            .find(|entry| fold_name(entry.name) == wanted)
            .ok_or_else(|| GenerateError::UnknownMethod {
                category: category.to_string(),
                method: method.to_string(),
            })
    }
}

/// Process-wide registry, built on first use.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::new)
}

pub fn lookup(category: &str, method: &str) -> GenerateResult<&'static MethodEntry> {
    registry().lookup(category, method)
}

fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn register_person(registry: &mut Registry) {
    use Category::Person;
    registry.register_fn(Person, "first_name", |f| f.person().first_name(None));
    registry.register_fn(Person, "first_name_male", |f| f.person().first_name_male());
    registry.register_fn(Person, "first_name_female", |f| f.person().first_name_female());
    registry.register_fn(Person, "first_name_neutral", |f| f.person().first_name_neutral());
    registry.register_fn(Person, "last_name", |f| f.person().last_name());
    registry.register_fn(Person, "full_name", |f| f.person().full_name(FullNameOptions::default()));
    registry.register_fn(Person, "prefix", |f| f.person().prefix());
    registry.register_fn(Person, "suffix", |f| f.person().suffix());
    registry.register_fn(Person, "gender", |f| f.person().gender());
    registry.register_fn(Person, "job_title", |f| f.person().job_title());
}

fn register_address(registry: &mut Registry) {
    use Category::Address;
    registry.register_fn(Address, "street", |f| f.address().street());
    registry.register_fn(Address, "street_suffix", |f| f.address().street_suffix());
    registry.register_fn(Address, "street_address", |f| f.address().street_address(false));
    registry.register_fn(Address, "full_address", |f| f.address().street_address(true));
    registry.register_fn(Address, "building_number", |f| f.address().building_number());
    registry.register_fn(Address, "city", |f| f.address().city());
    registry.register_fn(Address, "state", |f| f.address().state());
    registry.register_fn(Address, "state_abbr", |f| f.address().state_abbr());
    registry.register_fn(Address, "country", |f| f.address().country());
    registry.register_fn(Address, "country_code", |f| f.address().country_code());
    registry.register_fn(Address, "zip_code", |f| f.address().zip_code());
    registry.register_fn(Address, "direction", |f| f.address().direction());
    registry.register_fn(Address, "latitude", |f| {
        f.address().latitude().map(|value| value.to_string())
    });
    registry.register_fn(Address, "longitude", |f| {
        f.address().longitude().map(|value| value.to_string())
    });
}

fn register_company(registry: &mut Registry) {
    use Category::Company;
    registry.register_fn(Company, "name", |f| f.company().name());
    registry.register_fn(Company, "suffix", |f| f.company().suffix());
    registry.register_fn(Company, "industry", |f| f.company().industry());
    registry.register_fn(Company, "catchphrase", |f| f.company().catchphrase());
    registry.register_fn(Company, "buzzword", |f| f.company().buzzword());
    registry.register_fn(Company, "bs", |f| f.company().bs());
}

fn register_internet(registry: &mut Registry) {
    use Category::Internet;
    registry.register_fn(Internet, "email", |f| f.internet().email(EmailOptions::default()));
    registry.register_fn(Internet, "safe_email", |f| f.internet().safe_email());
    registry.register_fn(Internet, "free_email", |f| f.internet().free_email());
    registry.register_fn(Internet, "username", |f| f.internet().username());
    registry.register_fn(Internet, "domain_name", |f| f.internet().domain_name());
    registry.register_fn(Internet, "url", |f| f.internet().url());
}

fn register_phone(registry: &mut Registry) {
    registry.register_fn(Category::Phone, "number", |f| f.phone().number(None));
}

fn register_number(registry: &mut Registry) {
    use Category::Number;
    registry.register_fn(Number, "int", |f| f.number().int(0, 100).map(|value| value.to_string()));
    registry.register_fn(Number, "float", |f| {
        f.number().float(0.0, 1.0, 2).map(|value| value.to_string())
    });
    registry.register_fn(Number, "binary", |f| Ok(f.number().binary(8)));
    registry.register_fn(Number, "octal", |f| Ok(f.number().octal(3)));
    registry.register_fn(Number, "hex", |f| Ok(f.number().hex(6)));
    registry.register_fn(Number, "digit", |f| Ok(f.number().digit().to_string()));
    registry.register_fn(Number, "digit_not_zero", |f| {
        f.number().digit_not_zero().map(|value| value.to_string())
    });
}

fn register_string(registry: &mut Registry) {
    let category = Category::String;
    registry.register_fn(category, "uuid", |f| Ok(f.string().uuid()));
    registry.register_fn(category, "nanoid", |f| Ok(f.string().nanoid(21)));
    registry.register_fn(category, "alpha", |f| Ok(f.string().alpha(10, Casing::Mixed)));
    registry.register_fn(category, "alphanumeric", |f| {
        Ok(f.string().alphanumeric(10, Casing::Mixed))
    });
    registry.register_fn(category, "numeric", |f| Ok(f.string().numeric(10)));
    registry.register_fn(category, "sample", |f| Ok(f.string().sample(10)));
    registry.register_fn(category, "symbol", |f| Ok(f.string().symbol(5)));
    registry.register_fn(category, "hexadecimal", |f| Ok(f.string().hexadecimal(6, "")));
}

fn register_lorem(registry: &mut Registry) {
    use Category::Lorem;
    registry.register_fn(Lorem, "word", |f| f.lorem().word());
    registry.register_fn(Lorem, "words", |f| f.lorem().words(3));
    registry.register_fn(Lorem, "sentence", |f| f.lorem().sentence(None));
    registry.register_fn(Lorem, "sentences", |f| f.lorem().sentences(3, " "));
    registry.register_fn(Lorem, "paragraph", |f| f.lorem().paragraph(None));
    registry.register_fn(Lorem, "paragraphs", |f| f.lorem().paragraphs(3, "\n\n"));
    registry.register_fn(Lorem, "text", |f| f.lorem().text(200));
    registry.register_fn(Lorem, "slug", |f| f.lorem().slug(3));
    registry.register_fn(Lorem, "lines", |f| f.lorem().lines(3));
}

fn register_date(registry: &mut Registry) {
    use Category::Date;
    registry.register_fn(Date, "past", |f| f.date().past(1).map(|value| value.to_rfc3339()));
    registry.register_fn(Date, "future", |f| f.date().future(1).map(|value| value.to_rfc3339()));
    registry.register_fn(Date, "recent", |f| f.date().recent(1).map(|value| value.to_rfc3339()));
    registry.register_fn(Date, "soon", |f| f.date().soon(1).map(|value| value.to_rfc3339()));
    registry.register_fn(Date, "date_time", |f| {
        f.date().date_time().map(|value| value.to_rfc3339())
    });
    registry.register_fn(Date, "month", |f| f.date().month());
    registry.register_fn(Date, "weekday", |f| f.date().weekday());
}

fn register_color(registry: &mut Registry) {
    use Category::Color;
    registry.register_fn(Color, "hex", |f| f.color().hex("#"));
    registry.register_fn(Color, "rgb", |f| f.color().rgb());
    registry.register_fn(Color, "rgba", |f| f.color().rgba());
    registry.register_fn(Color, "hsl", |f| f.color().hsl());
    registry.register_fn(Color, "hsla", |f| f.color().hsla());
    registry.register_fn(Color, "css", |f| f.color().css(None));
    registry.register_fn(Color, "name", |f| f.color().name());
}

fn register_finance(registry: &mut Registry) {
    use Category::Finance;
    registry.register_fn(Finance, "amount", |f| f.finance().amount(0.0, 10_000.0, 2, ""));
    registry.register_fn(Finance, "account", |f| Ok(f.finance().account(8)));
    registry.register_fn(Finance, "account_name", |f| f.finance().account_name());
    registry.register_fn(Finance, "routing_number", |f| Ok(f.finance().routing_number()));
    registry.register_fn(Finance, "credit_card_number", |f| {
        f.finance().credit_card_number(None, true)
    });
    registry.register_fn(Finance, "cvv", |f| Ok(f.finance().cvv()));
    registry.register_fn(Finance, "iban", |f| f.finance().iban("GB", false));
    registry.register_fn(Finance, "bic", |f| Ok(f.finance().bic()));
    registry.register_fn(Finance, "bitcoin", |f| f.finance().bitcoin());
    registry.register_fn(Finance, "ethereum", |f| Ok(f.finance().ethereum()));
    registry.register_fn(Finance, "currency_code", |f| f.finance().currency_code());
    registry.register_fn(Finance, "currency_name", |f| f.finance().currency_name());
    registry.register_fn(Finance, "currency_symbol", |f| f.finance().currency_symbol());
    registry.register_fn(Finance, "transaction_type", |f| f.finance().transaction_type());
}

/// Helpers taking caller data stay off the registry; these have defaults.
fn register_helpers(registry: &mut Registry) {
    use Category::Helpers;
    registry.register_fn(Helpers, "boolean", |f| Ok(f.helpers().boolean(0.5).to_string()));
    registry.register_fn(Helpers, "replace_credit_card_symbols", |f| {
        Ok(f.helpers().replace_credit_card_symbols(DEFAULT_CARD_FORMAT, '#'))
    });
}
