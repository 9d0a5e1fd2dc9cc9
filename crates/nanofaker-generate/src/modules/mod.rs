//! Data modules: short-lived views over a [`Random`], most also over a locale.

pub mod address;
pub mod catalog;
pub mod color;
pub mod company;
pub mod date;
pub mod field;
pub mod finance;
pub mod helpers;
pub mod internet;
pub mod lorem;
pub mod number;
pub mod person;
pub mod phone;
pub mod string;

use std::fmt;

pub use address::AddressModule;
pub use catalog::{CATALOG, CatalogField, CatalogModule};
pub use color::{ColorModule, CssFormat};
pub use company::CompanyModule;
pub use date::DateModule;
pub use field::Field;
pub use finance::{CardIssuer, FinanceModule};
pub use helpers::HelpersModule;
pub use internet::{EmailOptions, InternetModule};
pub use lorem::LoremModule;
pub use number::NumberModule;
pub use person::{FullNameOptions, Gender, PersonModule};
pub use phone::PhoneModule;
pub use string::{Casing, StringModule};

/// Generator categories exposed through the registry and the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Person,
    Address,
    Company,
    Internet,
    Phone,
    Food,
    Animal,
    Sport,
    Music,
    Commerce,
    Book,
    Vehicle,
    Word,
    Hacker,
    System,
    Science,
    Number,
    String,
    Lorem,
    Date,
    Color,
    Finance,
    Helpers,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Person,
        Category::Address,
        Category::Company,
        Category::Internet,
        Category::Phone,
        Category::Food,
        Category::Animal,
        Category::Sport,
        Category::Music,
        Category::Commerce,
        Category::Book,
        Category::Vehicle,
        Category::Word,
        Category::Hacker,
        Category::System,
        Category::Science,
        Category::Number,
        Category::String,
        Category::Lorem,
        Category::Date,
        Category::Color,
        Category::Finance,
        Category::Helpers,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Address => "address",
            Self::Company => "company",
            Self::Internet => "internet",
            Self::Phone => "phone",
            Self::Food => "food",
            Self::Animal => "animal",
            Self::Sport => "sport",
            Self::Music => "music",
            Self::Commerce => "commerce",
            Self::Book => "book",
            Self::Vehicle => "vehicle",
            Self::Word => "word",
            Self::Hacker => "hacker",
            Self::System => "system",
            Self::Science => "science",
            Self::Number => "number",
            Self::String => "string",
            Self::Lorem => "lorem",
            Self::Date => "date",
            Self::Color => "color",
            Self::Finance => "finance",
            Self::Helpers => "helpers",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Person => "Names, genders, job titles, prefixes, suffixes",
            Self::Address => "Streets, cities, states, countries, postal codes",
            Self::Company => "Names, industries, buzzwords, descriptors",
            Self::Internet => "Email addresses, usernames, domains, URLs",
            Self::Phone => "Phone numbers",
            Self::Food => "Dishes, ingredients, cuisines, desserts, fruits, vegetables, meats",
            Self::Animal => "Dogs, cats, birds, fish, horses, rabbits, insects",
            Self::Sport => "Sports, teams, athletes",
            Self::Music => "Genres, artists, songs, instruments",
            Self::Commerce => "Products, adjectives, materials, departments, colors",
            Self::Book => "Titles, authors, publishers, genres, series, reviews",
            Self::Vehicle => "Manufacturers, models, types, fuel types, bicycles",
            Self::Word => "Adjectives, adverbs, conjunctions, nouns, prepositions, verbs",
            Self::Hacker => "Technical abbreviations, terms, phrases",
            Self::System => "File names, file types",
            Self::Science => "Chemical elements, units, constants, fields",
            Self::Number => "Integers, floats, binary, octal and hex digits",
            Self::String => "UUIDs, nanoids, alphanumeric and symbol strings",
            Self::Lorem => "Placeholder words, sentences, paragraphs",
            Self::Date => "Past, future and recent instants, month and weekday names",
            Self::Color => "Hex, RGB and HSL colors, color names",
            Self::Finance => "Amounts, accounts, card numbers, IBANs, currencies",
            Self::Helpers => "Template filling, weighted booleans",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_round_trip_through_names() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(*category));
        }
        assert_eq!(Category::parse("Person"), Some(Category::Person));
        assert_eq!(Category::parse("planet"), None);
    }
}
