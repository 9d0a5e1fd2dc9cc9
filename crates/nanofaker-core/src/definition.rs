use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Complete locale data set consumed by the generators.
///
/// Field names serialize in camelCase so locale packages keep a single JSON
/// layout. Every list defaults to empty, which lets a variant that was loaded
/// without its base still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct LocaleDefinition {
    /// Human readable locale name (e.g. `English (United Kingdom)`).
    pub title: String,
    pub person: PersonLocale,
    pub address: AddressLocale,
    pub company: CompanyLocale,
    pub internet: InternetLocale,
    pub phone: PhoneLocale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food: Option<FoodLocale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animal: Option<AnimalLocale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport: Option<SportLocale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music: Option<MusicLocale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commerce: Option<CommerceLocale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<BookLocale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleLocale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<WordLocale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hacker: Option<HackerLocale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemLocale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub science: Option<ScienceLocale>,
}

impl LocaleDefinition {
    /// Parse raw (possibly merged) locale data.
    pub fn from_value(locale: &str, value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::InvalidData {
                locale: locale.to_string(),
                reason: "expected a JSON object".to_string(),
            });
        }
        serde_json::from_value(value).map_err(|err| Error::InvalidData {
            locale: locale.to_string(),
            reason: err.to_string(),
        })
    }

    /// Raw form used for merging.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonLocale {
    pub first_name_male: Vec<String>,
    pub first_name_female: Vec<String>,
    pub first_name_neutral: Vec<String>,
    pub last_name: Vec<String>,
    pub prefix: Vec<String>,
    pub suffix: Vec<String>,
    pub gender: Vec<String>,
    pub job_title: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressLocale {
    pub street: Vec<String>,
    pub city: Vec<String>,
    pub state: Vec<String>,
    pub state_abbr: Vec<String>,
    pub country: Vec<String>,
    pub country_code: Vec<String>,
    /// Templates with `#` (digit) and `?` (letter) placeholders.
    pub zip_code: Vec<String>,
    /// Templates with `#` placeholders.
    pub building_number: Vec<String>,
    pub direction: Vec<String>,
    pub street_suffix: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyLocale {
    pub name: Vec<String>,
    pub suffix: Vec<String>,
    pub industry: Vec<String>,
    pub buzzwords: Vec<String>,
    pub adjective: Vec<String>,
    pub descriptor: Vec<String>,
    pub noun: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct InternetLocale {
    pub domain_suffix: Vec<String>,
    pub free_email: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PhoneLocale {
    /// Templates with `#` and `?` placeholders.
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct FoodLocale {
    pub dish: Vec<String>,
    pub ingredient: Vec<String>,
    pub cuisine: Vec<String>,
    pub dessert: Vec<String>,
    pub fruit: Vec<String>,
    pub vegetable: Vec<String>,
    pub meat: Vec<String>,
    pub spice: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimalLocale {
    pub dog: Vec<String>,
    pub cat: Vec<String>,
    pub bird: Vec<String>,
    pub fish: Vec<String>,
    pub horse: Vec<String>,
    pub rabbit: Vec<String>,
    pub insect: Vec<String>,
    #[serde(rename = "type")]
    pub kind: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SportLocale {
    pub sport: Vec<String>,
    pub team: Vec<String>,
    pub athlete: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct MusicLocale {
    pub genre: Vec<String>,
    pub artist: Vec<String>,
    pub song: Vec<String>,
    pub instrument: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CommerceLocale {
    pub product: Vec<String>,
    pub product_adjective: Vec<String>,
    pub product_material: Vec<String>,
    pub department: Vec<String>,
    pub color: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct BookLocale {
    pub title: Vec<String>,
    pub author: Vec<String>,
    pub publisher: Vec<String>,
    pub genre: Vec<String>,
    pub series: Vec<String>,
    pub review: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct VehicleLocale {
    pub manufacturer: Vec<String>,
    pub model: Vec<String>,
    #[serde(rename = "type")]
    pub kind: Vec<String>,
    pub fuel: Vec<String>,
    pub bicycle: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct WordLocale {
    pub adjective: Vec<String>,
    pub adverb: Vec<String>,
    pub conjunction: Vec<String>,
    pub interjection: Vec<String>,
    pub noun: Vec<String>,
    pub preposition: Vec<String>,
    pub verb: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct HackerLocale {
    pub abbreviation: Vec<String>,
    pub adjective: Vec<String>,
    pub noun: Vec<String>,
    pub verb: Vec<String>,
    pub ingverb: Vec<String>,
    pub phrase: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemLocale {
    pub file_name: Vec<String>,
    pub file_type: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ScienceLocale {
    pub chemical_element: Vec<String>,
    pub unit: Vec<String>,
    pub constant: Vec<String>,
    pub field: Vec<String>,
}
