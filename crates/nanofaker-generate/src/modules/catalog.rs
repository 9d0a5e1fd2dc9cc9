//! Single-list categories whose locale section is optional.
//!
//! Each [`CatalogField`] reads the locale's list when the section and field
//! are present and non-empty, and falls back to its built-in defaults
//! otherwise.

use nanofaker_core::LocaleDefinition;

use crate::errors::{GenerateError, GenerateResult};
use crate::modules::Category;
use crate::modules::field::Field;
use crate::random::Random;

type LocaleList = for<'l> fn(&'l LocaleDefinition) -> Option<&'l [String]>;

/// One generator method backed by a single list.
#[derive(Clone, Copy)]
pub struct CatalogField {
    pub category: Category,
    pub method: &'static str,
    pub locale: LocaleList,
    pub defaults: &'static [&'static str],
}

impl CatalogField {
    pub fn resolve<'l>(&self, locale: &'l LocaleDefinition) -> Field<'l> {
        Field::resolve((self.locale)(locale), self.defaults)
    }
}

impl std::fmt::Debug for CatalogField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogField")
            .field("category", &self.category)
            .field("method", &self.method)
            .field("defaults", &self.defaults.len())
            .finish()
    }
}

macro_rules! catalog_field {
    ($category:ident, $method:literal, $section:ident . $field:ident, $defaults:expr) => {
        CatalogField {
            category: Category::$category,
            method: $method,
            locale: |locale| {
                locale
                    .$section
                    .as_ref()
                    .map(|section| section.$field.as_slice())
            },
            defaults: $defaults,
        }
    };
}

pub static CATALOG: &[CatalogField] = &[
    catalog_field!(Food, "dish", food.dish, defaults::DISHES),
    catalog_field!(Food, "ingredient", food.ingredient, defaults::INGREDIENTS),
    catalog_field!(Food, "cuisine", food.cuisine, defaults::CUISINES),
    catalog_field!(Food, "dessert", food.dessert, defaults::DESSERTS),
    catalog_field!(Food, "fruit", food.fruit, defaults::FRUITS),
    catalog_field!(Food, "vegetable", food.vegetable, defaults::VEGETABLES),
    catalog_field!(Food, "meat", food.meat, defaults::MEATS),
    catalog_field!(Food, "spice", food.spice, defaults::SPICES),
    catalog_field!(Animal, "dog", animal.dog, defaults::DOGS),
    catalog_field!(Animal, "cat", animal.cat, defaults::CATS),
    catalog_field!(Animal, "bird", animal.bird, defaults::BIRDS),
    catalog_field!(Animal, "fish", animal.fish, defaults::FISH),
    catalog_field!(Animal, "horse", animal.horse, defaults::HORSES),
    catalog_field!(Animal, "rabbit", animal.rabbit, defaults::RABBITS),
    catalog_field!(Animal, "insect", animal.insect, defaults::INSECTS),
    catalog_field!(Animal, "type", animal.kind, defaults::ANIMAL_TYPES),
    catalog_field!(Sport, "sport", sport.sport, defaults::SPORTS),
    catalog_field!(Sport, "team", sport.team, defaults::TEAMS),
    catalog_field!(Sport, "athlete", sport.athlete, defaults::ATHLETES),
    catalog_field!(Music, "genre", music.genre, defaults::MUSIC_GENRES),
    catalog_field!(Music, "artist", music.artist, defaults::ARTISTS),
    catalog_field!(Music, "song", music.song, defaults::SONGS),
    catalog_field!(Music, "instrument", music.instrument, defaults::INSTRUMENTS),
    catalog_field!(Commerce, "product", commerce.product, defaults::PRODUCTS),
    catalog_field!(
        Commerce,
        "product_adjective",
        commerce.product_adjective,
        defaults::PRODUCT_ADJECTIVES
    ),
    catalog_field!(
        Commerce,
        "product_material",
        commerce.product_material,
        defaults::PRODUCT_MATERIALS
    ),
    catalog_field!(Commerce, "department", commerce.department, defaults::DEPARTMENTS),
    catalog_field!(Commerce, "color", commerce.color, defaults::COLORS),
    catalog_field!(Book, "title", book.title, defaults::BOOK_TITLES),
    catalog_field!(Book, "author", book.author, defaults::AUTHORS),
    catalog_field!(Book, "publisher", book.publisher, defaults::PUBLISHERS),
    catalog_field!(Book, "genre", book.genre, defaults::BOOK_GENRES),
    catalog_field!(Book, "series", book.series, defaults::BOOK_SERIES),
    catalog_field!(Book, "review", book.review, defaults::REVIEWS),
    catalog_field!(Vehicle, "manufacturer", vehicle.manufacturer, defaults::MANUFACTURERS),
    catalog_field!(Vehicle, "model", vehicle.model, defaults::MODELS),
    catalog_field!(Vehicle, "type", vehicle.kind, defaults::VEHICLE_TYPES),
    catalog_field!(Vehicle, "fuel", vehicle.fuel, defaults::FUELS),
    catalog_field!(Vehicle, "bicycle", vehicle.bicycle, defaults::BICYCLES),
    catalog_field!(Word, "adjective", word.adjective, defaults::ADJECTIVES),
    catalog_field!(Word, "adverb", word.adverb, defaults::ADVERBS),
    catalog_field!(Word, "conjunction", word.conjunction, defaults::CONJUNCTIONS),
    catalog_field!(Word, "interjection", word.interjection, defaults::INTERJECTIONS),
    catalog_field!(Word, "noun", word.noun, defaults::NOUNS),
    catalog_field!(Word, "preposition", word.preposition, defaults::PREPOSITIONS),
    catalog_field!(Word, "verb", word.verb, defaults::VERBS),
    catalog_field!(Hacker, "abbreviation", hacker.abbreviation, defaults::ABBREVIATIONS),
    catalog_field!(Hacker, "adjective", hacker.adjective, defaults::HACKER_ADJECTIVES),
    catalog_field!(Hacker, "noun", hacker.noun, defaults::HACKER_NOUNS),
    catalog_field!(Hacker, "verb", hacker.verb, defaults::HACKER_VERBS),
    catalog_field!(Hacker, "ingverb", hacker.ingverb, defaults::HACKER_INGVERBS),
    catalog_field!(Hacker, "phrase", hacker.phrase, defaults::HACKER_PHRASES),
    catalog_field!(System, "file_name", system.file_name, defaults::FILE_NAMES),
    catalog_field!(System, "file_type", system.file_type, defaults::FILE_TYPES),
    catalog_field!(
        Science,
        "chemical_element",
        science.chemical_element,
        defaults::CHEMICAL_ELEMENTS
    ),
    catalog_field!(Science, "unit", science.unit, defaults::UNITS),
    catalog_field!(Science, "constant", science.constant, defaults::CONSTANTS),
    catalog_field!(Science, "field", science.field, defaults::SCIENCE_FIELDS),
];

/// Fields of one category, in table order.
pub fn fields(category: Category) -> impl Iterator<Item = &'static CatalogField> {
    CATALOG
        .iter()
        .filter(move |field| field.category == category)
}

pub fn find(category: Category, method: &str) -> Option<&'static CatalogField> {
    fields(category).find(|field| field.method == method)
}

pub struct CatalogModule<'a> {
    random: &'a mut Random,
    locale: &'a LocaleDefinition,
}

impl<'a> CatalogModule<'a> {
    pub fn new(random: &'a mut Random, locale: &'a LocaleDefinition) -> Self {
        Self { random, locale }
    }

    pub fn pick(&mut self, field: &CatalogField) -> GenerateResult<String> {
        field.resolve(self.locale).pick(self.random)
    }

    pub fn generate(&mut self, category: Category, method: &str) -> GenerateResult<String> {
        let field = find(category, method).ok_or_else(|| GenerateError::UnknownMethod {
            category: category.to_string(),
            method: method.to_string(),
        })?;
        self.pick(field)
    }
}

mod defaults {
    pub const DISHES: &[&str] = &[
        "Spaghetti Carbonara", "Chicken Alfredo", "Beef Tacos", "Margherita Pizza",
        "Caesar Salad", "Pad Thai", "Chicken Tikka Masala", "Ramen", "Paella", "Pho",
        "Falafel Wrap", "Bibimbap", "Shakshuka", "Eggs Benedict", "Risotto", "Lasagna",
    ];
    pub const INGREDIENTS: &[&str] = &[
        "Garlic", "Onion", "Tomato", "Basil", "Olive Oil", "Butter", "Flour", "Eggs", "Rice",
        "Lemon", "Ginger", "Soy Sauce", "Honey", "Mushrooms", "Spinach", "Parmesan",
    ];
    pub const CUISINES: &[&str] = &[
        "Italian", "Mexican", "Japanese", "Thai", "Indian", "French", "Greek", "Korean",
        "Vietnamese", "Spanish", "Lebanese", "Ethiopian", "Brazilian", "Moroccan",
    ];
    pub const DESSERTS: &[&str] = &[
        "Tiramisu", "Cheesecake", "Brownie", "Apple Pie", "Creme Brulee", "Panna Cotta",
        "Chocolate Mousse", "Baklava", "Churros", "Macarons", "Gelato", "Pavlova",
    ];
    pub const FRUITS: &[&str] = &[
        "Apple", "Banana", "Orange", "Mango", "Pineapple", "Strawberry", "Blueberry",
        "Grape", "Watermelon", "Peach", "Cherry", "Kiwi", "Papaya", "Pear", "Plum",
    ];
    pub const VEGETABLES: &[&str] = &[
        "Broccoli", "Carrot", "Celery", "Spinach", "Kale", "Cauliflower", "Asparagus",
        "Zucchini", "Eggplant", "Bell Pepper", "Cucumber", "Sweet Potato", "Artichoke",
    ];
    pub const MEATS: &[&str] = &[
        "Chicken", "Beef", "Pork", "Lamb", "Turkey", "Duck", "Veal", "Venison", "Bacon",
        "Sausage", "Ham", "Brisket",
    ];
    pub const SPICES: &[&str] = &[
        "Paprika", "Cumin", "Turmeric", "Coriander", "Cardamom", "Cinnamon", "Nutmeg",
        "Cloves", "Black Pepper", "Cayenne", "Saffron", "Star Anise", "Fennel Seed",
    ];

    pub const DOGS: &[&str] = &[
        "Labrador Retriever", "German Shepherd", "Golden Retriever", "French Bulldog",
        "Beagle", "Poodle", "Rottweiler", "Dachshund", "Boxer", "Siberian Husky",
        "Border Collie", "Shih Tzu",
    ];
    pub const CATS: &[&str] = &[
        "Persian", "Maine Coon", "Siamese", "Ragdoll", "Bengal", "Sphynx", "British Shorthair",
        "Abyssinian", "Scottish Fold", "Russian Blue", "Norwegian Forest Cat",
    ];
    pub const BIRDS: &[&str] = &[
        "Bald Eagle", "Robin", "Blue Jay", "Cardinal", "Barn Owl", "Hummingbird",
        "Peregrine Falcon", "Flamingo", "Pelican", "Kingfisher", "Sparrow", "Parrot",
    ];
    pub const FISH: &[&str] = &[
        "Salmon", "Trout", "Tuna", "Goldfish", "Clownfish", "Cod", "Halibut", "Carp",
        "Catfish", "Swordfish", "Mackerel", "Angelfish",
    ];
    pub const HORSES: &[&str] = &[
        "Arabian", "Thoroughbred", "Quarter Horse", "Appaloosa", "Clydesdale", "Mustang",
        "Friesian", "Andalusian", "Shetland Pony", "Percheron",
    ];
    pub const RABBITS: &[&str] = &[
        "Holland Lop", "Netherland Dwarf", "Flemish Giant", "Mini Rex", "Lionhead",
        "English Angora", "Dutch", "Californian",
    ];
    pub const INSECTS: &[&str] = &[
        "Honeybee", "Ladybug", "Dragonfly", "Monarch Butterfly", "Grasshopper", "Firefly",
        "Praying Mantis", "Ant", "Beetle", "Cricket", "Moth",
    ];
    pub const ANIMAL_TYPES: &[&str] = &[
        "dog", "cat", "bird", "fish", "horse", "rabbit", "insect", "reptile", "mammal",
        "amphibian",
    ];

    pub const SPORTS: &[&str] = &[
        "Soccer", "Basketball", "Tennis", "Baseball", "Golf", "Swimming", "Cycling",
        "Volleyball", "Rugby", "Cricket", "Hockey", "Boxing", "Athletics", "Badminton",
    ];
    pub const TEAMS: &[&str] = &[
        "Eagles", "Tigers", "Lions", "Bears", "Sharks", "Wolves", "Falcons", "Panthers",
        "Hawks", "Rangers", "Comets", "Titans",
    ];
    pub const ATHLETES: &[&str] = &[
        "Jordan Miles", "Alex Rivera", "Sam Carter", "Taylor Brooks", "Morgan Lee",
        "Casey Nguyen", "Riley Adams", "Jamie Fox",
    ];

    pub const MUSIC_GENRES: &[&str] = &[
        "Rock", "Pop", "Jazz", "Blues", "Hip Hop", "Classical", "Country", "Electronic",
        "Reggae", "Folk", "Metal", "Soul", "Funk", "R&B",
    ];
    pub const ARTISTS: &[&str] = &[
        "The Midnight Owls", "Luna Park", "Velvet Static", "Echo Harbor", "Paper Satellites",
        "Crimson Tide Band", "Neon Rivers", "The Quiet Hours",
    ];
    pub const SONGS: &[&str] = &[
        "Summer Rain", "City Lights", "Lost in Time", "Golden Hour", "Back Home",
        "Electric Heart", "Wildfire", "Northern Skies", "Late Night Drive",
    ];
    pub const INSTRUMENTS: &[&str] = &[
        "Guitar", "Piano", "Violin", "Drums", "Bass", "Saxophone", "Trumpet", "Flute",
        "Cello", "Clarinet", "Harp", "Ukulele",
    ];

    pub const PRODUCTS: &[&str] = &[
        "Chair", "Table", "Keyboard", "Shoes", "Shirt", "Lamp", "Backpack", "Watch",
        "Headphones", "Wallet", "Bottle", "Gloves", "Hat", "Towels",
    ];
    pub const PRODUCT_ADJECTIVES: &[&str] = &[
        "Ergonomic", "Rustic", "Sleek", "Handcrafted", "Refined", "Practical", "Elegant",
        "Intelligent", "Gorgeous", "Durable", "Compact", "Luxurious",
    ];
    pub const PRODUCT_MATERIALS: &[&str] = &[
        "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Leather",
        "Bamboo", "Bronze", "Ceramic", "Silk",
    ];
    pub const DEPARTMENTS: &[&str] = &[
        "Books", "Electronics", "Garden", "Toys", "Clothing", "Sports", "Beauty", "Grocery",
        "Home", "Automotive", "Health", "Jewelry",
    ];
    pub const COLORS: &[&str] = &[
        "red", "blue", "green", "yellow", "purple", "orange", "black", "white", "teal",
        "magenta", "silver", "gold", "navy", "maroon",
    ];

    pub const BOOK_TITLES: &[&str] = &[
        "The Silent Harbor", "Echoes of Tomorrow", "A Winter's Promise", "The Last Orchard",
        "Beneath the Iron Sky", "The Clockmaker's Daughter", "Paper Lanterns",
        "Whispers in the Dust",
    ];
    pub const AUTHORS: &[&str] = &[
        "Eleanor Vance", "Marcus Hale", "Ingrid Holm", "Rafael Ortiz", "Priya Natarajan",
        "Thomas Reed", "Amara Okafor", "Julia Brandt",
    ];
    pub const PUBLISHERS: &[&str] = &[
        "Harbor House", "Northlight Press", "Bluefield Books", "Meridian Publishing",
        "Oakleaf Editions", "Silver Quill",
    ];
    pub const BOOK_GENRES: &[&str] = &[
        "Fantasy", "Science Fiction", "Mystery", "Thriller", "Romance", "Historical Fiction",
        "Horror", "Biography", "Poetry", "Young Adult",
    ];
    pub const BOOK_SERIES: &[&str] = &[
        "The Ember Chronicles", "Tales of the Northern Reach", "The Glass Kingdom Saga",
        "Starfall Trilogy", "The Lighthouse Mysteries",
    ];
    pub const REVIEWS: &[&str] = &[
        "A gripping read from start to finish.", "Beautifully written and deeply moving.",
        "The pacing drags in the middle.", "An instant classic.",
        "Clever twists and memorable characters.",
    ];

    pub const MANUFACTURERS: &[&str] = &[
        "Toyota", "Ford", "Honda", "Volkswagen", "BMW", "Mercedes-Benz", "Audi", "Hyundai",
        "Kia", "Nissan", "Tesla", "Volvo", "Mazda", "Subaru",
    ];
    pub const MODELS: &[&str] = &[
        "Corolla", "Civic", "Golf", "Model 3", "Mustang", "F-150", "Camry", "Accord",
        "Outback", "CX-5", "Tucson", "XC90",
    ];
    pub const VEHICLE_TYPES: &[&str] = &[
        "Sedan", "SUV", "Hatchback", "Coupe", "Convertible", "Minivan", "Pickup", "Wagon",
        "Crossover",
    ];
    pub const FUELS: &[&str] = &["Gasoline", "Diesel", "Electric", "Hybrid", "Hydrogen"];
    pub const BICYCLES: &[&str] = &[
        "Road Bike", "Mountain Bike", "Hybrid Bike", "BMX Bike", "Cruiser Bike",
        "Folding Bike", "Touring Bike", "Gravel Bike",
    ];

    pub const ADJECTIVES: &[&str] = &[
        "quick", "bright", "calm", "eager", "fancy", "gentle", "happy", "jolly", "kind",
        "lively", "proud", "silly", "brave", "clever",
    ];
    pub const ADVERBS: &[&str] = &[
        "quickly", "slowly", "carefully", "loudly", "quietly", "happily", "boldly", "rarely",
        "gently", "eagerly",
    ];
    pub const CONJUNCTIONS: &[&str] = &[
        "and", "but", "or", "nor", "for", "yet", "so", "because", "although", "while",
    ];
    pub const INTERJECTIONS: &[&str] = &[
        "wow", "oops", "hey", "ouch", "hooray", "alas", "yikes", "phew", "bravo",
    ];
    pub const NOUNS: &[&str] = &[
        "apple", "river", "mountain", "window", "garden", "cloud", "pencil", "ocean",
        "lantern", "forest", "bridge", "candle",
    ];
    pub const PREPOSITIONS: &[&str] = &[
        "above", "across", "after", "among", "behind", "below", "beside", "between",
        "during", "inside", "through", "under",
    ];
    pub const VERBS: &[&str] = &[
        "run", "jump", "write", "build", "sing", "think", "climb", "paint", "swim",
        "explore", "create", "listen",
    ];

    pub const ABBREVIATIONS: &[&str] = &[
        "TCP", "HTTP", "SDD", "RAM", "GB", "CSS", "SSL", "AGP", "SQL", "FTP", "PCI", "AI",
        "ADP", "RSS", "XML", "EXE", "COM", "HDD", "THX", "SMTP", "SMS", "USB", "PNG", "JSON",
    ];
    pub const HACKER_ADJECTIVES: &[&str] = &[
        "auxiliary", "primary", "back-end", "digital", "open-source", "virtual",
        "cross-platform", "redundant", "online", "haptic", "multi-byte", "bluetooth",
        "wireless", "1080p", "neural", "optical", "solid state", "mobile",
    ];
    pub const HACKER_NOUNS: &[&str] = &[
        "driver", "protocol", "bandwidth", "panel", "microchip", "program", "port", "card",
        "array", "interface", "system", "sensor", "firewall", "hard drive", "pixel", "alarm",
        "feed", "monitor", "application", "transmitter", "bus", "circuit", "capacitor",
        "matrix",
    ];
    pub const HACKER_VERBS: &[&str] = &[
        "back up", "bypass", "hack", "override", "compress", "copy", "navigate", "index",
        "connect", "generate", "quantify", "calculate", "synthesize", "input", "transmit",
        "program", "reboot", "parse",
    ];
    pub const HACKER_INGVERBS: &[&str] = &[
        "backing up", "bypassing", "hacking", "overriding", "compressing", "copying",
        "navigating", "indexing", "connecting", "generating", "quantifying", "calculating",
        "synthesizing", "transmitting", "programming", "parsing",
    ];
    pub const HACKER_PHRASES: &[&str] = &[
        "If we override the bus, we can get to the SQL driver through the wireless matrix!",
        "We need to back up the neural RAM panel!",
        "Try to compress the TCP protocol, maybe it will generate the virtual firewall!",
        "The SMTP interface is down, parse the optical alarm so we can index the USB feed!",
        "You can't connect the port without quantifying the redundant HTTP card!",
    ];

    pub const FILE_NAMES: &[&str] = &[
        "report", "invoice", "summary", "notes", "budget", "presentation", "backup",
        "config", "readme", "schedule", "draft", "archive",
    ];
    pub const FILE_TYPES: &[&str] = &[
        "application", "audio", "font", "image", "message", "model", "multipart", "text",
        "video",
    ];

    pub const CHEMICAL_ELEMENTS: &[&str] = &[
        "Hydrogen", "Helium", "Lithium", "Carbon", "Nitrogen", "Oxygen", "Sodium",
        "Magnesium", "Aluminum", "Silicon", "Sulfur", "Chlorine", "Calcium", "Iron",
        "Copper", "Zinc", "Silver", "Gold", "Mercury", "Uranium",
    ];
    pub const UNITS: &[&str] = &[
        "meter", "kilogram", "second", "ampere", "kelvin", "mole", "candela", "newton",
        "joule", "watt", "pascal", "hertz", "volt", "ohm", "coulomb", "tesla",
    ];
    pub const CONSTANTS: &[&str] = &[
        "Speed of light", "Planck constant", "Gravitational constant", "Avogadro constant",
        "Boltzmann constant", "Elementary charge", "Gas constant", "Fine-structure constant",
    ];
    pub const SCIENCE_FIELDS: &[&str] = &[
        "Physics", "Chemistry", "Biology", "Astronomy", "Geology", "Ecology", "Genetics",
        "Neuroscience", "Oceanography", "Meteorology", "Botany", "Zoology",
    ];
}

#[cfg(test)]
mod tests {
    use nanofaker_core::{FoodLocale, english};

    use super::*;

    #[test]
    fn every_field_has_defaults() {
        for field in CATALOG {
            assert!(
                !field.defaults.is_empty(),
                "{}.{} has no defaults",
                field.category,
                field.method
            );
        }
    }

    #[test]
    fn methods_are_unique_per_category() {
        for (i, field) in CATALOG.iter().enumerate() {
            assert!(
                CATALOG[i + 1..]
                    .iter()
                    .all(|other| other.category != field.category || other.method != field.method),
                "duplicate {}.{}",
                field.category,
                field.method
            );
        }
    }

    #[test]
    fn locale_lists_override_defaults() {
        let locale = LocaleDefinition {
            food: Some(FoodLocale {
                fruit: vec!["Cupuaçu".to_string()],
                ..FoodLocale::default()
            }),
            ..LocaleDefinition::default()
        };
        let mut random = Random::seeded(3);
        let mut catalog = CatalogModule::new(&mut random, &locale);
        assert_eq!(catalog.generate(Category::Food, "fruit").unwrap(), "Cupuaçu");
        let dish = catalog.generate(Category::Food, "dish").unwrap();
        assert!(defaults::DISHES.contains(&dish.as_str()));
    }

    #[test]
    fn unknown_method_is_reported() {
        let locale = english();
        let mut random = Random::seeded(3);
        let err = CatalogModule::new(&mut random, &locale)
            .generate(Category::Music, "tempo")
            .unwrap_err();
        assert_eq!(
            err,
            GenerateError::UnknownMethod {
                category: "music".to_string(),
                method: "tempo".to_string()
            }
        );
    }
}
