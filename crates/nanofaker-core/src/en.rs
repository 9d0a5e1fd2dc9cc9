//! Bundled English locale, always resident.

use std::sync::{Arc, OnceLock};

use crate::definition::{
    AddressLocale, CompanyLocale, InternetLocale, LocaleDefinition, PersonLocale, PhoneLocale,
};

/// Shared handle to the bundled `en` definition.
pub fn english() -> Arc<LocaleDefinition> {
    static EN: OnceLock<Arc<LocaleDefinition>> = OnceLock::new();
    Arc::clone(EN.get_or_init(|| Arc::new(build())))
}

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn build() -> LocaleDefinition {
    LocaleDefinition {
        title: "English".to_string(),
        person: PersonLocale {
            first_name_male: list(&[
                "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
                "Thomas", "Charles", "Liam", "Noah", "Oliver", "Elijah", "Lucas", "Mason",
                "Logan", "Alexander", "Ethan", "Jacob",
            ]),
            first_name_female: list(&[
                "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan",
                "Jessica", "Sarah", "Karen", "Emma", "Olivia", "Ava", "Isabella", "Sophia", "Mia",
                "Charlotte", "Amelia", "Harper", "Evelyn",
            ]),
            first_name_neutral: list(&[
                "Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Avery", "Quinn", "Jamie",
                "Rowan",
            ]),
            last_name: list(&[
                "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
                "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
                "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
                "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson",
            ]),
            prefix: list(&["Mr.", "Mrs.", "Ms.", "Miss", "Dr.", "Prof."]),
            suffix: list(&["Jr.", "Sr.", "I", "II", "III", "IV", "V", "MD", "PhD", "DDS"]),
            gender: list(&[
                "Male",
                "Female",
                "Non-binary",
                "Agender",
                "Bigender",
                "Genderfluid",
                "Genderqueer",
            ]),
            job_title: list(&[
                "Software Engineer",
                "Product Manager",
                "Designer",
                "Data Scientist",
                "DevOps Engineer",
                "Marketing Manager",
                "Sales Representative",
                "Accountant",
                "Human Resources Manager",
                "CEO",
                "CTO",
                "CFO",
                "Director",
                "Analyst",
                "Consultant",
                "Administrator",
                "Coordinator",
                "Architect",
                "Technician",
                "Assistant",
            ]),
        },
        address: AddressLocale {
            street: list(&[
                "Main", "Oak", "Maple", "Cedar", "Elm", "Washington", "Lake", "Hill", "Park",
                "River", "Sunset", "Pine", "Walnut", "Highland", "Madison", "Lincoln", "Jackson",
                "Franklin",
            ]),
            city: list(&[
                "New York",
                "Los Angeles",
                "Chicago",
                "Houston",
                "Phoenix",
                "Philadelphia",
                "San Antonio",
                "San Diego",
                "Dallas",
                "San Jose",
                "Austin",
                "Jacksonville",
                "Fort Worth",
                "Columbus",
                "Charlotte",
                "San Francisco",
                "Indianapolis",
                "Seattle",
                "Denver",
                "Boston",
                "Nashville",
            ]),
            state: list(&[
                "Alabama",
                "Alaska",
                "Arizona",
                "Arkansas",
                "California",
                "Colorado",
                "Connecticut",
                "Delaware",
                "Florida",
                "Georgia",
                "Hawaii",
                "Idaho",
                "Illinois",
                "Indiana",
                "Iowa",
                "Kansas",
                "Kentucky",
                "Louisiana",
                "Maine",
                "Maryland",
                "Massachusetts",
                "Michigan",
                "Minnesota",
                "Mississippi",
                "Missouri",
                "Montana",
                "Nebraska",
                "Nevada",
                "New Hampshire",
                "New Jersey",
                "New Mexico",
                "New York",
                "North Carolina",
                "North Dakota",
                "Ohio",
                "Oklahoma",
                "Oregon",
                "Pennsylvania",
                "Rhode Island",
                "South Carolina",
                "South Dakota",
                "Tennessee",
                "Texas",
                "Utah",
                "Vermont",
                "Virginia",
                "Washington",
                "West Virginia",
                "Wisconsin",
                "Wyoming",
            ]),
            state_abbr: list(&[
                "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN",
                "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV",
                "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN",
                "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
            ]),
            country: list(&[
                "United States",
                "Canada",
                "United Kingdom",
                "Australia",
                "Germany",
                "France",
                "Spain",
                "Italy",
                "Japan",
                "China",
                "India",
                "Brazil",
                "Mexico",
                "South Korea",
            ]),
            country_code: list(&[
                "US", "CA", "GB", "AU", "DE", "FR", "ES", "IT", "JP", "CN", "IN", "BR", "MX", "KR",
            ]),
            zip_code: list(&["#####", "#####-####"]),
            building_number: list(&["###", "####", "#", "##"]),
            direction: list(&[
                "North",
                "East",
                "South",
                "West",
                "Northeast",
                "Northwest",
                "Southeast",
                "Southwest",
            ]),
            street_suffix: list(&[
                "Street", "Avenue", "Road", "Boulevard", "Drive", "Court", "Circle", "Lane", "Way",
                "Place", "Terrace", "Parkway", "Commons", "Trail", "Square", "Run", "Crossing",
            ]),
        },
        company: CompanyLocale {
            name: list(&[
                "TechCorp",
                "GlobalSoft",
                "DataSystems",
                "CloudNet",
                "Innovate Inc",
                "Digital Solutions",
                "NextGen Tech",
                "FutureTech",
                "SmartSystems",
                "CoreTech",
                "PrimeSoft",
                "AlphaTech",
            ]),
            suffix: list(&[
                "Inc",
                "LLC",
                "Corp",
                "Group",
                "Ltd",
                "Co",
                "Technologies",
                "Solutions",
                "Systems",
            ]),
            industry: list(&[
                "Technology",
                "Finance",
                "Healthcare",
                "Education",
                "Retail",
                "Manufacturing",
                "Telecommunications",
                "Energy",
                "Real Estate",
                "Transportation",
                "Media",
                "Hospitality",
            ]),
            buzzwords: list(&[
                "synergize",
                "leverage",
                "innovate",
                "disrupt",
                "optimize",
                "streamline",
                "transform",
                "revolutionize",
                "empower",
                "enable",
                "facilitate",
                "orchestrate",
                "integrate",
            ]),
            adjective: list(&[
                "revolutionary",
                "cutting-edge",
                "innovative",
                "next-generation",
                "advanced",
                "leading",
                "premier",
                "world-class",
                "enterprise",
                "scalable",
                "robust",
                "seamless",
            ]),
            descriptor: list(&[
                "global",
                "digital",
                "cloud-based",
                "AI-powered",
                "data-driven",
                "user-centric",
                "agile",
                "secure",
                "efficient",
                "intelligent",
                "automated",
                "integrated",
            ]),
            noun: list(&[
                "solution",
                "platform",
                "system",
                "service",
                "technology",
                "framework",
                "infrastructure",
                "application",
                "network",
                "portal",
                "ecosystem",
                "architecture",
                "engine",
            ]),
        },
        internet: InternetLocale {
            domain_suffix: list(&[
                "com", "net", "org", "io", "co", "app", "dev", "tech", "ai", "cloud",
            ]),
            free_email: list(&[
                "gmail.com",
                "yahoo.com",
                "hotmail.com",
                "outlook.com",
                "icloud.com",
                "proton.me",
            ]),
        },
        phone: PhoneLocale {
            formats: list(&[
                "###-###-####",
                "(###) ###-####",
                "1-###-###-####",
                "+1-###-###-####",
                "###.###.####",
            ]),
        },
        ..LocaleDefinition::default()
    }
}
