use uuid::Builder;

use crate::random::Random;

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const MIXED: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const NANOID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";
const HEX_LOWER: &[u8] = b"0123456789abcdef";

/// Letter case used by [`StringModule::alpha`] and [`StringModule::alphanumeric`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Casing {
    Lower,
    Upper,
    #[default]
    Mixed,
}

impl Casing {
    fn letters(self) -> &'static [u8] {
        match self {
            Casing::Lower => LOWER,
            Casing::Upper => UPPER,
            Casing::Mixed => MIXED,
        }
    }
}

pub struct StringModule<'a> {
    random: &'a mut Random,
}

impl<'a> StringModule<'a> {
    pub fn new(random: &'a mut Random) -> Self {
        Self { random }
    }

    /// Version 4 UUID built from the stream, so seeded fakers replay it.
    pub fn uuid(&mut self) -> String {
        let mut bytes = [0u8; 16];
        for byte in &mut bytes {
            *byte = (self.random.next_f64() * 256.0) as u8;
        }
        Builder::from_random_bytes(bytes).into_uuid().to_string()
    }

    pub fn nanoid(&mut self, size: usize) -> String {
        self.random.string_from(NANOID_ALPHABET, size)
    }

    pub fn alpha(&mut self, length: usize, casing: Casing) -> String {
        self.random.string_from(casing.letters(), length)
    }

    pub fn alphanumeric(&mut self, length: usize, casing: Casing) -> String {
        let charset = [DIGITS, casing.letters()].concat();
        self.random.string_from(&charset, length)
    }

    pub fn numeric(&mut self, length: usize) -> String {
        self.random.string_from(DIGITS, length)
    }

    /// Mixed-case alphanumeric text.
    pub fn sample(&mut self, length: usize) -> String {
        self.alphanumeric(length, Casing::Mixed)
    }

    pub fn symbol(&mut self, length: usize) -> String {
        self.random.string_from(SYMBOLS, length)
    }

    /// Lowercase hex digits after `prefix`, e.g. `0x3fa9c1`.
    pub fn hexadecimal(&mut self, length: usize, prefix: &str) -> String {
        format!("{prefix}{}", self.random.string_from(HEX_LOWER, length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_is_version_four_and_replays() {
        let mut first = Random::seeded(77);
        let mut second = Random::seeded(77);
        let id = StringModule::new(&mut first).uuid();
        assert_eq!(id, StringModule::new(&mut second).uuid());

        let parsed = uuid::Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.get_variant(), uuid::Variant::RFC4122);
    }

    #[test]
    fn casing_limits_letters() {
        let mut random = Random::seeded(12);
        let mut strings = StringModule::new(&mut random);
        assert!(
            strings
                .alpha(40, Casing::Lower)
                .chars()
                .all(|c| c.is_ascii_lowercase())
        );
        assert!(
            strings
                .alphanumeric(40, Casing::Upper)
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn lengths_and_prefixes_hold() {
        let mut random = Random::seeded(3);
        let mut strings = StringModule::new(&mut random);
        assert_eq!(strings.nanoid(21).len(), 21);
        assert!(strings.numeric(10).chars().all(|c| c.is_ascii_digit()));
        assert_eq!(strings.symbol(5).len(), 5);
        let hex = strings.hexadecimal(6, "0x");
        assert!(hex.starts_with("0x"));
        assert_eq!(hex.len(), 8);
    }
}
