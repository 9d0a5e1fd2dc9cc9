use crate::errors::GenerateResult;
use crate::random::Random;

const OCTAL_DIGITS: &[u8] = b"01234567";
const HEX_DIGITS: &[u8] = b"0123456789ABCDEF";

/// Locale-free numbers. Ranges are inclusive.
pub struct NumberModule<'a> {
    random: &'a mut Random,
}

impl<'a> NumberModule<'a> {
    pub fn new(random: &'a mut Random) -> Self {
        Self { random }
    }

    pub fn int(&mut self, min: i64, max: i64) -> GenerateResult<i64> {
        self.random.int(min, max)
    }

    pub fn float(&mut self, min: f64, max: f64, precision: u32) -> GenerateResult<f64> {
        self.random.float(min, max, precision)
    }

    /// Digit string of `length` zeros and ones.
    pub fn binary(&mut self, length: usize) -> String {
        self.random.string_from(b"01", length)
    }

    pub fn octal(&mut self, length: usize) -> String {
        self.random.string_from(OCTAL_DIGITS, length)
    }

    /// Uppercase hexadecimal digits, no prefix.
    pub fn hex(&mut self, length: usize) -> String {
        self.random.string_from(HEX_DIGITS, length)
    }

    pub fn digit(&mut self) -> u8 {
        self.random.digit() as u8 - b'0'
    }

    pub fn digit_not_zero(&mut self) -> GenerateResult<u8> {
        self.random.int(1, 9).map(|digit| digit as u8)
    }
}
