use crate::errors::{GenerateError, GenerateResult};

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233280;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Random source shared by every data module.
///
/// Seeded instances advance a linear congruential generator, so two instances
/// built from the same seed replay the same sequence for the same calls.
/// Unseeded instances draw from the thread-local entropy generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Random {
    state: Option<u64>,
}

impl Random {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            state: seed.map(|seed| seed % MODULUS),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    pub fn unseeded() -> Self {
        Self::new(None)
    }

    pub fn is_seeded(&self) -> bool {
        self.state.is_some()
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        match self.state.as_mut() {
            Some(state) => {
                *state = (*state * MULTIPLIER + INCREMENT) % MODULUS;
                *state as f64 / MODULUS as f64
            }
            None => rand::random::<f64>(),
        }
    }

    /// Uniform integer in `[min, max]`.
    pub fn int(&mut self, min: i64, max: i64) -> GenerateResult<i64> {
        if max < min {
            return Err(GenerateError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        let span = (i128::from(max) - i128::from(min) + 1) as f64;
        let offset = (self.next_f64() * span).floor() as i128;
        Ok((i128::from(min) + offset).min(i128::from(max)) as i64)
    }

    /// Uniform float in `[min, max]` rounded to `precision` decimals.
    pub fn float(&mut self, min: f64, max: f64, precision: u32) -> GenerateResult<f64> {
        if min.is_nan() || max.is_nan() || max < min {
            return Err(GenerateError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        let raw = self.next_f64() * (max - min) + min;
        let factor = 10f64.powi(precision.min(15) as i32);
        Ok(((raw * factor).round() / factor).clamp(min, max))
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> GenerateResult<&'a T> {
        match items.len() {
            0 => Err(GenerateError::EmptyInput),
            len => Ok(&items[self.index(len - 1)]),
        }
    }

    /// Shuffled prefix of `items`. `count` defaults to a random length in
    /// `[1, len]` and is capped at `len`.
    pub fn pick_multiple<T: Clone>(&mut self, items: &[T], count: Option<usize>) -> Vec<T> {
        if items.is_empty() {
            return Vec::new();
        }
        let count = count.unwrap_or_else(|| self.index(items.len() - 1) + 1);
        let mut shuffled = self.shuffle(items);
        shuffled.truncate(count.min(items.len()));
        shuffled
    }

    /// Fisher-Yates shuffle into a new vector.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut result = items.to_vec();
        for i in (1..result.len()).rev() {
            let j = self.index(i);
            result.swap(i, j);
        }
        result
    }

    pub fn boolean(&mut self, weight: f64) -> bool {
        self.next_f64() < weight
    }

    /// Replace `#` with a digit and `?` with a lowercase letter.
    pub fn fill_template(&mut self, format: &str) -> String {
        format
            .chars()
            .map(|c| match c {
                '#' => self.digit(),
                '?' => self.letter(),
                other => other,
            })
            .collect()
    }

    /// Replace every `symbol` with a digit.
    pub fn fill_symbol(&mut self, format: &str, symbol: char) -> String {
        format
            .chars()
            .map(|c| if c == symbol { self.digit() } else { c })
            .collect()
    }

    /// `length` characters drawn from the ASCII `charset`.
    pub fn string_from(&mut self, charset: &[u8], length: usize) -> String {
        if charset.is_empty() {
            return String::new();
        }
        (0..length)
            .map(|_| char::from(charset[self.index(charset.len() - 1)]))
            .collect()
    }

    pub fn digit(&mut self) -> char {
        char::from(b'0' + self.index(9) as u8)
    }

    /// Lowercase ASCII letter.
    pub fn letter(&mut self) -> char {
        char::from(ALPHABET[self.index(ALPHABET.len() - 1)])
    }

    /// Same draw as `int(0, upper)`, for ranges that cannot be invalid.
    fn index(&mut self, upper: usize) -> usize {
        let offset = (self.next_f64() * (upper as f64 + 1.0)).floor() as usize;
        offset.min(upper)
    }
}
