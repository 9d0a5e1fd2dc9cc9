use crate::errors::GenerateResult;
use crate::random::Random;

/// Card layout used when none is given.
pub const DEFAULT_CARD_FORMAT: &str = "####-####-####-####";

/// Generic helpers over caller-supplied data.
pub struct HelpersModule<'a> {
    random: &'a mut Random,
}

impl<'a> HelpersModule<'a> {
    pub fn new(random: &'a mut Random) -> Self {
        Self { random }
    }

    pub fn array_element<'t, T>(&mut self, items: &'t [T]) -> GenerateResult<&'t T> {
        self.random.pick(items)
    }

    /// Distinct elements in random order; `None` draws how many.
    pub fn array_elements<T: Clone>(&mut self, items: &[T], count: Option<usize>) -> Vec<T> {
        self.random.pick_multiple(items, count)
    }

    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        self.random.shuffle(items)
    }

    /// `#` becomes a digit.
    pub fn numerify(&mut self, format: &str) -> String {
        self.random.fill_symbol(format, '#')
    }

    /// `?` becomes a lowercase letter.
    pub fn lexify(&mut self, format: &str) -> String {
        format
            .chars()
            .map(|c| if c == '?' { self.random.letter() } else { c })
            .collect()
    }

    pub fn bothify(&mut self, format: &str) -> String {
        let lexified = self.lexify(format);
        self.numerify(&lexified)
    }

    /// `#` and `?` in one pass.
    pub fn replace_symbols(&mut self, format: &str) -> String {
        self.random.fill_template(format)
    }

    /// Every `symbol` becomes a digit, e.g. `4###-####` with `#`.
    pub fn replace_credit_card_symbols(&mut self, format: &str, symbol: char) -> String {
        self.random.fill_symbol(format, symbol)
    }

    pub fn boolean(&mut self, weight: f64) -> bool {
        self.random.boolean(weight)
    }

    /// `generate()` with probability `probability`, otherwise `None`.
    pub fn maybe<T>(&mut self, probability: f64, generate: impl FnOnce() -> T) -> Option<T> {
        self.random.boolean(probability).then(generate)
    }
}

/// Call `generate` `count` times.
pub fn multiple<T>(count: usize, mut generate: impl FnMut() -> T) -> Vec<T> {
    (0..count).map(|_| generate()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_elements_are_distinct_members() {
        let items = ["a", "b", "c", "d", "e"];
        let mut random = Random::seeded(31);
        let picked = HelpersModule::new(&mut random).array_elements(&items, Some(3));
        assert_eq!(picked.len(), 3);
        for item in &picked {
            assert!(items.contains(item));
            assert_eq!(picked.iter().filter(|other| *other == item).count(), 1);
        }
    }

    #[test]
    fn shuffle_keeps_every_item() {
        let items: Vec<u32> = (0..20).collect();
        let mut random = Random::seeded(9);
        let mut shuffled = HelpersModule::new(&mut random).shuffle(&items);
        shuffled.sort_unstable();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn placeholders_are_replaced_by_kind() {
        let mut random = Random::seeded(14);
        let mut helpers = HelpersModule::new(&mut random);

        let digits = helpers.numerify("ab-##?");
        assert!(digits.starts_with("ab-"));
        assert!(digits[3..5].chars().all(|c| c.is_ascii_digit()));
        assert!(digits.ends_with('?'));

        let letters = helpers.lexify("#??");
        assert!(letters.starts_with('#'));
        assert!(letters[1..].chars().all(|c| c.is_ascii_lowercase()));

        let both = helpers.bothify("??##");
        assert!(both[..2].chars().all(|c| c.is_ascii_lowercase()));
        assert!(both[2..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn credit_card_symbols_honor_custom_symbol() {
        let mut random = Random::seeded(5);
        let value =
            HelpersModule::new(&mut random).replace_credit_card_symbols("6011-XXXX-##", 'X');
        assert!(value.starts_with("6011-"));
        assert!(value[5..9].chars().all(|c| c.is_ascii_digit()));
        assert!(value.ends_with("-##"));
    }

    #[test]
    fn maybe_and_multiple() {
        let mut random = Random::seeded(1);
        let mut helpers = HelpersModule::new(&mut random);
        assert_eq!(helpers.maybe(1.0, || 7), Some(7));
        assert_eq!(helpers.maybe(0.0, || 7), None);
        let mut counter = 0;
        let values = multiple(3, || {
            counter += 1;
            counter
        });
        assert_eq!(values, vec![1, 2, 3]);
    }
}
