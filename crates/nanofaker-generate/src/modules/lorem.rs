use crate::errors::GenerateResult;
use crate::random::Random;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum",
];

/// Placeholder text. Not localized.
pub struct LoremModule<'a> {
    random: &'a mut Random,
}

impl<'a> LoremModule<'a> {
    pub fn new(random: &'a mut Random) -> Self {
        Self { random }
    }

    pub fn word(&mut self) -> GenerateResult<String> {
        self.random.pick(WORDS).map(|word| word.to_string())
    }

    pub fn words(&mut self, count: usize) -> GenerateResult<String> {
        let words = (0..count)
            .map(|_| self.word())
            .collect::<GenerateResult<Vec<_>>>()?;
        Ok(words.join(" "))
    }

    /// Capitalized words ending in a period. `None` draws 3 to 10 words.
    pub fn sentence(&mut self, word_count: Option<usize>) -> GenerateResult<String> {
        let count = match word_count {
            Some(count) => count,
            None => self.random.int(3, 10)? as usize,
        };
        let words = self.words(count)?;
        let mut chars = words.chars();
        Ok(match chars.next() {
            Some(first) => format!("{}{}.", first.to_ascii_uppercase(), chars.as_str()),
            None => ".".to_string(),
        })
    }

    pub fn sentences(&mut self, count: usize, separator: &str) -> GenerateResult<String> {
        let sentences = (0..count)
            .map(|_| self.sentence(None))
            .collect::<GenerateResult<Vec<_>>>()?;
        Ok(sentences.join(separator))
    }

    /// `None` draws 3 to 7 sentences.
    pub fn paragraph(&mut self, sentence_count: Option<usize>) -> GenerateResult<String> {
        let count = match sentence_count {
            Some(count) => count,
            None => self.random.int(3, 7)? as usize,
        };
        self.sentences(count, " ")
    }

    pub fn paragraphs(&mut self, count: usize, separator: &str) -> GenerateResult<String> {
        let paragraphs = (0..count)
            .map(|_| self.paragraph(None))
            .collect::<GenerateResult<Vec<_>>>()?;
        Ok(paragraphs.join(separator))
    }

    /// Paragraphs cut to at most `length` characters.
    pub fn text(&mut self, length: usize) -> GenerateResult<String> {
        let mut text = String::new();
        while text.len() < length {
            text.push_str(&self.paragraph(None)?);
            text.push(' ');
        }
        Ok(text.trim().chars().take(length).collect())
    }

    /// Hyphen-joined words, e.g. `dolor-sit-amet`.
    pub fn slug(&mut self, word_count: usize) -> GenerateResult<String> {
        Ok(self.words(word_count)?.replace(' ', "-"))
    }

    /// One sentence per line.
    pub fn lines(&mut self, count: usize) -> GenerateResult<String> {
        self.sentences(count, "\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_is_capitalized_and_terminated() {
        let mut random = Random::seeded(6);
        let sentence = LoremModule::new(&mut random).sentence(Some(4)).unwrap();
        assert!(sentence.ends_with('.'));
        assert!(sentence.starts_with(|c: char| c.is_ascii_uppercase()));
        assert_eq!(sentence.split(' ').count(), 4);
    }

    #[test]
    fn text_is_capped_at_length() {
        let mut random = Random::seeded(10);
        let mut lorem = LoremModule::new(&mut random);
        assert!(lorem.text(50).unwrap().len() <= 50);
        assert_eq!(lorem.text(0).unwrap(), "");
    }

    #[test]
    fn slug_and_lines_use_their_separators() {
        let mut random = Random::seeded(2);
        let mut lorem = LoremModule::new(&mut random);
        let slug = lorem.slug(3).unwrap();
        assert_eq!(slug.split('-').count(), 3);
        assert!(WORDS.iter().any(|word| slug.starts_with(word)));
        assert_eq!(lorem.lines(3).unwrap().lines().count(), 3);
    }
}
