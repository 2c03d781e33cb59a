use tracing::trace;

use crate::Token;
use crate::locale::Lexicon;
use crate::number::Number;

/// Splits text into [`Token`]s tagged from a locale [`Lexicon`].
///
/// A token is a run of ASCII digits, a single punctuation character the
/// lexicon treats as a word, or any other run of non-space characters. The
/// whitespace after each token is kept on it so the input can be rebuilt.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    lexicon: &'static Lexicon,
}

impl Tokenizer {
    pub fn new(lexicon: &'static Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        let body = text.trim_start();
        let leading = text.len() - body.len();
        if leading > 0 {
            tokens.push(Token {
                value: String::new(),
                spaces_following: text[..leading].to_string(),
                position: 0,
                categories: &[],
                number: None,
                duration: None,
            });
        }

        for caps in (self.lexicon.splitter)().captures_iter(body) {
            let spaces = caps.get(4).map_or("", |m| m.as_str()).to_string();
            if let Some(digits) = caps.get(1) {
                tokens.push(self.raw_number(digits.as_str(), leading + digits.start(), spaces));
            } else if let Some(single) = caps.get(2) {
                tokens.push(self.word(single.as_str(), single.as_str(), leading + single.start(), spaces));
            } else if let Some(word) = caps.get(3) {
                let clean = word.as_str().to_lowercase();
                tokens.push(self.word(&clean, word.as_str(), leading + word.start(), spaces));
            }
        }

        trace!(count = tokens.len(), "tokenized input");
        tokens
    }

    fn raw_number(&self, digits: &str, position: usize, spaces_following: String) -> Token {
        // Runs too long for i64 become decimals; runs too long even for that are plain words.
        let number = digits
            .parse::<i64>()
            .map(Number::integer)
            .ok()
            .or_else(|| digits.parse::<f64>().ok().filter(|v| v.is_finite()).map(Number::decimal));

        match number {
            Some(number) => Token {
                value: digits.to_string(),
                spaces_following,
                position,
                categories: self.lexicon.raw_number_categories,
                number: Some(number),
                duration: None,
            },
            None => self.word(digits, digits, position, spaces_following),
        }
    }

    fn word(&self, clean: &str, value: &str, position: usize, spaces_following: String) -> Token {
        let entry = self.lexicon.lookup(clean).or_else(|| {
            self.lexicon
                .plural_endings
                .iter()
                .filter_map(|ending| clean.strip_suffix(*ending))
                // "as" is not the plural of "a"
                .filter(|singular| singular.chars().count() > 1)
                .find_map(|singular| self.lexicon.lookup(singular))
        });

        Token {
            value: value.to_string(),
            spaces_following,
            position,
            categories: entry.map(|e| e.categories).unwrap_or(&[]),
            number: entry.and_then(|e| e.number),
            duration: entry.and_then(|e| e.duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::ENGLISH;

    fn values(text: &str) -> Vec<String> {
        Tokenizer::new(&ENGLISH).tokenize(text).into_iter().map(|t| t.value).collect()
    }

    #[test]
    fn splits_digits_punctuation_and_words() {
        let cases: Vec<(Vec<&str>, &str)> = vec![
            (vec!["twenty", "-", "three"], "twenty-three"),
            (vec!["543789", "th"], "543789th"),
            (vec!["12", ":", "45", "pm"], "12:45pm"),
            (vec!["o", "'", "clock"], "o'clock"),
            (vec!["Hello", ",", "World", "!"], "Hello, World!"),
            (vec!["", "a", "b"], "  a b"),
        ];
        for (expected, input) in cases {
            assert_eq!(values(input), expected, "{input}");
        }
    }

    #[test]
    fn keeps_spaces_and_offsets() {
        let tokens = Tokenizer::new(&ENGLISH).tokenize("  two  days");
        assert_eq!(tokens[0].spaces_following, "  ");
        assert_eq!(tokens[1].value, "two");
        assert_eq!(tokens[1].position, 2);
        assert_eq!(tokens[1].spaces_following, "  ");
        assert_eq!(tokens[2].position, 7);
        assert_eq!(tokens[2].end(), 11);
    }

    #[test]
    fn tags_words_from_the_lexicon() {
        let tokens = Tokenizer::new(&ENGLISH).tokenize("Seconds 42 THIRD zebra");
        assert!(tokens[0].duration.is_some());
        assert!(tokens[0].has_category("ordinal"));
        assert!(tokens[1].is_raw_number());
        assert_eq!(tokens[1].number, Some(Number::integer(42)));
        assert!(tokens[2].has_category("digit"));
        assert_eq!(tokens[2].number, Some(Number::integer(3).with_ordinal(true)));
        assert!(tokens[3].categories.is_empty());
    }

    #[test]
    fn huge_digit_runs_become_decimals() {
        let tokens = Tokenizer::new(&ENGLISH).tokenize("123456789012345678901234567890");
        assert!(tokens[0].number.is_some_and(|n| n.is_decimal()));
    }
}
