//! Locale identifiers and the per-language word tables behind the tokenizer.

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::DurationWord;
use crate::duration::{Duration, TimeUnit};
use crate::engine::Tokenizer;
use crate::number::Number;

#[path = "locale/english.rs"]
mod english;

pub(crate) use english::ENGLISH;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("no language support for locale `{requested}`")]
    Unsupported { requested: String },
}

/// A language with a lexicon and grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    English,
}

/// Language tags that resolve to a shipped locale, lowercase with `-`.
static SUPPORTED: &[(&str, Locale)] = &[("en", Locale::English)];

impl Locale {
    /// Resolve `identifier` (e.g. `en-US`, `en_gb`, `EN`) to a locale, falling
    /// back from the full tag to its base language.
    pub fn resolve(identifier: &str) -> Result<Locale, LocaleError> {
        let normalized = identifier.trim().replace('_', "-").to_ascii_lowercase();
        let base = normalized.split('-').next().unwrap_or_default();

        [normalized.as_str(), base]
            .into_iter()
            .find_map(|tag| SUPPORTED.iter().find(|(known, _)| *known == tag).map(|(_, locale)| *locale))
            .ok_or_else(|| LocaleError::Unsupported { requested: identifier.to_string() })
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
        }
    }

    pub fn lexicon(self) -> &'static Lexicon {
        match self {
            Locale::English => &ENGLISH,
        }
    }

    pub fn tokenizer(self) -> Tokenizer {
        Tokenizer::new(self.lexicon())
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::resolve(s)
    }
}

// --- Lexicon ----------------------------------------------------------------

/// What the tokenizer knows about one word.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Entry {
    pub categories: &'static [&'static str],
    pub number: Option<Number>,
    pub duration: Option<DurationWord>,
}

/// Tokenizer configuration for one language.
pub struct Lexicon {
    /// Splits text into (digits | single character | word) followed by spaces.
    pub(crate) splitter: fn() -> &'static Regex,
    pub(crate) raw_number_categories: &'static [&'static str],
    /// Tried in order when a word is not found as written.
    pub(crate) plural_endings: &'static [&'static str],
    pub(crate) entries: Lazy<HashMap<&'static str, Entry>>,
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("raw_number_categories", &self.raw_number_categories)
            .field("plural_endings", &self.plural_endings)
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl Lexicon {
    pub(crate) fn lookup(&self, word: &str) -> Option<&Entry> {
        self.entries.get(word)
    }
}

/// Collects word tables and merges them into lexicon entries.
///
/// A word in a number table takes its categories from there; otherwise from
/// the plain word table. Duration payloads are attached independently.
#[derive(Default)]
pub(crate) struct LexiconBuilder {
    words: HashMap<&'static str, &'static [&'static str]>,
    numbers: HashMap<&'static str, (&'static [&'static str], Number)>,
    durations: HashMap<&'static str, DurationWord>,
}

impl LexiconBuilder {
    pub fn words(&mut self, categories: &'static [&'static str], words: &[&'static str]) -> &mut Self {
        for word in words {
            self.words.insert(word, categories);
        }
        self
    }

    pub fn integers(&mut self, categories: &'static [&'static str], values: &[(&'static str, i64)]) -> &mut Self {
        for &(word, value) in values {
            self.numbers.insert(word, (categories, Number::integer(value)));
        }
        self
    }

    pub fn ordinals(&mut self, categories: &'static [&'static str], values: &[(&'static str, i64)]) -> &mut Self {
        for &(word, value) in values {
            self.numbers.insert(word, (categories, Number::integer(value).with_ordinal(true)));
        }
        self
    }

    pub fn decimals(&mut self, categories: &'static [&'static str], values: &[(&'static str, f64)]) -> &mut Self {
        for &(word, value) in values {
            self.numbers.insert(word, (categories, Number::decimal(value)));
        }
        self
    }

    pub fn durations(&mut self, unit: TimeUnit, words: &[&'static str]) -> &mut Self {
        for word in words {
            self.durations.insert(
                word,
                DurationWord { unit, multiplier: Duration::of(1, unit), restricted_after_number: false },
            );
        }
        self
    }

    /// Abbreviations that only count as a duration after a number.
    pub fn restricted_durations(&mut self, unit: TimeUnit, words: &[&'static str]) -> &mut Self {
        for word in words {
            self.durations.insert(
                word,
                DurationWord { unit, multiplier: Duration::of(1, unit), restricted_after_number: true },
            );
        }
        self
    }

    pub fn build(&self) -> HashMap<&'static str, Entry> {
        let mut entries = HashMap::new();
        let keys = self.words.keys().chain(self.numbers.keys()).chain(self.durations.keys());
        for &word in keys {
            if entries.contains_key(word) {
                continue;
            }
            let (categories, number) = match self.numbers.get(word) {
                Some(&(categories, number)) => (categories, Some(number)),
                None => (self.words.get(word).copied().unwrap_or(&[]), None),
            };
            entries.insert(word, Entry { categories, number, duration: self.durations.get(word).copied() });
        }
        entries
    }
}
