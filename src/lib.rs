//! Extraction of spoken numbers, durations and date/times from text.
//!
//! Text is split into category-tagged [`Token`]s by a per-locale lexicon,
//! walked by hand-written recursive-descent grammars over a
//! [`TokenStream`], and turned into results by the query engine in one of
//! three modes: first match, text segmentation or interval enumeration.
//!
//! ```
//! use numerus::{Extractor, Number, Options};
//!
//! let extractor = Extractor::new("en-US", Options::default()).unwrap();
//! let (number, _) = extractor.numbers("I want twenty three apples").first().unwrap();
//! assert_eq!(number, Number::integer(23));
//! ```

#[macro_use]
mod macros;
mod api;
mod duration;
mod engine;
mod locale;
mod number;
mod rules;

pub use api::{Context, Extractor, Options, extract_date_time, extract_duration, extract_number};
pub use duration::{Duration, TimeUnit};
pub use engine::{MatchedRange, Query, Segment, Span, TokenStream, Tokenizer};
pub use locale::{Locale, LocaleError};
pub use number::{Number, Value};
pub use rules::{DateTimeGrammar, NumberMode, NumeralGrammar};

// --- Tokens -----------------------------------------------------------------

/// Payload of a word that names a unit of time, e.g. "minutes" or "ms".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationWord {
    pub unit: TimeUnit,
    /// One of `unit`, as a ready-made duration.
    pub multiplier: Duration,
    /// Abbreviations such as "s" or "h" only count after a number.
    pub restricted_after_number: bool,
}

/// One word, digit run or punctuation character of the input.
///
/// Tokens are produced once by the [`Tokenizer`] and never mutated. The
/// category set comes from the locale lexicon and is queried by name, so a
/// lexicon can introduce categories without touching grammar code.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Text as it appears in the input (original case).
    pub value: String,
    pub spaces_following: String,
    /// Byte offset of `value` in the input.
    pub position: usize,
    pub categories: &'static [&'static str],
    pub number: Option<Number>,
    pub duration: Option<DurationWord>,
}

/// Returned for lookahead outside the stream; it has no categories.
pub(crate) static EMPTY_TOKEN: Token = Token {
    value: String::new(),
    spaces_following: String::new(),
    position: usize::MAX,
    categories: &[],
    number: None,
    duration: None,
};

impl Token {
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(&category)
    }

    /// Case-insensitive comparison with the raw text.
    pub fn is_value(&self, value: &str) -> bool {
        self.value.eq_ignore_ascii_case(value)
    }

    pub fn is_number_equal_to(&self, integer: i64) -> bool {
        self.number.is_some_and(|n| n.is_integer_equal_to(integer))
    }

    /// A digit run straight from the input, e.g. `1207`.
    pub fn is_raw_number(&self) -> bool {
        self.has_category("number") && self.has_category("raw")
    }

    /// Byte offset one past the end of `value`.
    pub fn end(&self) -> usize {
        self.position.saturating_add(self.value.len())
    }
}
