use chrono::NaiveDateTime;

use crate::duration::Duration;
use crate::engine::Query;
use crate::locale::{Locale, LocaleError};
use crate::number::Number;
use crate::rules::duration::duration;
use crate::rules::numeral::EnglishNumerals;
use crate::rules::time::EnglishDateTime;
use crate::rules::{DateTimeGrammar, NumberMode, NumeralGrammar};

/// Extraction context.
///
/// This holds the environment needed to resolve relative expressions (like "tomorrow").
#[derive(Debug, Clone)]
pub struct Context {
    /// Reference datetime used to resolve relative expressions.
    pub reference_time: NaiveDateTime,
}

impl Default for Context {
    #[cfg(not(test))]
    fn default() -> Self {
        Self { reference_time: chrono::Local::now().naive_local() }
    }

    #[cfg(test)]
    fn default() -> Self {
        let date = chrono::NaiveDate::from_ymd_opt(2023, 2, 5).unwrap();
        Self { reference_time: date.and_hms_opt(9, 41, 12).unwrap() }
    }
}

/// Options that affect how ambiguous input is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// "billion" is 10^9; otherwise 10^12 ("thousand million" is 10^9).
    pub short_scale: bool,
    /// "twenty third" is 23rd rather than 20/3.
    pub prefer_ordinal: bool,
    /// Only whole numbers; overrides `prefer_ordinal`.
    pub integer_only: bool,
    /// "4/5" is April 5th rather than May 4th.
    pub prefer_month_before_day: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { short_scale: true, prefer_ordinal: false, integer_only: false, prefer_month_before_day: false }
    }
}

impl Options {
    pub fn number_mode(&self) -> NumberMode {
        if self.integer_only {
            NumberMode::IntegerOnly
        } else if self.prefer_ordinal {
            NumberMode::PreferOrdinal
        } else {
            NumberMode::PreferFraction
        }
    }
}

/// Numbers, durations and date/times for one locale.
///
/// # Example
/// ```
/// use numerus::{Extractor, Options, Segment};
///
/// let extractor = Extractor::new("en", Options::default()).unwrap();
/// let segments = extractor.durations("wait two hours, then 5 min").mixed_with_text();
/// assert_eq!(segments.len(), 4);
/// assert!(matches!(&segments[2], Segment::Text(text) if text == ", then "));
/// ```
#[derive(Debug, Clone)]
pub struct Extractor {
    locale: Locale,
    options: Options,
}

impl Extractor {
    /// Resolve `locale` (e.g. `en-US`) and keep `options` for every query.
    pub fn new(locale: &str, options: Options) -> Result<Self, LocaleError> {
        Ok(Self { locale: Locale::resolve(locale)?, options })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    fn numerals(&self) -> EnglishNumerals {
        match self.locale {
            Locale::English => EnglishNumerals::new(self.options.short_scale),
        }
    }

    pub fn numbers(&self, text: &str) -> Query<'static, Number> {
        let numerals = self.numerals();
        let mode = self.options.number_mode();
        Query::new(self.locale.tokenizer().tokenize(text), move |ts| numerals.number(ts, mode))
    }

    pub fn durations(&self, text: &str) -> Query<'static, Duration> {
        let numerals = self.numerals();
        Query::new(self.locale.tokenizer().tokenize(text), move |ts| duration(ts, &numerals))
    }

    /// Dates and times resolved against `context.reference_time`.
    pub fn date_times(&self, text: &str, context: &Context) -> Query<'static, NaiveDateTime> {
        let grammar = match self.locale {
            Locale::English => {
                EnglishDateTime::new(self.numerals(), self.options.prefer_month_before_day, context.reference_time)
            }
        };
        Query::new(self.locale.tokenizer().tokenize(text), move |ts| grammar.date_time(ts))
    }
}

fn english() -> Extractor {
    Extractor { locale: Locale::English, options: Options::default() }
}

/// First number in `text`, in English with default options.
///
/// ```
/// use numerus::{Number, extract_number};
///
/// assert_eq!(extract_number("I want three quarters"), Some(Number::decimal(0.75)));
/// ```
pub fn extract_number(text: &str) -> Option<Number> {
    english().numbers(text).first().map(|(number, _)| number)
}

/// First duration in `text`, in English with default options.
pub fn extract_duration(text: &str) -> Option<Duration> {
    english().durations(text).first().map(|(duration, _)| duration)
}

/// First date/time in `text`, in English with default options.
pub fn extract_date_time(text: &str, context: &Context) -> Option<NaiveDateTime> {
    english().date_times(text, context).first().map(|(date_time, _)| date_time)
}
