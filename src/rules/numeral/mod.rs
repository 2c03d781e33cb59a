use crate::engine::TokenStream;
use crate::number::Number;

mod english;
pub(crate) mod helpers;


pub(crate) use english::EnglishNumerals;

/// How to read a numeral that could be an ordinal or the denominator of a
/// fraction, e.g. "twenty third".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberMode {
    /// "twenty third" is 20/3.
    #[default]
    PreferFraction,
    /// "twenty third" is 23rd.
    PreferOrdinal,
    /// Ordinals are never read; used for durations and special minutes.
    NoOrdinal,
    /// Only integers; fractions and decimal multipliers stop the numeral.
    IntegerOnly,
}

/// Numeral reading for one language.
///
/// The layers build on each other and each one can be called on its own:
/// [`number_integer`](Self::number_integer) reads digits, scale groups, year
/// forms and separated raw numbers; the `number_*` entry points add sign,
/// decimal point, fraction separators and suffix multipliers on top.
pub trait NumeralGrammar {
    fn number_integer(&self, ts: &mut TokenStream<'_>, allow_ordinal: bool) -> Option<Number>;

    /// Integer plus decimal point ("point four five") or fraction separator
    /// ("over sixteen"), with an optional leading sign.
    fn number_sign_point(&self, ts: &mut TokenStream<'_>, allow_ordinal: bool) -> Option<Number>;

    fn number_prefer_ordinal(&self, ts: &mut TokenStream<'_>) -> Option<Number>;

    fn number_prefer_fraction(&self, ts: &mut TokenStream<'_>) -> Option<Number>;

    fn number_no_ordinal(&self, ts: &mut TokenStream<'_>) -> Option<Number>;

    fn number_must_be_integer(&self, ts: &mut TokenStream<'_>) -> Option<Number>;

    fn number(&self, ts: &mut TokenStream<'_>, mode: NumberMode) -> Option<Number> {
        match mode {
            NumberMode::PreferFraction => self.number_prefer_fraction(ts),
            NumberMode::PreferOrdinal => self.number_prefer_ordinal(ts),
            NumberMode::NoOrdinal => self.number_no_ordinal(ts),
            NumberMode::IntegerOnly => self.number_must_be_integer(ts),
        }
    }
}
