use chrono::NaiveDateTime;

use crate::engine::TokenStream;

mod english;
pub(crate) mod helpers;


pub(crate) use english::EnglishDateTime;

/// Date and time reading for one language, relative to the reference
/// instant the grammar was built with.
///
/// A match may be a date, a time or both; missing parts are filled from the
/// reference instant (today's date, or the current time of day).
pub trait DateTimeGrammar {
    fn date_time(&self, ts: &mut TokenStream<'_>) -> Option<NaiveDateTime>;
}
