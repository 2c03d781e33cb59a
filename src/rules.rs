//! Locale grammars.
//!
//! Every grammar function takes the [`TokenStream`](crate::TokenStream) by
//! unique reference and either returns a value with the cursor moved past
//! what it read, or `None` with the cursor exactly where it was.
//!
//! - `numeral/`: numbers, fractions, ordinals (locale shape shared through
//!   [`NumeralGrammar`] and the helpers in `numeral/helpers.rs`)
//! - `duration.rs`: "two hours and a half", built on any numeral grammar
//! - `time/`: dates, times and relative expressions ([`DateTimeGrammar`])

pub(crate) mod duration;
pub(crate) mod numeral;
pub(crate) mod time;

pub use numeral::{NumberMode, NumeralGrammar};
pub use time::DateTimeGrammar;
