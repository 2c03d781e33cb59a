//! Durations: numbers followed by time units, summed over groups
//! ("two hours, 5 min and a second").

use crate::duration::Duration;
use crate::engine::TokenStream;
use crate::number::Number;
use crate::rules::numeral::NumeralGrammar;

/// Read a duration exactly at the cursor; nothing is skipped before the
/// first group, not even filler words.
pub(crate) fn duration<N: NumeralGrammar + ?Sized>(ts: &mut TokenStream<'_>, numerals: &N) -> Option<Duration> {
    let original = ts.position();
    let first = numerals.number_no_ordinal(ts);
    let Some(mut result) = duration_after_number(ts, first) else {
        ts.set_position(original);
        return None;
    };

    let mut last_found = ts.position();
    while !ts.finished() {
        let number = numerals.number_no_ordinal(ts);
        match duration_after_number(ts, number) {
            Some(group) => {
                result = result + group;
                last_found = ts.position();
            }
            None if number.is_none() && ts.get(0).has_category("ignore") => ts.advance(1),
            None => break,
        }
    }

    // drop trailing filler and any number without a unit
    ts.set_position(last_found);
    Some(result)
}

/// One group: `number` (already read) times the unit that follows, or a
/// bare unit when there is no number.
fn duration_after_number(ts: &mut TokenStream<'_>, number: Option<Number>) -> Option<Duration> {
    let Some(number) = number else {
        let word = ts.get(0).duration?;
        if word.restricted_after_number {
            // "s" or "h" on their own
            return None;
        }
        ts.advance(1);
        return Some(word.multiplier);
    };

    let mut next = ts.index_of_without_category("ignore", 0);
    if ts.get(next).has_category("duration_separator") {
        // a couple of hours
        next = ts.index_of_without_category("ignore", next + 1);
    }

    let word = ts.get(next).duration?;
    ts.advance(next + 1);
    Some(word.multiplier.multiply(number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    use crate::duration::TimeUnit;
    use crate::engine::{Query, Segment, Tokenizer};
    use crate::locale::ENGLISH;
    use crate::rules::numeral::EnglishNumerals;

    const SHORT: EnglishNumerals = EnglishNumerals { short_scale: true };
    const LONG: EnglishNumerals = EnglishNumerals { short_scale: false };

    const SECOND: i64 = 1_000_000_000;
    const MINUTE: i64 = 60 * SECOND;
    const HOUR: i64 = 60 * MINUTE;
    const MILLIS: i64 = 1_000_000;
    const MICROS: i64 = 1_000;

    fn nanos(n: i64) -> Duration {
        Duration::new(n, 0, 0, 0)
    }

    fn at_start(text: &str, numerals: EnglishNumerals) -> Option<Duration> {
        let tokens = Tokenizer::new(&ENGLISH).tokenize(text);
        let mut ts = TokenStream::new(&tokens);
        let found = duration(&mut ts, &numerals);
        if found.is_none() {
            assert_eq!(ts.position(), 0, "{text}");
        }
        found
    }

    #[test]
    fn number_and_unit() {
        let cases: Vec<(Duration, &str, EnglishNumerals)> = vec![
            (nanos(1000 * SECOND), "one billion nanoseconds", LONG),
            (nanos(SECOND), "one billion nanoseconds", SHORT),
            (nanos(1728 * MICROS), "seventeen twenty eight μs", LONG),
            (nanos(100 * MICROS), "one tenth millisecond", SHORT),
            (nanos(18 * SECOND), "18s", LONG),
            (nanos(SECOND), "one sec", LONG),
            (nanos(59 * MINUTE), "59 minute s", SHORT),
            (nanos(23 * HOUR), "twenty three hours", LONG),
            (nanos(HOUR / 2), "half an hour", SHORT),
            (Duration::of(70, TimeUnit::Days), "ten and weeks and", LONG),
            (Duration::of(6, TimeUnit::Months), "6 mo", SHORT),
            (Duration::of(3_000_000_000, TimeUnit::Years), "three billion years ago", SHORT),
            (Duration::of(150, TimeUnit::Years), "fifteen decades", SHORT),
            (Duration::of(1000, TimeUnit::Years), "1 millennium", LONG),
            (Duration::of(2, TimeUnit::Years), "two years ago", SHORT),
        ];
        for (expected, input, numerals) in cases {
            assert_eq!(at_start(input, numerals), Some(expected), "{input}");
        }
    }

    #[test]
    fn fractional_amounts_spill_into_smaller_units() {
        let cases: Vec<(TimeDelta, &str)> = vec![
            (TimeDelta::hours(12), "half a day"),
            (TimeDelta::hours(24) + TimeDelta::minutes(288), "one point 2 day"),
        ];
        for (expected, input) in cases {
            let found = at_start(input, SHORT).map(|d| d.to_time_delta());
            assert_eq!(found, Some(expected), "{input}");
        }
    }

    #[test]
    fn only_units() {
        let cases: Vec<(Duration, &str)> = vec![
            (Duration::new(HOUR + MINUTE, 0, 0, 1000), "hour minute millennium"),
            (nanos(SECOND + MILLIS + MICROS), "millisecond and second, microsecond"),
            (nanos(2 * SECOND), "seconds second s"),
            (nanos(MINUTE + HOUR), "minute hours s"),
        ];
        for (expected, input) in cases {
            assert_eq!(at_start(input, SHORT), Some(expected), "{input}");
        }
    }

    #[test]
    fn nothing_to_read() {
        for input in [
            "four three millennia four",
            "and ten and weeks and",
            "one hundred tests",
            "point three four grams",
            "hello millisecond",
            "it's good",
            "ns μs ms s m h d w mo yr",
            "plenty of seconds",
            "tens of lines of tests",
            "hello of s",
            "ms 5 ns ns",
        ] {
            assert_eq!(at_start(input, SHORT), None, "{input}");
        }
    }

    #[test]
    fn separators_and_groups() {
        let cases: Vec<(Duration, &str)> = vec![
            (nanos(200 * MILLIS), "two tenths of a second"),
            (nanos(2 * HOUR), "a couple of hours"),
            (nanos(20 * MINUTE + 36 * SECOND), "twenty minutes and thirty six and seconds because"),
            (Duration::new(21 * HOUR + 12 * MINUTE, 7, 0, 0), "seven days, 21 hours and twelve minutes to reach you"),
            (nanos(MINUTE + SECOND + MILLIS + MICROS + 1), "minute, seconds and millisecond, microseconds nanosecond test"),
            (nanos(5), "5 ns ns"),
        ];
        for (expected, input) in cases {
            assert_eq!(at_start(input, SHORT), Some(expected), "{input}");
        }
    }

    #[test]
    fn segments_text_around_durations() {
        let query = Query::new(Tokenizer::new(&ENGLISH).tokenize("2ns and four hours while six milliseconds."), |ts| {
            duration(ts, &LONG)
        });
        assert_eq!(
            query.mixed_with_text(),
            vec![
                Segment::Value(nanos(4 * HOUR + 2)),
                Segment::Text(" while ".to_string()),
                Segment::Value(nanos(6 * MILLIS)),
                Segment::Text(".".to_string()),
            ]
        );

        let query = Query::new(
            Tokenizer::new(&ENGLISH).tokenize("you know two years ago are not billions of day"),
            |ts| duration(ts, &SHORT),
        );
        assert_eq!(
            query.mixed_with_text(),
            vec![
                Segment::Text("you know ".to_string()),
                Segment::Value(Duration::of(2, TimeUnit::Years)),
                Segment::Text(" ago are not ".to_string()),
                Segment::Value(Duration::of(1_000_000_000, TimeUnit::Days)),
            ]
        );
    }
}
