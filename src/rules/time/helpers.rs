//! Date/time pieces that only look at token categories, shared by every
//! language with the same calendar vocabulary.

use chrono::{Datelike, NaiveDate};

use crate::duration::{Duration, TimeUnit};
use crate::engine::TokenStream;

pub(crate) const HOURS_IN_DAY: i64 = 24;
pub(crate) const DAYS_IN_WEEK: i64 = 7;
pub(crate) const MONTHS_IN_YEAR: i64 = 12;

/// Run `f` and put the cursor back if it fails.
pub(crate) fn restoring<T>(ts: &mut TokenStream<'_>, f: impl FnOnce(&mut TokenStream<'_>) -> Option<T>) -> Option<T> {
    let original = ts.position();
    let result = f(ts);
    if result.is_none() {
        ts.set_position(original);
    }
    result
}

pub(crate) fn is_moment_of_day_pm(hour: i64) -> bool {
    hour >= 12
}

/// `false` for the "before" word (AM, BC), `true` for the "after" one (PM,
/// AD). `prefix` selects the category family, `ampm` or `bcad`.
///
/// Split forms ("p.m.", "anno domini") need their identifier word, which may
/// be separated by date/time filler such as dots.
pub(crate) fn bcad_or_ampm(ts: &mut TokenStream<'_>, prefix: &str) -> Option<bool> {
    let token = ts.get(0);
    let has = |suffix: &str| token.has_category(&format!("{prefix}_{suffix}"));

    let after = if has("before") {
        false
    } else if has("after") {
        true
    } else if has("before_combined") {
        ts.advance(1);
        return Some(false);
    } else if has("after_combined") {
        ts.advance(1);
        return Some(true);
    } else {
        return None;
    };

    let identifier = format!("{prefix}_identifier");
    restoring(ts, |ts| {
        ts.advance(1);
        ts.try_or_skip_date_time_ignore(true, |ts| {
            ts.get(0).has_category(&identifier).then(|| ts.advance(1))
        })?;
        Some(after)
    })
}

fn payload(ts: &mut TokenStream<'_>, category: &str) -> Option<i64> {
    let token = ts.get(0);
    if !token.has_category(category) {
        return None;
    }
    let value = token.number?.as_i64()?;
    ts.advance(1);
    Some(value)
}

/// 1 for January.
pub(crate) fn month_name(ts: &mut TokenStream<'_>) -> Option<i64> {
    payload(ts, "month_name")
}

/// 0 for Monday.
pub(crate) fn day_of_week(ts: &mut TokenStream<'_>) -> Option<i64> {
    payload(ts, "day_of_week")
}

/// A minute or second value read by `integer`, swallowing a unit word of the
/// same kind right after it ("fifty one min").
pub(crate) fn minute_or_second(
    ts: &mut TokenStream<'_>,
    unit: TimeUnit,
    integer: impl FnOnce(&mut TokenStream<'_>) -> Option<i64>,
) -> Option<i64> {
    let value = integer(ts)?;
    if ts.get(0).duration.is_some_and(|word| word.unit == unit) {
        ts.advance(1);
    }
    Some(value)
}

pub(crate) fn relative_today(ts: &mut TokenStream<'_>) -> Option<i64> {
    if !ts.get(0).has_category("today") {
        return None;
    }
    ts.advance(1);
    Some(0)
}

/// "yesterday", "day before yesterday", "the day before yesterday".
pub(crate) fn relative_yesterday(ts: &mut TokenStream<'_>) -> Option<i64> {
    day_adder(ts, "day_adder_before", "yesterday", -1)
}

/// "tomorrow", "day after tomorrow", "the day after tomorrow".
pub(crate) fn relative_tomorrow(ts: &mut TokenStream<'_>) -> Option<i64> {
    day_adder(ts, "day_adder_after", "tomorrow", 1)
}

fn day_adder(ts: &mut TokenStream<'_>, adder: &str, day: &str, step: i64) -> Option<i64> {
    let matches = |ts: &TokenStream<'_>, categories: &[&str]| {
        categories.iter().enumerate().all(|(i, category)| ts.get(i as isize).has_category(category))
    };

    if matches(ts, &["day_adder_the", "day_adder_day", adder, day]) {
        ts.advance(4);
        Some(2 * step)
    } else if matches(ts, &["day_adder_day", adder, day]) {
        ts.advance(3);
        Some(2 * step)
    } else if matches(ts, &[day]) {
        ts.advance(1);
        Some(step)
    } else {
        None
    }
}

/// `extract` preceded by a relative indicator ("in", "next", "last") or
/// followed by one ("ago", "later"). A negative indicator turns the result
/// into `opposite(result)`. Without any indicator nothing is read.
pub(crate) fn relative_indicator_duration(
    ts: &mut TokenStream<'_>,
    extract: impl FnOnce(&mut TokenStream<'_>) -> Option<Duration>,
    opposite: impl FnOnce(Duration) -> Duration,
) -> Option<Duration> {
    restoring(ts, |ts| {
        let sign_of = |negative: bool| if negative { -1 } else { 1 };

        let mut sign = 0;
        let pre = ts.get(0);
        if pre.has_category("pre_relative_indicator") {
            sign = sign_of(pre.has_category("negative"));
            let next = ts.index_of_without_category("date_time_ignore", 1);
            ts.advance(next);
        }

        let result = extract(ts)?;

        if sign == 0 {
            let next = ts.index_of_without_category("date_time_ignore", 0);
            let post = ts.get(next);
            if post.has_category("post_relative_indicator") {
                sign = sign_of(post.has_category("negative"));
                ts.advance(next + 1);
            }
        }

        match sign {
            0 => None,
            -1 => Some(opposite(result)),
            _ => Some(result),
        }
    })
}

/// "next friday", "in two sundays", "last monday" as a number of days from
/// `today`. A weekday equal to today's means a week away, never zero days.
pub(crate) fn relative_day_of_week_duration(
    ts: &mut TokenStream<'_>,
    today: NaiveDate,
    count: impl FnOnce(&mut TokenStream<'_>) -> Option<i64>,
) -> Option<Duration> {
    let current = i64::from(today.weekday().num_days_from_monday());
    relative_indicator_duration(
        ts,
        |ts| {
            let number = match count(ts) {
                Some(number) => {
                    let next = ts.index_of_without_category("date_time_ignore", 0);
                    ts.advance(next);
                    number
                }
                None => 1,
            };

            let day = day_of_week(ts)?;
            let diff = day - current;
            let same_day = if diff == 0 { DAYS_IN_WEEK } else { 0 };
            let offset = (diff + DAYS_IN_WEEK) % DAYS_IN_WEEK + same_day + (number - 1) * DAYS_IN_WEEK;
            Some(Duration::of(offset, TimeUnit::Days))
        },
        |forward| {
            let offset = forward.days;
            let back = if offset % DAYS_IN_WEEK == 0 {
                -offset
            } else {
                2 * (offset % DAYS_IN_WEEK) - DAYS_IN_WEEK - offset
            };
            Duration::of(back, TimeUnit::Days)
        },
    )
}

/// "next march", "last march" as a number of months from `today`.
pub(crate) fn relative_month_duration(ts: &mut TokenStream<'_>, today: NaiveDate) -> Option<Duration> {
    let current = i64::from(today.month());
    relative_indicator_duration(
        ts,
        |ts| {
            let diff = month_name(ts)? - current;
            let same_month = if diff == 0 { MONTHS_IN_YEAR } else { 0 };
            Some(Duration::of((diff + MONTHS_IN_YEAR) % MONTHS_IN_YEAR + same_month, TimeUnit::Months))
        },
        |forward| {
            let back = if forward.months == MONTHS_IN_YEAR { -MONTHS_IN_YEAR } else { forward.months - MONTHS_IN_YEAR };
            Duration::of(back, TimeUnit::Months)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tokenizer;
    use crate::locale::ENGLISH;

    // a Sunday in February
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 2, 5).unwrap()
    }

    fn run<T>(text: &str, f: impl FnOnce(&mut TokenStream<'_>) -> Option<T>) -> (Option<T>, usize) {
        let tokens = Tokenizer::new(&ENGLISH).tokenize(text);
        let mut ts = TokenStream::new(&tokens);
        let value = f(&mut ts);
        (value, ts.position())
    }

    fn raw_count(ts: &mut TokenStream<'_>) -> Option<i64> {
        let n = ts.get(0).number.filter(|_| ts.get(0).is_raw_number())?.as_i64()?;
        ts.advance(1);
        Some(n)
    }

    #[test]
    fn ampm_words() {
        let cases: Vec<(Option<bool>, usize, &str)> = vec![
            (Some(false), 1, "am"),
            (Some(true), 1, "pm test"),
            (Some(true), 3, "p.m."),
            (Some(false), 3, "a.m"),
            (Some(true), 2, "post meridiem"),
            (Some(false), 2, "ante meridiem"),
            (None, 0, "p test"),
            (None, 0, "meridiem"),
            (None, 0, "ante and"),
        ];
        for (expected, position, input) in cases {
            assert_eq!(run(input, |ts| bcad_or_ampm(ts, "ampm")), (expected, position), "{input}");
        }
    }

    #[test]
    fn bcad_words() {
        let cases: Vec<(Option<bool>, usize, &str)> = vec![
            (Some(false), 1, "bce"),
            (Some(false), 1, "bc"),
            (Some(true), 1, "ad"),
            (Some(false), 3, "b.c."),
            (Some(true), 2, "anno domini"),
            (Some(false), 2, "before christ"),
            (Some(true), 2, "current era"),
            (Some(false), 2, "before current era"),
            (None, 0, "anno"),
            (None, 0, "era"),
        ];
        for (expected, position, input) in cases {
            assert_eq!(run(input, |ts| bcad_or_ampm(ts, "bcad")), (expected, position), "{input}");
        }
    }

    #[test]
    fn minute_swallows_its_own_unit_only() {
        let minute = |ts: &mut TokenStream<'_>| minute_or_second(ts, TimeUnit::Minutes, raw_count);
        assert_eq!(run("51 min", minute), (Some(51), 2));
        assert_eq!(run("51 seconds", minute), (Some(51), 1));
        assert_eq!(run("min", minute), (None, 0));
    }

    #[test]
    fn day_adders() {
        let cases: Vec<(Option<i64>, usize, &str)> = vec![
            (Some(-2), 4, "the day before yesterday"),
            (Some(-2), 3, "day before yesterday"),
            (Some(-1), 1, "yesterday"),
            (None, 0, "the yesterday"),
            (None, 0, "day after yesterday"),
        ];
        for (expected, position, input) in cases {
            assert_eq!(run(input, relative_yesterday), (expected, position), "{input}");
        }

        assert_eq!(run("day after tomorrow", relative_tomorrow), (Some(2), 3));
        assert_eq!(run("the day after morrow", relative_tomorrow), (Some(2), 4));
        assert_eq!(run("day after the tomorrow", relative_tomorrow), (None, 0));
        assert_eq!(run("today", relative_today), (Some(0), 1));
    }

    #[test]
    fn relative_indicator_needs_a_sign() {
        let two_days = |ts: &mut TokenStream<'_>| {
            let n = raw_count(ts)?;
            let next = ts.index_of_without_category("ignore", 0);
            ts.get(next).duration?;
            ts.advance(next + 1);
            Some(Duration::of(n, TimeUnit::Days))
        };
        let relative = |ts: &mut TokenStream<'_>| relative_indicator_duration(ts, two_days, |d| -d);

        assert_eq!(run("in 2 days", relative), (Some(Duration::of(2, TimeUnit::Days)), 3));
        assert_eq!(run("2 days ago", relative), (Some(Duration::of(-2, TimeUnit::Days)), 3));
        assert_eq!(run("2 days later", relative), (Some(Duration::of(2, TimeUnit::Days)), 3));
        assert_eq!(run("last 2 days", relative), (Some(Duration::of(-2, TimeUnit::Days)), 3));
        assert_eq!(run("2 days", relative), (None, 0));
        assert_eq!(run("in days", relative), (None, 0));
    }

    #[test]
    fn weekdays_relative_to_a_sunday() {
        let cases: Vec<(Option<i64>, usize, &str)> = vec![
            (Some(5), 2, "next friday"),
            (Some(7), 2, "next sunday"),
            (Some(1), 2, "after monday"),
            (Some(-2), 2, "last friday"),
            (Some(-7), 2, "last sunday"),
            (Some(-6), 2, "previous mon"),
            (Some(12), 3, "in 2 fridays"),
            (Some(-9), 3, "last 2 fridays"),
            (Some(2), 2, "tuesday after"),
            (None, 0, "friday"),
            (None, 0, "next week"),
        ];
        for (expected, position, input) in cases {
            let (found, consumed) = run(input, |ts| relative_day_of_week_duration(ts, today(), raw_count));
            assert_eq!((found.map(|d| d.days), consumed), (expected, position), "{input}");
        }
    }

    #[test]
    fn months_relative_to_february() {
        let cases: Vec<(Option<i64>, usize, &str)> = vec![
            (Some(1), 2, "next march"),
            (Some(12), 2, "next february"),
            (Some(-11), 2, "last march"),
            (Some(-1), 2, "last january"),
            (Some(-12), 2, "last feb"),
            (Some(11), 2, "january later"),
            (None, 0, "march"),
        ];
        for (expected, position, input) in cases {
            let (found, consumed) = run(input, |ts| relative_month_duration(ts, today()));
            assert_eq!((found.map(|d| d.months), consumed), (expected, position), "{input}");
        }
    }
}
