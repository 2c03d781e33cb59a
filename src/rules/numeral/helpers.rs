//! Numeral layers shared by every language that counts in hundreds and
//! powers of a thousand.

use crate::engine::TokenStream;
use crate::number::Number;

/// Read up to one hundreds, one tens (or teen) and one units slot, e.g.
/// "four hundred and nine" or "192".
///
/// A word that would fill an already bound slot ends the numeral there. An
/// ordinal word, or a raw number followed by st/nd/rd/th, is always last.
pub(crate) fn less_than_1000(ts: &mut TokenStream<'_>, allow_ordinal: bool) -> Option<Number> {
    let (mut hundred, mut ten, mut digit) = (None::<i64>, None::<i64>, None::<i64>);
    let mut ordinal = false;
    let mut first = true;

    loop {
        // filler is only skipped once something was read
        let next = if std::mem::take(&mut first) { 0 } else { ts.index_of_without_category("ignore", 0) };
        let token = ts.get(next);
        if !allow_ordinal && token.has_category("ordinal") {
            break;
        }
        let value = token.number.and_then(|n| n.as_i64());

        if token.has_category("digit") {
            let Some(v) = value else { break };
            // no "twenty zero" or "hundred nought"
            if digit.is_none() && (v != 0 || (ten.is_none() && hundred.is_none())) {
                digit = Some(v);
            } else {
                break;
            }
        } else if token.has_category("teen") {
            let Some(v) = value else { break };
            if ten.is_none() && digit.is_none() {
                ten = Some(v);
                digit = Some(0);
            } else {
                break;
            }
        } else if token.has_category("tens") {
            let Some(v) = value else { break };
            if ten.is_none() && digit.is_none() {
                ten = Some(v);
            } else {
                break;
            }
        } else if token.has_category("hundred") {
            if hundred.is_some() || ten.is_some() {
                break;
            }
            match digit {
                None => hundred = Some(100),
                Some(0) => break,
                Some(d) => {
                    hundred = Some(d * 100);
                    digit = None;
                }
            }
        } else if token.is_raw_number() {
            // decimals here are runs of dozens of digits
            let Some(raw) = value else { break };
            let suffixed = ts.get(next + 1).has_category("ordinal_suffix");
            if !allow_ordinal && suffixed {
                break;
            }

            if raw < 10 {
                if digit.is_some() {
                    break;
                }
                digit = Some(raw);
            } else if raw < 100 {
                if ten.is_some() || digit.is_some() {
                    break;
                }
                ten = Some(raw);
                digit = Some(0);
            } else if raw < 1000 {
                if hundred.is_some() || ten.is_some() || digit.is_some() {
                    break;
                }
                hundred = Some(raw);
                ten = Some(0);
                digit = Some(0);
            } else {
                break;
            }

            if suffixed {
                ordinal = true;
                ts.advance(next + 2);
                break;
            }
        } else {
            break;
        }

        ts.advance(next + 1);
        if ts.get(-1).has_category("ordinal") {
            ordinal = true;
            break;
        }
    }

    if hundred.is_none() && ten.is_none() && digit.is_none() {
        return None;
    }
    let total = hundred.unwrap_or(0) + ten.unwrap_or(0) + digit.unwrap_or(0);
    Some(Number::integer(total).with_ordinal(ordinal))
}

/// One short-scale group: a number below a thousand, a multiplier, or both
/// ("thirteen billion"). The multiplier must be smaller than `last_multiplier`.
pub(crate) fn group_short_scale(ts: &mut TokenStream<'_>, allow_ordinal: bool, last_multiplier: f64) -> Option<Number> {
    if last_multiplier < 1000.0 {
        // two groups below a thousand never follow each other
        return None;
    }

    let original = ts.position();
    let group = less_than_1000(ts, allow_ordinal);
    if group.is_some_and(|g| g.is_ordinal()) {
        return group;
    }

    let next = if group.is_some() { ts.index_of_without_category("ignore", 0) } else { 0 };
    let token = ts.get(next);
    let ordinal = token.has_category("ordinal");
    let multiplier = match token.number {
        Some(m) if token.has_category("multiplier") && (allow_ordinal || !ordinal) => m,
        _ => return group,
    };

    if multiplier.less_than(last_multiplier) {
        ts.advance(next + 1);
        let value = match group {
            None => multiplier,
            Some(g) => multiplier.multiply(g),
        };
        return Some(value.with_ordinal(ordinal));
    }

    ts.set_position(original);
    None
}

/// Sum as many groups as `group_at` reads, e.g. 123 billion + 45 million +
/// 6 thousand + 78. Each call gets the value of the previous group so it can
/// refuse a multiplier that is not strictly smaller.
pub(crate) fn made_of_groups(
    ts: &mut TokenStream<'_>,
    mut group_at: impl FnMut(&mut TokenStream<'_>, f64) -> Option<Number>,
) -> Option<Number> {
    let mut groups: Option<Number> = None;
    let mut last_multiplier = f64::MAX;

    loop {
        let skip = groups.is_some();
        let Some(group) = ts.try_or_skip_category("ignore", skip, |ts| group_at(ts, last_multiplier)) else {
            break;
        };

        let total = groups.map_or(group, |g| g.plus(group));
        if group.is_ordinal() {
            return Some(total.with_ordinal(true));
        }
        groups = Some(total);
        last_multiplier = group.as_f64();
    }
    groups
}

/// A raw number of any size, optionally followed by st/nd/rd/th.
pub(crate) fn big_raw(ts: &mut TokenStream<'_>, allow_ordinal: bool) -> Option<Number> {
    let token = ts.get(0);
    if !token.is_raw_number() {
        return None;
    }
    let ordinal = ts.get(1).has_category("ordinal_suffix");
    if ordinal && !allow_ordinal {
        return None;
    }
    let number = token.number?;
    ts.advance(if ordinal { 2 } else { 1 });
    Some(number.with_ordinal(ordinal))
}

/// Read an optional sign ("minus", "+") and then `number`.
pub(crate) fn sign_before_number(
    ts: &mut TokenStream<'_>,
    number: impl FnOnce(&mut TokenStream<'_>) -> Option<Number>,
) -> Option<Number> {
    let sign = ts.get(0);
    if !sign.has_category("sign") {
        return number(ts);
    }

    let factor = if sign.has_category("negative") { -1 } else { 1 };
    ts.advance(1);
    match number(ts) {
        Some(n) => Some(n.multiply(Number::integer(factor)).with_ordinal(n.is_ordinal())),
        None => {
            ts.advance(-1);
            None
        }
    }
}

/// `number` as an integer within `[from, to]`, ignoring the ordinal flag.
pub(crate) fn integer_in_range(
    ts: &mut TokenStream<'_>,
    from: i64,
    to: i64,
    number: impl FnOnce(&mut TokenStream<'_>) -> Option<Number>,
) -> Option<i64> {
    let original = ts.position();
    let value = number(ts).and_then(|n| n.as_i64()).filter(|v| (from..=to).contains(v));
    if value.is_none() {
        ts.set_position(original);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tokenizer;
    use crate::locale::ENGLISH;

    fn run<T>(text: &str, f: impl FnOnce(&mut TokenStream<'_>) -> Option<T>) -> (Option<T>, usize) {
        let tokens = Tokenizer::new(&ENGLISH).tokenize(text);
        let mut ts = TokenStream::new(&tokens);
        let value = f(&mut ts);
        (value, ts.position())
    }

    #[test]
    fn less_than_1000_fills_each_slot_once() {
        // (expected value, ordinal, tokens consumed, input, allow ordinal)
        let cases: Vec<(i64, bool, usize, &str, bool)> = vec![
            (115, false, 4, "one hundred and fifteen", false),
            (809, false, 4, "eight hundred and nine", false),
            (23, false, 2, "twenty three", false),
            (20, false, 1, "twenty zero", false),
            (7, false, 1, "seven eight", false),
            (100, false, 1, "hundred", false),
            (192, false, 1, "192", false),
            (20, false, 1, "20 6", false),
            (407, true, 2, "407th", true),
            (200, true, 2, "two hundredth", true),
            (2, false, 1, "two hundredth", false),
            (13, false, 1, "thirteen twenty", false),
            (0, false, 1, "zero hundred", false),
        ];
        for (value, ordinal, consumed, input, allow_ordinal) in cases {
            let (n, position) = run(input, |ts| less_than_1000(ts, allow_ordinal));
            assert_eq!(n, Some(Number::integer(value).with_ordinal(ordinal)), "{input}");
            assert_eq!(position, consumed, "{input}");
        }
    }

    #[test]
    fn less_than_1000_never_starts_on_filler() {
        for input in ["", "and one", ", two", "1234", "hello"] {
            assert_eq!(run(input, |ts| less_than_1000(ts, true)), (None, 0), "{input}");
        }
    }

    #[test]
    fn group_refuses_bigger_multiplier() {
        let (n, position) = run("seven billion", |ts| group_short_scale(ts, false, 1e6));
        assert_eq!((n, position), (None, 0));

        let (n, position) = run("seven million", |ts| group_short_scale(ts, false, 1e9));
        assert_eq!((n, position), (Some(Number::integer(7_000_000)), 2));

        let (n, position) = run("three", |ts| group_short_scale(ts, false, 100.0));
        assert_eq!((n, position), (None, 0));
    }

    #[test]
    fn groups_stop_at_equal_magnitude() {
        let (n, position) =
            run("one thousand thousand", |ts| made_of_groups(ts, |ts, last| group_short_scale(ts, true, last)));
        assert_eq!((n, position), (Some(Number::integer(1000)), 2));

        let (n, position) = run("two million, three thousand and five", |ts| {
            made_of_groups(ts, |ts, last| group_short_scale(ts, true, last))
        });
        assert_eq!((n, position), (Some(Number::integer(2_003_005)), 7));
    }

    #[test]
    fn sign_is_given_back_on_failure() {
        let (n, position) = run("minus hello", |ts| sign_before_number(ts, |ts| less_than_1000(ts, false)));
        assert_eq!((n, position), (None, 0));

        let (n, position) = run("- 12", |ts| sign_before_number(ts, |ts| less_than_1000(ts, false)));
        assert_eq!((n, position), (Some(Number::integer(-12)), 2));
    }

    #[test]
    fn integer_in_range_rejects_out_of_range() {
        let (n, position) = run("forty two", |ts| integer_in_range(ts, 0, 24, |ts| less_than_1000(ts, false)));
        assert_eq!((n, position), (None, 0));
        let (n, position) = run("twenty", |ts| integer_in_range(ts, 0, 24, |ts| less_than_1000(ts, false)));
        assert_eq!((n, position), (Some(20), 1));
    }
}
