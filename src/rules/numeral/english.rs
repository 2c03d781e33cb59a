use crate::engine::TokenStream;
use crate::number::Number;
use crate::rules::numeral::NumeralGrammar;
use crate::rules::numeral::helpers::{
    big_raw, group_short_scale, less_than_1000, made_of_groups, sign_before_number,
};

/// English numerals, short scale ("billion" = 10^9) or long scale
/// ("billion" = 10^12, "thousand million" = 10^9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EnglishNumerals {
    pub short_scale: bool,
}

impl EnglishNumerals {
    pub fn new(short_scale: bool) -> Self {
        Self { short_scale }
    }

    /// The whole-number layer without the article rule.
    fn integer(&self, ts: &mut TokenStream<'_>, allow_ordinal: bool) -> Option<Number> {
        let start = ts.position();
        let groups = made_of_groups(ts, |ts, last| {
            if self.short_scale {
                group_short_scale(ts, allow_ordinal, last)
            } else {
                group_long_scale(ts, allow_ordinal, last)
            }
        });

        let Some(mut n) = groups else {
            return big_raw(ts, allow_ordinal);
        };
        if n.is_ordinal() {
            // "million twelfth": the ordinal word is always last
            return Some(n);
        }

        // 1001 to 2099 read as years, e.g. nineteen eighty four
        if n.less_than(21.0) && n.more_than(9.0) && !ts.get(-1).has_category("raw") {
            if let Some(second) = year_second_group(ts, allow_ordinal) {
                return Some(n.multiply(Number::integer(100)).plus(second).with_ordinal(second.is_ordinal()));
            }
        }

        // twenty six hundred
        if n.less_than(100.0) {
            let next = ts.index_of_without_category("ignore", 0);
            let token = ts.get(next);
            let ordinal = token.has_category("ordinal");
            if token.has_category("hundred") && (allow_ordinal || !ordinal) {
                ts.advance(next + 1);
                return Some(n.multiply(Number::integer(100)).with_ordinal(ordinal));
            }
        }

        // 123,045,006 with the cursor on the first comma
        if n.less_than(1000.0)
            && ts.get(-1).is_raw_number()
            && ts.get(0).has_category("thousand_separator")
            && is_three_digit_group(ts, 1)
        {
            while ts.get(0).has_category("thousand_separator") && is_three_digit_group(ts, 1) {
                let Some(group) = ts.get(1).number else { break };
                n = n.multiply(Number::integer(1000)).plus(group);
                ts.advance(2);
            }

            if ts.get(0).has_category("ordinal_suffix") {
                if allow_ordinal {
                    ts.advance(1);
                    return Some(n.with_ordinal(true));
                }
                ts.set_position(start);
                return None;
            }
        }

        Some(n)
    }

    /// Decimal point or fraction separator after an integer.
    fn number_point(&self, ts: &mut TokenStream<'_>, allow_ordinal: bool) -> Option<Number> {
        let n = self.number_integer(ts, allow_ordinal);
        if n.is_some_and(|n| n.is_ordinal()) {
            return n;
        }

        if ts.get(0).has_category("point") {
            let after = ts.get(1);
            if !after.has_category("digit_after_point")
                && (!after.is_raw_number() || ts.get(2).has_category("ordinal_suffix"))
            {
                // a lone point after the number, e.g. the end of a sentence
                return n;
            }
            ts.advance(1);
            return Some(decimal_digits(ts, n.unwrap_or(Number::decimal(0.0))));
        }

        if let Some(numerator) = n.filter(|_| ts.get(0).has_category("fraction_separator")) {
            let original = ts.position();
            ts.advance(1);
            if ts.get(0).has_category("fraction_separator_secondary") {
                // divided by
                ts.advance(1);
            }
            match self.number_integer(ts, false) {
                Some(denominator) if denominator.as_f64() != 0.0 => return Some(numerator.divide(denominator)),
                _ => ts.set_position(original),
            }
        }

        n
    }

    /// Turn `n` into a fraction when a denominator or suffix multiplier
    /// follows, e.g. "three fifths", "sixteen quarters". With no `n`, reads
    /// "a tenth".
    fn divide_by_denominator_if_possible(&self, ts: &mut TokenStream<'_>, n: Option<Number>) -> Option<Number> {
        let Some(n) = n else {
            if !ts.get(0).has_category("article") {
                return None;
            }
            let original = ts.position();
            ts.advance(1);
            match self.number_integer(ts, true) {
                Some(denominator) if denominator.is_ordinal() && denominator.more_than(2.0) => {
                    return Some(Number::integer(1).divide(denominator));
                }
                _ => {
                    ts.set_position(original);
                    return None;
                }
            }
        };

        // huge long-scale integers are decimals too; they never take a denominator
        if n.is_ordinal() || n.is_decimal() || ts.get(0).has_category("ignore") {
            return Some(n);
        }

        let original = ts.position();
        match self.number_integer(ts, true) {
            None => {
                let token = ts.get(0);
                if let Some(multiplier) = token.number.filter(|_| token.has_category("suffix_multiplier")) {
                    ts.advance(1);
                    if multiplier.is_decimal() {
                        let reciprocal = 1.0 / multiplier.as_f64();
                        if reciprocal == (reciprocal as i64) as f64 {
                            // exact fraction: keep "sixteen quarters" an integer
                            return Some(n.divide(Number::integer(reciprocal as i64)));
                        }
                    }
                    return Some(n.multiply(multiplier));
                }
            }
            // 1 and 2 are "a" and "half", never denominators
            Some(denominator) if denominator.is_ordinal() && denominator.more_than(2.0) => {
                return Some(n.divide(denominator));
            }
            Some(_) => ts.set_position(original),
        }
        Some(n)
    }
}

fn is_three_digit_group(ts: &TokenStream<'_>, offset: isize) -> bool {
    let token = ts.get(offset);
    token.value.len() == 3 && token.is_raw_number()
}

/// Digits after a decimal point: one raw run (".0123") or single digits
/// ("point one six 5 one").
fn decimal_digits(ts: &mut TokenStream<'_>, integer: Number) -> Number {
    let mut n = integer;
    let mut magnitude = 0.1;

    let run = ts.get(0);
    if run.value.len() > 1 && run.is_raw_number() {
        for digit in run.value.bytes() {
            n = n.plus(Number::decimal(f64::from(digit - b'0') * magnitude));
            magnitude /= 10.0;
        }
        ts.advance(1);
        return n;
    }

    loop {
        let token = ts.get(0);
        let single_raw = token.value.len() == 1 && token.is_raw_number() && !ts.get(1).has_category("ordinal_suffix");
        if !(token.has_category("digit_after_point") || single_raw) {
            break;
        }
        let Some(digit) = token.number else { break };
        n = n.plus(digit.multiply(Number::decimal(magnitude)));
        magnitude /= 10.0;
        ts.advance(1);
    }
    n
}

/// "a dozen", "half", "percent".
fn suffix_multiplier(ts: &mut TokenStream<'_>, integer_only: bool) -> Option<Number> {
    let at = if ts.get(0).has_category("suffix_multiplier") {
        0
    } else if ts.get(0).has_category("article") && ts.get(1).has_category("suffix_multiplier") {
        1
    } else {
        return None;
    };

    let number = ts.get(at).number.filter(|n| !integer_only || n.is_integer())?;
    ts.advance(at + 1);
    Some(number)
}

/// The last two digits of a year: "oh five", "thirteen", "82", "eighty two".
fn year_second_group(ts: &mut TokenStream<'_>, allow_ordinal: bool) -> Option<Number> {
    // skips the dash in nineteen-oh-two
    let next = ts.index_of_without_category("ignore", 0);
    let token = ts.get(next);

    if token.has_category("number") && token.is_number_equal_to(0) {
        let digit_index = ts.index_of_without_category("ignore", next + 1);
        let digit = ts.get(digit_index);
        let ordinal = digit.has_category("ordinal");
        let value = digit.number.filter(|d| digit.has_category("number") && d.less_than(10.0))?;
        if allow_ordinal || !ordinal {
            ts.advance(digit_index + 1);
            return Some(value.with_ordinal(ordinal));
        }
    } else if token.has_category("teen") {
        let ordinal = token.has_category("ordinal");
        if ordinal && !allow_ordinal {
            return None;
        }
        let value = token.number?;
        ts.advance(next + 1);
        return Some(value.with_ordinal(ordinal));
    } else if token.value.len() == 2 && token.is_raw_number() {
        let ordinal = ts.get(next + 1).has_category("ordinal_suffix");
        if ordinal && !allow_ordinal {
            return None;
        }
        let value = token.number?;
        ts.advance(next + if ordinal { 2 } else { 1 });
        return Some(value.with_ordinal(ordinal));
    } else if token.has_category("tens") {
        let tens = token.number?;
        if token.has_category("ordinal") {
            // nothing follows an ordinal: twenty twentieth
            if !allow_ordinal {
                return None;
            }
            ts.advance(next + 1);
            return Some(tens.with_ordinal(true));
        }
        ts.advance(next + 1);

        let digit_index = ts.index_of_without_category("ignore", 0);
        let digit = ts.get(digit_index);
        let ordinal = digit.has_category("ordinal");
        if let Some(units) = digit.number.filter(|_| digit.has_category("digit") && (allow_ordinal || !ordinal)) {
            ts.advance(digit_index + 1);
            return Some(tens.plus(units).with_ordinal(ordinal));
        }
        // seventeen fifty
        return Some(tens);
    }

    None
}

/// One long-scale group: a number below a million followed by an optional
/// million/billion/... multiplier smaller than `last_multiplier`.
fn group_long_scale(ts: &mut TokenStream<'_>, allow_ordinal: bool, last_multiplier: f64) -> Option<Number> {
    if last_multiplier < 1_000_000.0 {
        return None;
    }

    let original = ts.position();
    let mut first = group_short_scale(ts, allow_ordinal, 1_000_000.0);
    match first {
        None => {
            // nothing, or a number followed by a multiplier other than thousand
            first = less_than_1000(ts, allow_ordinal);
            if first.is_some_and(|f| f.is_ordinal()) {
                return first;
            }

            if first.is_none() {
                let raw = ts.get(0);
                if let Some(value) = raw.number.filter(|v| raw.is_raw_number() && v.less_than(1_000_000.0)) {
                    if ts.get(1).has_category("ordinal_suffix") {
                        if !allow_ordinal {
                            return None;
                        }
                        ts.advance(2);
                        return Some(value.with_ordinal(true));
                    }
                    ts.advance(1);
                    first = Some(value);
                }
            }
        }
        Some(group) => {
            if group.is_ordinal() || group.less_than(1000.0) {
                return first;
            }

            // thousands, then up to three more digits: one thousand, three hundred
            let next = ts.index_of_without_category("ignore", 0);
            ts.advance(next);
            match less_than_1000(ts, allow_ordinal) {
                None => ts.advance(-next),
                Some(second) if second.is_ordinal() => return Some(group.plus(second).with_ordinal(true)),
                Some(second) => first = Some(group.plus(second)),
            }
        }
    }

    let next = ts.index_of_without_category("ignore", 0);
    let token = ts.get(next);
    let ordinal = token.has_category("ordinal");
    let multiplier = match token.number {
        // "thousand" never multiplies a long-scale group
        Some(m) if token.has_category("multiplier") && (allow_ordinal || !ordinal) && m.more_than(1000.0) => {
            short_multiplier_to_long_scale(m)
        }
        _ => return first,
    };

    if multiplier.less_than(last_multiplier) {
        ts.advance(next + 1);
        let value = match first {
            None => multiplier,
            Some(f) => multiplier.multiply(f),
        };
        return Some(value.with_ordinal(ordinal));
    }

    ts.set_position(original);
    None
}

fn short_multiplier_to_long_scale(multiplier: Number) -> Number {
    match multiplier.as_i64() {
        Some(1_000_000_000) => Number::integer(1_000_000_000_000),
        Some(1_000_000_000_000) => Number::integer(1_000_000_000_000_000_000),
        Some(1_000_000_000_000_000) => Number::decimal(1e24),
        Some(1_000_000_000_000_000_000) => Number::decimal(1e30),
        _ => multiplier,
    }
}

impl NumeralGrammar for EnglishNumerals {
    /// Also reads "a hundred", "an eighth" stays a fraction though.
    fn number_integer(&self, ts: &mut TokenStream<'_>, allow_ordinal: bool) -> Option<Number> {
        let article = ts.get(0);
        let next = ts.get(1);
        if article.has_category("article")
            && (next.has_category("hundred") || next.has_category("multiplier"))
            && !next.has_category("ordinal")
        {
            let original = ts.position();
            ts.advance(1);
            if let Some(n) = self.integer(ts, allow_ordinal) {
                return Some(n);
            }
            ts.set_position(original);
            return None;
        }
        self.integer(ts, allow_ordinal)
    }

    fn number_sign_point(&self, ts: &mut TokenStream<'_>, allow_ordinal: bool) -> Option<Number> {
        sign_before_number(ts, |ts| self.number_point(ts, allow_ordinal))
    }

    fn number_prefer_ordinal(&self, ts: &mut TokenStream<'_>) -> Option<Number> {
        let n = suffix_multiplier(ts, false).or_else(|| self.number_sign_point(ts, true));
        self.divide_by_denominator_if_possible(ts, n)
    }

    fn number_prefer_fraction(&self, ts: &mut TokenStream<'_>) -> Option<Number> {
        match suffix_multiplier(ts, false).or_else(|| self.number_sign_point(ts, false)) {
            // maybe an ordinal after all
            None => self.number_sign_point(ts, true),
            Some(n) => self.divide_by_denominator_if_possible(ts, Some(n)),
        }
    }

    fn number_no_ordinal(&self, ts: &mut TokenStream<'_>) -> Option<Number> {
        let n = suffix_multiplier(ts, false).or_else(|| self.number_sign_point(ts, false));
        self.divide_by_denominator_if_possible(ts, n)
    }

    fn number_must_be_integer(&self, ts: &mut TokenStream<'_>) -> Option<Number> {
        let n = suffix_multiplier(ts, true).or_else(|| sign_before_number(ts, |ts| self.number_integer(ts, true)))?;
        // a dozen dozens
        match suffix_multiplier(ts, true) {
            Some(multiplier) => Some(n.multiply(multiplier)),
            None => Some(n),
        }
    }
}
