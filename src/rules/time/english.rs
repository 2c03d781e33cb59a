use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use tracing::trace;

use crate::duration::{Duration, TimeUnit};
use crate::engine::TokenStream;
use crate::rules::duration::duration;
use crate::rules::numeral::helpers::{integer_in_range, sign_before_number};
use crate::rules::numeral::{EnglishNumerals, NumeralGrammar};
use crate::rules::time::DateTimeGrammar;
use crate::rules::time::helpers::{
    HOURS_IN_DAY, bcad_or_ampm, day_of_week, is_moment_of_day_pm, minute_or_second, month_name,
    relative_day_of_week_duration, relative_indicator_duration, relative_month_duration, relative_today,
    relative_tomorrow, relative_yesterday, restoring,
};

/// English dates and times around a reference instant `now`.
///
/// A full match is read twice, date first ("tomorrow at five") and time
/// first ("five pm next friday"), and the reading that consumes more tokens
/// wins.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EnglishDateTime {
    numerals: EnglishNumerals,
    /// "4/5" is April 5th rather than May 4th.
    prefer_month_before_day: bool,
    now: NaiveDateTime,
}

impl EnglishDateTime {
    pub fn new(numerals: EnglishNumerals, prefer_month_before_day: bool, now: NaiveDateTime) -> Self {
        Self { numerals, prefer_month_before_day, now }
    }

    fn today(&self) -> NaiveDate {
        self.now.date()
    }

    fn integer_in_range(&self, ts: &mut TokenStream<'_>, from: i64, to: i64, allow_ordinal: bool) -> Option<i64> {
        integer_in_range(ts, from, to, |ts| {
            sign_before_number(ts, |ts| self.numerals.number_integer(ts, allow_ordinal))
        })
    }

    fn date_time_ordered(&self, ts: &mut TokenStream<'_>, time_first: bool) -> Option<NaiveDateTime> {
        restoring(ts, |ts| {
            let mut date = None;
            let mut time = None;

            if !time_first {
                date = self.relative_special_day(ts);
                if date.is_none() {
                    match self.relative_duration(ts).or_else(|| self.relative_month_duration(ts)) {
                        None => date = self.date(ts),
                        Some(d) if d.nanos == 0 && d.days != 0 => date = Some(d.apply_to(self.now)?.date()),
                        Some(d) if d.nanos != 0 && d.days == 0 && d.months == 0 && d.years == 0 => {
                            time = Some(d.apply_to(self.now)?.time());
                        }
                        // in two months, three days and an hour
                        Some(d) => return d.apply_to(self.now),
                    }
                }
            }

            if time.is_none() {
                time = ts.try_or_skip_date_time_ignore(date.is_some(), |ts| self.time_with_ampm(ts));
            }

            if date.is_none() && time.is_some() {
                let original = ts.position();
                match ts.try_or_skip_date_time_ignore(true, |ts| self.relative_duration(ts)) {
                    None => {
                        date = ts.try_or_skip_date_time_ignore(true, |ts| {
                            self.relative_special_day(ts).or_else(|| self.date(ts))
                        });
                    }
                    Some(d) if d.nanos == 0 && d.days != 0 => date = Some(d.apply_to(self.now)?.date()),
                    Some(_) => ts.set_position(original),
                }
            }

            match (date, time) {
                (None, None) => None,
                (None, Some(time)) => Some(self.today().and_time(time)),
                (Some(date), None) => Some(date.and_time(self.now.time())),
                (Some(date), Some(time)) => Some(date.and_time(time)),
            }
        })
    }

    /// A time with an optional AM/PM marker or moment of day, in either
    /// order: "five pm", "in the evening at 8:30", "noon".
    pub fn time_with_ampm(&self, ts: &mut TokenStream<'_>) -> Option<NaiveTime> {
        restoring(ts, |ts| {
            let (time, pm) = match self.time(ts) {
                Some(time) => {
                    let pm = ts.try_or_skip_date_time_ignore(true, |ts| {
                        bcad_or_ampm(ts, "ampm").or_else(|| self.moment_of_day(ts).map(is_moment_of_day_pm))
                    });
                    (time, pm)
                }
                None => {
                    let moment = self.moment_of_day(ts)?;
                    match ts.try_or_skip_date_time_ignore(true, |ts| self.time(ts)) {
                        Some(time) => (time, Some(is_moment_of_day_pm(moment))),
                        None => return clock(moment, 0, 0),
                    }
                }
            };

            let hour = time.hour();
            let hour = match pm {
                // "twelve am" is midnight, "zero pm" stays midnight
                Some(false) if hour == 12 => 0,
                Some(true) if hour != 0 && hour < 12 => hour + 12,
                _ => hour,
            };
            time.with_hour(hour)
        })
    }

    /// A bare clock time: "13:28:33", "quarter to six", "twelve o'clock",
    /// "the twenty three and fifty one min".
    pub fn time(&self, ts: &mut TokenStream<'_>) -> Option<NaiveTime> {
        restoring(ts, |ts| {
            let special_minute = self.special_minute(ts);
            let hour = self.noon_midnight_like(ts).or_else(|| self.hour(ts))?;

            if let Some(minute) = special_minute {
                return if minute < 0 {
                    clock((hour + HOURS_IN_DAY - 1) % HOURS_IN_DAY, 60 + minute, 0)
                } else {
                    clock(hour, minute, 0)
                };
            }

            if self.o_clock(ts) {
                return clock(hour, 0, 0);
            }

            let minute = ts.try_or_skip_date_time_ignore(true, |ts| {
                minute_or_second(ts, TimeUnit::Minutes, |ts| self.integer_in_range(ts, 0, 59, false))
            });
            let Some(minute) = minute else {
                return clock(hour, 0, 0);
            };

            let second = ts.try_or_skip_date_time_ignore(true, |ts| {
                minute_or_second(ts, TimeUnit::Seconds, |ts| self.integer_in_range(ts, 0, 59, false))
            });
            clock(hour, minute, second.unwrap_or(0))
        })
    }

    /// 0 to 23; "24" wraps to midnight.
    pub fn hour(&self, ts: &mut TokenStream<'_>) -> Option<i64> {
        restoring(ts, |ts| {
            let skip = ts.index_of_without_category("pre_hour", 0);
            ts.advance(skip);
            self.integer_in_range(ts, 0, HOURS_IN_DAY, false).map(|hour| hour % HOURS_IN_DAY)
        })
    }

    /// Minutes before (negative) or after the hour that follows:
    /// "a quarter to", "twenty past", "half past".
    pub fn special_minute(&self, ts: &mut TokenStream<'_>) -> Option<i64> {
        restoring(ts, |ts| {
            let skip = ts.index_of_without_category("pre_hour", 0);
            ts.advance(skip);

            let number = self.numerals.number_no_ordinal(ts)?;
            let minutes = if number.is_decimal() && number.more_than(0.0) && number.less_than(1.0) {
                (number.as_f64() * 60.0).round() as i64
            } else if number.is_integer() && number.more_than(1.0) && number.less_than(60.0) {
                number.as_i64()?
            } else {
                return None;
            };

            let direction = ts.try_or_skip_date_time_ignore(true, |ts| {
                let token = ts.get(0);
                let direction = if token.has_category("special_minute_after") {
                    1
                } else if token.has_category("special_minute_before") {
                    -1
                } else {
                    return None;
                };
                ts.advance(1);
                Some(direction)
            })?;
            Some(minutes * direction)
        })
    }

    /// "o'clock", "o clock", "on the dot", "sharp".
    pub fn o_clock(&self, ts: &mut TokenStream<'_>) -> bool {
        if ts.get(0).has_category("pre_oclock") {
            let next = ts.index_of_without_category("date_time_ignore", 1);
            if ts.get(next).has_category("post_oclock") {
                ts.advance(next + 1);
                return true;
            }
        }
        if ts.get(0).has_category("oclock_combined") {
            ts.advance(1);
            return true;
        }
        false
    }

    pub fn noon_midnight_like(&self, ts: &mut TokenStream<'_>) -> Option<i64> {
        self.noon_midnight_like_or_moment_of_day(ts, "noon_midnight_like")
    }

    pub fn moment_of_day(&self, ts: &mut TokenStream<'_>) -> Option<i64> {
        self.noon_midnight_like_or_moment_of_day(ts, "moment_of_day")
    }

    /// The hour a moment word stands for. A relative word before it shifts
    /// that hour by one: "after dinner", "before the lunch".
    fn noon_midnight_like_or_moment_of_day(&self, ts: &mut TokenStream<'_>, category: &str) -> Option<i64> {
        restoring(ts, |ts| {
            let mut relative = 0;
            let pre = ts.get(0);
            if pre.has_category("pre_special_hour") {
                if pre.has_category("pre_relative_indicator") {
                    relative = if pre.has_category("negative") { -1 } else { 1 };
                    let next = ts.index_of_without_category("date_time_ignore", 1);
                    ts.advance(next);
                } else {
                    ts.advance(1);
                }
            }

            let token = ts.get(0);
            if !token.has_category(category) {
                return None;
            }
            let hour = token.number?.as_i64()?;
            ts.advance(1);
            Some((hour + HOURS_IN_DAY + relative) % HOURS_IN_DAY)
        })
    }

    /// An absolute date: "thursday 26 of may 2022", "26/12/2003",
    /// "august the second", "four hundred seventy six AD".
    ///
    /// Missing parts come from today, except that a lone year means January
    /// 1st of that year.
    pub fn date(&self, ts: &mut TokenStream<'_>) -> Option<NaiveDate> {
        restoring(ts, |ts| {
            let today = self.today();

            let weekday = day_of_week(ts);
            let first = ts.try_or_skip_date_time_ignore(weekday.is_some(), |ts| self.integer_in_range(ts, 1, 31, true));
            if let (Some(weekday), None) = (weekday, first) {
                let current = i64::from(today.weekday().num_days_from_monday());
                return today.checked_add_signed(TimeDelta::try_days(weekday - current)?);
            }

            let month = ts.try_or_skip_date_time_ignore(first.is_some(), month_name);
            let mut result = match (month, first) {
                (None, None) => ymd_clamped(i64::from(today.year()), 1, 1)?,
                (None, Some(first)) => {
                    let second_max = if first <= 12 { 31 } else { 12 };
                    let second = ts.try_or_skip_date_time_ignore(true, |ts| self.integer_in_range(ts, 1, second_max, true));
                    let year = i64::from(today.year());
                    match second {
                        // no year either
                        None if self.prefer_month_before_day && first <= 12 => return ymd_clamped(year, first, 1),
                        None => return ymd_clamped(year, i64::from(today.month()), first),
                        Some(second) if (self.prefer_month_before_day || second > 12) && first <= 12 => {
                            ymd_clamped(year, first, second)?
                        }
                        Some(second) => ymd_clamped(year, second, first)?,
                    }
                }
                (Some(month), first) => {
                    let day = first
                        .or_else(|| ts.try_or_skip_date_time_ignore(true, |ts| self.integer_in_range(ts, 1, 31, true)))
                        .unwrap_or(1);
                    ymd_clamped(i64::from(today.year()), month, day)?
                }
            };

            let day_or_month_found = first.is_some() || month.is_some();
            let mut bcad = ts.try_or_skip_date_time_ignore(day_or_month_found, |ts| self.bcad(ts));

            let max_year = i64::from(NaiveDate::MAX.year());
            let year = ts.try_or_skip_date_time_ignore(day_or_month_found && bcad.is_none(), |ts| {
                self.integer_in_range(ts, 0, max_year, false)
            });
            let Some(year) = year else {
                return day_or_month_found.then_some(result);
            };

            if bcad.is_none() {
                bcad = self.bcad(ts);
            }
            let year = if bcad == Some(false) { -year } else { year };
            result = ymd_clamped(year, i64::from(result.month()), i64::from(result.day()))?;
            Some(result)
        })
    }

    /// `false` for BC, `true` for AD, also swallowing a trailing "era" after
    /// BC forms ("b.c.e.", "before common era").
    pub fn bcad(&self, ts: &mut TokenStream<'_>) -> Option<bool> {
        let result = bcad_or_ampm(ts, "bcad")?;
        if !result {
            let next = ts.index_of_without_category("date_time_ignore", 0);
            if ts.get(next).has_category("bcad_era") {
                ts.advance(next + 1);
            }
        }
        Some(result)
    }

    /// "yesterday", "today", "the day after tomorrow", "next friday".
    pub fn relative_special_day(&self, ts: &mut TokenStream<'_>) -> Option<NaiveDate> {
        restoring(ts, |ts| {
            let days = relative_yesterday(ts)
                .or_else(|| relative_today(ts))
                .or_else(|| relative_tomorrow(ts))
                .or_else(|| self.relative_day_of_week_duration(ts).map(|d| d.days))?;
            self.today().checked_add_signed(TimeDelta::try_days(days)?)
        })
    }

    pub fn relative_day_of_week_duration(&self, ts: &mut TokenStream<'_>) -> Option<Duration> {
        let max = i64::from(i32::MAX);
        relative_day_of_week_duration(ts, self.today(), |ts| self.integer_in_range(ts, 1, max, false))
    }

    pub fn relative_month_duration(&self, ts: &mut TokenStream<'_>) -> Option<Duration> {
        relative_month_duration(ts, self.today())
    }

    /// "in two hours", "three days ago", "last six months".
    pub fn relative_duration(&self, ts: &mut TokenStream<'_>) -> Option<Duration> {
        relative_indicator_duration(ts, |ts| duration(ts, &self.numerals), |d| -d)
    }
}

impl DateTimeGrammar for EnglishDateTime {
    fn date_time(&self, ts: &mut TokenStream<'_>) -> Option<NaiveDateTime> {
        let date_first =
            |ts: &mut TokenStream<'_>| self.date_time_ordered(ts, false).map(|found| (found, "date first"));
        let time_first =
            |ts: &mut TokenStream<'_>| self.date_time_ordered(ts, true).map(|found| (found, "time first"));

        let (found, ordering) = ts.first_which_uses_most_tokens(&[&date_first, &time_first])?;
        trace!(ordering, %found, position = ts.position(), "date/time reading");
        Some(found)
    }
}

fn clock(hour: i64, minute: i64, second: i64) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(u32::try_from(hour).ok()?, u32::try_from(minute).ok()?, u32::try_from(second).ok()?)
}

/// The date, with a day past the end of the month moved back to its last day.
fn ymd_clamped(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let year = i32::try_from(year).ok()?;
    let month = u32::try_from(month).ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(chrono::Months::new(1))?.pred_opt()?.day();
    let day = u32::try_from(day).ok()?.clamp(1, last);
    first.with_day(day)
}
