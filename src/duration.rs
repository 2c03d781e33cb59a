//! Calendar-aware time delta.
//!
//! Exact elapsed time lives in `nanos`; `days`, `months` and `years` are
//! calendar quantities whose absolute length depends on the date they are
//! applied to, so they are never folded into each other.

use std::fmt;
use std::ops::{Add, Neg};

use chrono::{Months, NaiveDateTime, TimeDelta};

use crate::number::{Number, Value};

const NANOS_IN_DAY: i64 = 86_400_000_000_000;
const MONTHS_IN_YEAR: i64 = 12;
/// Average month length, as the mean Gregorian year divided by twelve.
const DAYS_IN_MONTH: f64 = 30.436875;

/// Unit a duration word stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
}

/// Where a unit's contribution lands in a [`Duration`].
enum Component {
    Nanos(i64),
    Days(i64),
    Months(i64),
    Years(i64),
}

impl TimeUnit {
    fn component(self) -> Component {
        match self {
            TimeUnit::Nanos => Component::Nanos(1),
            TimeUnit::Micros => Component::Nanos(1_000),
            TimeUnit::Millis => Component::Nanos(1_000_000),
            TimeUnit::Seconds => Component::Nanos(1_000_000_000),
            TimeUnit::Minutes => Component::Nanos(60_000_000_000),
            TimeUnit::Hours => Component::Nanos(3_600_000_000_000),
            TimeUnit::Days => Component::Days(1),
            TimeUnit::Weeks => Component::Days(7),
            TimeUnit::Months => Component::Months(1),
            TimeUnit::Years => Component::Years(1),
            TimeUnit::Decades => Component::Years(10),
            TimeUnit::Centuries => Component::Years(100),
            TimeUnit::Millennia => Component::Years(1_000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Duration {
    pub nanos: i64,
    pub days: i64,
    pub months: i64,
    pub years: i64,
}

impl Duration {
    pub const ZERO: Duration = Duration { nanos: 0, days: 0, months: 0, years: 0 };

    pub const fn new(nanos: i64, days: i64, months: i64, years: i64) -> Self {
        Self { nanos, days, months, years }
    }

    /// `amount` whole `unit`s.
    pub fn of(amount: i64, unit: TimeUnit) -> Self {
        Duration::ZERO.plus_whole(amount, unit)
    }

    pub fn is_zero(&self) -> bool {
        *self == Duration::ZERO
    }

    /// Add `amount` of `unit`; fractional amounts spill into smaller components.
    pub fn plus_amount(self, amount: Number, unit: TimeUnit) -> Self {
        match amount.value() {
            Value::Integer(n) => self.plus_whole(n, unit),
            Value::Decimal(x) => self.plus_fraction(x, unit),
        }
    }

    fn plus_whole(self, amount: i64, unit: TimeUnit) -> Self {
        let mut result = self;
        match unit.component() {
            Component::Nanos(k) => result.nanos = result.nanos.saturating_add(amount.saturating_mul(k)),
            Component::Days(k) => result.days = result.days.saturating_add(amount.saturating_mul(k)),
            Component::Months(k) => result.months = result.months.saturating_add(amount.saturating_mul(k)),
            Component::Years(k) => result.years = result.years.saturating_add(amount.saturating_mul(k)),
        }
        result
    }

    fn plus_fraction(self, amount: f64, unit: TimeUnit) -> Self {
        let whole = amount.round();
        let remainder = amount - whole;
        let result = self.plus_whole(whole as i64, unit);
        match unit.component() {
            Component::Nanos(_) => result,
            Component::Days(k) => {
                let nanos = (remainder * (k * NANOS_IN_DAY) as f64).round() as i64;
                result.plus_whole(nanos, TimeUnit::Nanos)
            }
            Component::Months(k) => result.plus_fraction(remainder * k as f64 * DAYS_IN_MONTH, TimeUnit::Days),
            Component::Years(k) => result.plus_fraction(remainder * (k * MONTHS_IN_YEAR) as f64, TimeUnit::Months),
        }
    }

    pub fn multiply(self, by: Number) -> Self {
        match by.value() {
            Value::Integer(n) => Duration {
                nanos: self.nanos.saturating_mul(n),
                days: self.days.saturating_mul(n),
                months: self.months.saturating_mul(n),
                years: self.years.saturating_mul(n),
            },
            Value::Decimal(x) => Duration::new((self.nanos as f64 * x).round() as i64, 0, 0, 0)
                .plus_fraction(self.days as f64 * x, TimeUnit::Days)
                .plus_fraction(self.months as f64 * x, TimeUnit::Months)
                .plus_fraction(self.years as f64 * x, TimeUnit::Years),
        }
    }

    /// Shift `reference` by this duration: nanoseconds first, then days,
    /// months and years. Month arithmetic clamps to the end of the month.
    pub fn apply_to(&self, reference: NaiveDateTime) -> Option<NaiveDateTime> {
        let shifted = reference.checked_add_signed(TimeDelta::nanoseconds(self.nanos))?;
        let shifted = shifted.checked_add_signed(TimeDelta::try_days(self.days)?)?;
        let shifted = add_months(shifted, self.months)?;
        add_months(shifted, self.years.checked_mul(MONTHS_IN_YEAR)?)
    }

    /// Approximate absolute length, counting a month as [`DAYS_IN_MONTH`] days.
    pub fn to_time_delta(&self) -> TimeDelta {
        let months = self.months as f64 + (self.years as f64) * MONTHS_IN_YEAR as f64;
        let calendar_nanos = (self.days as f64 + months * DAYS_IN_MONTH) * NANOS_IN_DAY as f64;
        TimeDelta::nanoseconds(self.nanos) + TimeDelta::nanoseconds(calendar_nanos.round() as i64)
    }
}

fn add_months(dt: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 { dt.checked_add_months(magnitude) } else { dt.checked_sub_months(magnitude) }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        Duration {
            nanos: self.nanos.saturating_add(rhs.nanos),
            days: self.days.saturating_add(rhs.days),
            months: self.months.saturating_add(rhs.months),
            years: self.years.saturating_add(rhs.years),
        }
    }
}

impl Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        self.multiply(Number::integer(-1))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0s");
        }
        let mut parts = Vec::new();
        if self.years != 0 {
            parts.push(format!("{}y", self.years));
        }
        if self.months != 0 {
            parts.push(format!("{}mo", self.months));
        }
        if self.days != 0 {
            parts.push(format!("{}d", self.days));
        }
        if self.nanos != 0 {
            let seconds = self.nanos as f64 / 1e9;
            parts.push(format!("{seconds}s"));
        }
        f.write_str(&parts.join(" "))
    }
}
