//! Exact-or-decimal numeric value produced by the numeral grammar.
//!
//! A [`Number`] stays an `i64` for as long as every operation on it has an
//! exact integer result; anything else (a true fraction, or an overflow)
//! falls back to `f64`. The ordinal flag is carried separately and always
//! follows the left-hand operand of an operation: grammars decide explicitly
//! when a result becomes ordinal via [`Number::with_ordinal`].

use std::fmt;
use std::ops::{Add, Div, Mul};

/// Integer or decimal payload of a [`Number`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i64),
    Decimal(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    value: Value,
    ordinal: bool,
}

impl Number {
    pub const fn integer(value: i64) -> Self {
        Self { value: Value::Integer(value), ordinal: false }
    }

    pub const fn decimal(value: f64) -> Self {
        Self { value: Value::Decimal(value), ordinal: false }
    }

    pub const fn with_ordinal(self, ordinal: bool) -> Self {
        Self { value: self.value, ordinal }
    }

    pub fn value(&self) -> Value {
        self.value
    }

    pub fn is_ordinal(&self) -> bool {
        self.ordinal
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.value, Value::Integer(_))
    }

    pub fn is_decimal(&self) -> bool {
        matches!(self.value, Value::Decimal(_))
    }

    /// The integer payload, or `None` for decimals.
    pub fn as_i64(&self) -> Option<i64> {
        match self.value {
            Value::Integer(v) => Some(v),
            Value::Decimal(_) => None,
        }
    }

    /// The value as a float, whatever the representation.
    pub fn as_f64(&self) -> f64 {
        match self.value {
            Value::Integer(v) => v as f64,
            Value::Decimal(v) => v,
        }
    }

    /// True only for integers equal to `other`; decimals never compare equal.
    pub fn is_integer_equal_to(&self, other: i64) -> bool {
        self.as_i64() == Some(other)
    }

    pub fn less_than(&self, bound: f64) -> bool {
        match self.value {
            Value::Integer(v) => (v as f64) < bound,
            Value::Decimal(v) => v < bound,
        }
    }

    pub fn more_than(&self, bound: f64) -> bool {
        match self.value {
            Value::Integer(v) => (v as f64) > bound,
            Value::Decimal(v) => v > bound,
        }
    }

    pub fn plus(self, other: Number) -> Number {
        let value = match (self.value, other.value) {
            (Value::Integer(a), Value::Integer(b)) => match a.checked_add(b) {
                Some(sum) => Value::Integer(sum),
                None => Value::Decimal(a as f64 + b as f64),
            },
            _ => Value::Decimal(self.as_f64() + other.as_f64()),
        };
        Number { value, ordinal: self.ordinal }
    }

    pub fn multiply(self, other: Number) -> Number {
        let value = match (self.value, other.value) {
            (Value::Integer(a), Value::Integer(b)) => match a.checked_mul(b) {
                Some(product) => Value::Integer(product),
                None => Value::Decimal(a as f64 * b as f64),
            },
            _ => Value::Decimal(self.as_f64() * other.as_f64()),
        };
        Number { value, ordinal: self.ordinal }
    }

    /// Stays an integer when `other` divides `self` evenly (16 / 4 = 4, not 4.0).
    pub fn divide(self, other: Number) -> Number {
        let value = match (self.value, other.value) {
            (Value::Integer(a), Value::Integer(b)) => match (a.checked_rem(b), a.checked_div(b)) {
                (Some(0), Some(quotient)) => Value::Integer(quotient),
                _ => Value::Decimal(a as f64 / b as f64),
            },
            _ => Value::Decimal(self.as_f64() / other.as_f64()),
        };
        Number { value, ordinal: self.ordinal }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::decimal(value)
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        self.plus(rhs)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        self.multiply(rhs)
    }
}

impl Div for Number {
    type Output = Number;

    fn div(self, rhs: Number) -> Number {
        self.divide(rhs)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Integer(v) => write!(f, "{v}")?,
            Value::Decimal(v) => write!(f, "{v}")?,
        }
        if self.ordinal {
            let suffix = match self.as_i64().map(|v| v.unsigned_abs() % 100) {
                Some(11..=13) | None => "th",
                Some(v) if v % 10 == 1 => "st",
                Some(v) if v % 10 == 2 => "nd",
                Some(v) if v % 10 == 3 => "rd",
                Some(_) => "th",
            };
            f.write_str(suffix)?;
        }
        Ok(())
    }
}
