//! Currency amounts
//!
//! Held as whole cents in an `i64` so totals never drift. On disk an amount
//! is a plain JSON number of currency units (`12.5`), and any loosely typed
//! value found there loads as zero instead of failing the whole record.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Largest magnitude, in cents, that survives the decimal JSON encoding exactly
pub const MAX_CENTS: i64 = 1 << 53;

/// An amount of money in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// ```
    /// use runway::models::Money;
    /// assert_eq!(Money::from_cents(120_000).to_string(), "$1200.00");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Round a decimal number of units to the nearest cent; NaN and
    /// infinities become zero
    pub fn from_units(units: f64) -> Self {
        if units.is_finite() {
            Self((units * 100.0).round() as i64)
        } else {
            Self(0)
        }
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Decimal units, as used by ratios and persistence
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse user input such as `1200`, `1200.5`, `$45.99`, `-3` or `.75`
    ///
    /// Digits beyond the second decimal place are dropped. Anything other
    /// than an optional sign, an optional `$`, and digits with at most one
    /// point is rejected, as is any magnitude above [`MAX_CENTS`].
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let trimmed = input.trim();
        let fail = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (sign, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, trimmed),
        };
        let body = body.strip_prefix('$').unwrap_or(body);
        let (whole, frac) = body.split_once('.').unwrap_or((body, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(fail());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| fail())?
        };
        let mut frac_digits = frac.bytes().take(2).map(|b| i64::from(b - b'0'));
        let fraction = frac_digits.next().unwrap_or(0) * 10 + frac_digits.next().unwrap_or(0);

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .ok_or_else(|| MoneyParseError::OutOfRange(trimmed.to_string()))?;
        if cents > MAX_CENTS {
            return Err(MoneyParseError::OutOfRange(trimmed.to_string()));
        }
        Ok(Self(sign * cents))
    }

    /// Render as `<symbol><units>.<cents>`, sign first
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        format!("{}{}{}.{:02}", sign, symbol, magnitude / 100, magnitude % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

// Arithmetic saturates at the i64 bounds
macro_rules! money_binop {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $saturating:ident) => {
        impl $op for Money {
            type Output = Money;

            fn $method(self, rhs: Money) -> Money {
                Money(self.0.$saturating(rhs.0))
            }
        }

        impl $assign for Money {
            fn $assign_method(&mut self, rhs: Money) {
                self.0 = self.0.$saturating(rhs.0);
            }
        }
    };
}

money_binop!(Add, add, AddAssign, add_assign, saturating_add);
money_binop!(Sub, sub, SubAssign, sub_assign, saturating_sub);

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money(self.0.saturating_mul(factor))
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |total, m| total + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

struct LenientAmount;

impl<'de> Visitor<'de> for LenientAmount {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Ok(Money::from_units(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Ok(Money(v.saturating_mul(100)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Ok(Money(i64::try_from(v).unwrap_or(i64::MAX).saturating_mul(100)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Ok(Money::parse(v)
            .ok()
            .or_else(|| v.trim().parse::<f64>().ok().map(Money::from_units))
            .unwrap_or_default())
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Money, E> {
        Ok(Money::zero())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Money, E> {
        Ok(Money::zero())
    }

    fn visit_none<E: de::Error>(self) -> Result<Money, E> {
        Ok(Money::zero())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LenientAmount)
    }
}

/// Rejected money input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(raw) => write!(f, "'{}' is not a valid amount", raw),
            Self::OutOfRange(raw) => write!(f, "'{}' is too large", raw),
        }
    }
}

impl std::error::Error for MoneyParseError {}
