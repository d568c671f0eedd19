//! Money type for representing currency amounts
//!
//! Wraps an exact `Decimal` so that totals are the exact sum of their parts.
//! Rounding only happens when an amount is formatted for display or export.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An exact monetary amount
///
/// Serialized as a plain JSON number carrying every stored digit, so an
/// amount reads back exactly as it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal);

impl Money {
    /// Create a Money amount from a decimal value
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_fixed(), "10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal value
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is strictly below zero
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Add two amounts, returning `None` if the result is out of range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract `other`, returning `None` if the result is out of range
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Format with exactly two decimal places and no currency symbol
    ///
    /// Midpoints round away from zero, so `2.345` becomes `2.35`.
    pub fn to_fixed(&self) -> String {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        rounded.to_string()
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats like "10.50", "$10.50", "-10.50", "1200" and "1,200.00".
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        let s = s.strip_prefix('$').unwrap_or(s);
        let cleaned = s.replace(',', "");
        if cleaned.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let value = Decimal::from_str(&cleaned)
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}", self.abs().to_fixed())
        } else {
            write!(f, "${}", self.to_fixed())
        }
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::from_cents(-10000).to_string(), "-$100.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn test_to_fixed_rounds_only_for_display() {
        let m = Money::parse("2.345").unwrap();
        assert_eq!(m.to_fixed(), "2.35");
        assert_eq!(m.value(), Decimal::new(2345, 3));
        assert_eq!(Money::parse("1200").unwrap().to_fixed(), "1200.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("$10.50").unwrap(), Money::from_cents(1050));
        assert_eq!(Money::parse("-10.50").unwrap(), Money::from_cents(-1050));
        assert_eq!(Money::parse("1,200").unwrap(), Money::from_cents(120000));
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
    }

    #[test]
    fn test_exact_sum() {
        // 0.1 + 0.2 is exactly 0.3, unlike with binary floats
        let total = Money::parse("0.1")
            .unwrap()
            .checked_add(Money::parse("0.2").unwrap())
            .unwrap();
        assert_eq!(total, Money::parse("0.3").unwrap());
    }

    #[test]
    fn test_checked_arithmetic_out_of_range() {
        let huge = Money::new(Decimal::MAX);
        assert_eq!(huge.checked_add(Money::from_cents(100)), None);
        assert_eq!(Money::new(Decimal::MIN).checked_sub(Money::from_cents(100)), None);
        assert_eq!(
            Money::from_cents(50000).checked_sub(Money::from_cents(60000)),
            Some(Money::from_cents(-10000))
        );
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::from_cents(1).is_positive());
        assert!(!Money::zero().is_positive());
        assert!(Money::from_cents(-1).is_negative());
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Money::from_cents(350)).unwrap();
        assert_eq!(json, "3.50");

        let parsed: Money = serde_json::from_str("1200").unwrap();
        assert_eq!(parsed, Money::from_cents(120000));
    }

    #[test]
    fn test_long_mantissa_survives_json() {
        let amount = Money::parse("12345678901.123456789").unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "12345678901.123456789");

        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, amount);
    }
}
