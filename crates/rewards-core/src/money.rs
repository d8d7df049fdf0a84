//! # Money Module
//!
//! Provides the `Money` type for handling transaction amounts safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    (100.15 - 100) * 2 = 0.30000000000001137  ❌                         │
//! │                                                                         │
//! │  The points rule floors each tier, so a stray 1e-14 can move a         │
//! │  result across a whole-point boundary.                                  │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal                                          │
//! │    "100.15" → 100.15 exactly → (100.15 - 100) * 2 = 0.30 → 0 points    │
//! │    "0.004"  → 0.004 exactly  (no digit is ever dropped)                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Parsing
//! Amounts arrive as decimal text or JSON numbers. Both are read as text and
//! converted with [`Decimal::from_str_exact`], which fails instead of rounding.
//! Every fraction digit the client sent is kept and echoed back.
//!
//! ## Usage
//! ```rust
//! use rewards_core::money::Money;
//!
//! let amount: Money = "120.129".parse().unwrap();
//! assert_eq!(amount.amount().to_string(), "120.129");
//! assert_eq!(amount.to_string(), "$120.129");
//! ```

use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{ser, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// An exact decimal amount of money.
///
/// Currency-agnostic: the service never converts between currencies.
/// Equality is numeric, so `120.0` and `120.00` are the same amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Returns the underlying decimal value.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Errors from parsing decimal text into [`Money`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    #[error("amount is empty")]
    Empty,

    #[error("amount '{0}' is not a decimal number")]
    InvalidFormat(String),

    #[error("amount '{0}' is out of range")]
    Overflow(String),
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (sign, unsigned) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.strip_prefix('+').unwrap_or(text)),
        };

        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(ParseMoneyError::InvalidFormat(text.to_string()));
        }

        let whole = if whole.is_empty() { "0" } else { whole };
        let normalized = if fraction.is_empty() {
            format!("{sign}{whole}")
        } else {
            format!("{sign}{whole}.{fraction}")
        };

        // digits only, so the only failure left is range or precision
        Decimal::from_str_exact(&normalized)
            .map(Money)
            .map_err(|_| ParseMoneyError::Overflow(text.to_string()))
    }
}

// =============================================================================
// Serde
// =============================================================================

/// Serialized as a JSON number (`120.0`, `120.129`).
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // shortest f64 for the exact decimal text, so the digits survive the trip
        let value: f64 = self
            .0
            .to_string()
            .parse()
            .map_err(<S::Error as ser::Error>::custom)?;
        serializer.serialize_f64(value)
    }
}

/// Accepts a JSON number (`120`, `120.5`) or a decimal string (`"120.50"`).
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal amount as a number or string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Ok(Money(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Ok(Money(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        if !v.is_finite() {
            return Err(E::custom(ParseMoneyError::InvalidFormat(v.to_string())));
        }
        // Display prints the shortest round-trip decimal, never an exponent
        self.visit_str(&v.to_string())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// At least two decimal places, more when the amount carries them.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0.is_sign_negative() && !self.0.is_zero() {
            "-"
        } else {
            ""
        };
        let mut value = self.0.abs();
        if value.scale() < 2 {
            value.rescale(2);
        }
        write!(f, "{sign}${value}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
