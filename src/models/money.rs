//! Money type for representing currency amounts
//!
//! Amounts are kept as `f64` and persisted as a bare JSON number. Two-place
//! precision is a display convention only; the stored value round-trips at
//! full floating precision.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in the user's currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Create a Money amount from a floating value
    ///
    /// # Examples
    /// ```
    /// use storycash::models::Money;
    /// let amount = Money::new(10.5);
    /// assert_eq!(amount.value(), 10.5);
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw floating value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "$10.50", "1,234.50", "10". Negative and
    /// non-finite amounts are rejected; polarity is carried by the
    /// transaction type, not the sign.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let cleaned: String = trimmed
            .strip_prefix('$')
            .unwrap_or(trimmed)
            .chars()
            .filter(|c| *c != ',')
            .collect();

        let value: f64 = cleaned
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        if !value.is_finite() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }
        if value < 0.0 {
            return Err(MoneyParseError::Negative(s.to_string()));
        }

        Ok(Self(value))
    }

    /// Format with a currency symbol, two decimals and thousands grouping
    ///
    /// Works on the float text directly, so magnitudes beyond the range of
    /// an integer cent count still format in full.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let fixed = format!("{:.2}", self.0.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        // -0.001 rounds to zero and prints unsigned
        let sign = if self.0 < 0.0 && fixed != "0.00" { "-" } else { "" };
        format!("{}{}{}.{}", sign, symbol, group_thousands(whole), cents)
    }
}

/// Insert `,` between every group of three digits
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl From<f64> for Money {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    Negative(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            Self::Negative(s) => write!(f, "Amount cannot be negative: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
