//! Amount type with precise decimal arithmetic
//!
//! Balances, bill totals and split deltas are all `Amount`s. The system
//! tracks a single implicit currency, so an `Amount` is a signed decimal
//! with no currency tag. rust_decimal keeps repeated equal-and-opposite
//! adjustments exact.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Internal scale; display rounds further
const INTERNAL_DP: u32 = 4;

/// Errors that can occur during amount operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A signed monetary amount
///
/// Sign conventions are owned by the caller. For friend balances a negative
/// amount means the user owes the friend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    /// Creates a new amount, rounded to four decimal places
    pub fn new(value: Decimal) -> Self {
        Self {
            value: value.round_dp(INTERNAL_DP),
        }
    }

    /// Creates an amount from minor units (cents)
    pub fn from_minor(minor_units: i64) -> Self {
        Self::new(Decimal::new(minor_units, 2))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self { value: dec!(0) }
    }

    /// Returns the decimal value
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.value.is_sign_positive() && !self.value.is_zero()
    }

    /// Returns true if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.value.is_sign_negative() && !self.value.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self {
            value: self.value.abs(),
        }
    }

    /// Checked addition that reports overflow instead of panicking
    pub fn checked_add(&self, other: &Amount) -> Result<Amount, AmountError> {
        self.value
            .checked_add(other.value)
            .map(Self::new)
            .ok_or(AmountError::Overflow)
    }

    /// Checked subtraction that reports overflow instead of panicking
    pub fn checked_sub(&self, other: &Amount) -> Result<Amount, AmountError> {
        self.value
            .checked_sub(other.value)
            .map(Self::new)
            .ok_or(AmountError::Overflow)
    }

    /// Rounds to two decimal places using banker's rounding
    pub fn round_for_display(&self) -> Self {
        Self {
            value: self.value.round_dp_with_strategy(
                2,
                rust_decimal::RoundingStrategy::MidpointNearestEven,
            ),
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self::new(Decimal::from(value))
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::new(Decimal::from(value))
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Self::new)
            .map_err(|e| AmountError::InvalidAmount(format!("{s:?}: {e}")))
    }
}

/// Renders without trailing zeros, so 7.00 shows as `7` and 12.50 as `12.5`
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.round_for_display().value.normalize())
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.value + other.value)
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.value - other.value)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self { value: -self.value }
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}
