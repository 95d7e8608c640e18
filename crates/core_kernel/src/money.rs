//! AED money with precise decimal arithmetic
//!
//! The broker operates in a single currency, the UAE Dirham. All monetary
//! fields in the system are AED, so `Money` is a thin wrapper over
//! `rust_decimal::Decimal` rather than a (currency, amount) pair. Amounts are
//! rounded to two decimal places (fils) on construction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Number of decimal places for AED (1 dirham = 100 fils)
const AED_DECIMAL_PLACES: u32 = 2;

/// A monetary amount in UAE Dirhams
///
/// Uses `rust_decimal` for precise arithmetic without floating-point errors.
/// Serializes transparently as a decimal value.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero dirhams
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Creates a new amount, rounded to whole fils
    pub fn new(amount: Decimal) -> Self {
        Self(amount.round_dp(AED_DECIMAL_PLACES))
    }

    /// Creates an amount from an integer number of fils
    pub fn from_fils(fils: i64) -> Self {
        Self(Decimal::new(fils, AED_DECIMAL_PLACES))
    }

    /// Returns a zero amount
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the underlying decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AED {:.2}", self.0)
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

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + *m)
    }
}
