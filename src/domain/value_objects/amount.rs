//! # Amount Value Object
//!
//! Signed exact decimal amount used for per-unit sale values, per-unit
//! realized gains, gain ceilings and their totals.
//!
//! # Examples
//!
//! ```
//! use lot_optimizer::domain::value_objects::Amount;
//!
//! let value = Amount::from_cents(1_050);
//! let proceeds = value.times(4).unwrap();
//!
//! assert_eq!(proceeds, Amount::from_whole(42));
//! ```

use crate::domain::value_objects::arithmetic::{
    ArithmeticError, ArithmeticResult, CheckedArithmetic,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A signed, exact monetary amount.
///
/// Wraps [`Decimal`] so that every sum and product is either exact or an
/// explicit [`ArithmeticError`]. Amounts carry no currency.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates an amount from a decimal value.
    #[inline]
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates an amount from a whole number of currency units.
    #[inline]
    #[must_use]
    pub fn from_whole(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Creates an amount from hundredths of a currency unit.
    #[inline]
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Returns the underlying decimal.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is strictly greater than zero.
    #[inline]
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if the amount is strictly less than zero.
    #[inline]
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiplies a per-unit amount by a unit count.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product does not fit.
    #[inline]
    pub fn times(self, units: u64) -> ArithmeticResult<Self> {
        self.0.safe_mul(Decimal::from(units)).map(Self)
    }
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.0.safe_add(rhs.0).map(Self)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.0.safe_sub(rhs.0).map(Self)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.0.safe_mul(rhs.0).map(Self)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        self.0.safe_div(rhs.0).map(Self)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for Amount {
    type Err = ArithmeticError;

    /// Parses a plain decimal number such as `25000` or `-12.50`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Self)
            .map_err(|_| ArithmeticError::InvalidValue("not a decimal amount"))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
