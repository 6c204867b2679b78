//! # Checked Arithmetic
//!
//! Traits and utilities for exact, non-panicking arithmetic.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//! - [`floor_div`] - Division rounded towards negative infinity
//! - [`affordable_units`] - Whole units that fit in a budget
//!
//! # Examples
//!
//! ```
//! use lot_optimizer::domain::value_objects::arithmetic::affordable_units;
//! use rust_decimal::Decimal;
//!
//! // 20 of budget at 5 per unit buys exactly 4 units
//! let units = affordable_units(Decimal::new(20, 0), Decimal::new(5, 0)).unwrap();
//! assert_eq!(units, 4);
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Arithmetic operation resulted in underflow.
    #[error("arithmetic underflow")]
    Underflow,

    /// Division by zero attempted.
    #[error("division by zero")]
    DivisionByZero,

    /// Invalid value provided (e.g., non-positive unit cost).
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Divides and rounds the quotient towards negative infinity.
///
/// Unlike truncation, flooring is exact on negative quotients: `-10 / 3`
/// floors to `-4`.
///
/// # Errors
///
/// Returns `ArithmeticError::DivisionByZero` if the denominator is zero and
/// `ArithmeticError::Overflow` if the quotient does not fit a `Decimal`.
///
/// # Examples
///
/// ```
/// use lot_optimizer::domain::value_objects::arithmetic::floor_div;
/// use rust_decimal::Decimal;
///
/// let down = floor_div(Decimal::new(-10, 0), Decimal::new(3, 0)).unwrap();
/// assert_eq!(down, Decimal::new(-4, 0));
/// ```
#[inline]
#[must_use = "this returns the result of the operation, without modifying the original"]
pub fn floor_div(numerator: Decimal, denominator: Decimal) -> ArithmeticResult<Decimal> {
    numerator.safe_div(denominator).map(|quotient| quotient.floor())
}

/// Returns how many whole units costing `per_unit` fit within `budget`.
///
/// The result is exact: `units * per_unit <= budget < (units + 1) * per_unit`.
/// Decimal division rounds at 28 significant digits, so the floored quotient
/// is corrected against the budget by multiplication before returning.
/// A non-positive budget affords nothing. A count beyond `u64`, including a
/// quotient too large for `Decimal`, saturates at `u64::MAX`.
///
/// # Errors
///
/// Returns `ArithmeticError::InvalidValue` if `per_unit` is not positive.
pub fn affordable_units(budget: Decimal, per_unit: Decimal) -> ArithmeticResult<u64> {
    if per_unit <= Decimal::ZERO {
        return Err(ArithmeticError::InvalidValue("unit cost must be positive"));
    }
    if budget <= Decimal::ZERO {
        return Ok(0);
    }

    let mut units = match floor_div(budget, per_unit) {
        Err(ArithmeticError::Overflow) => return Ok(u64::MAX),
        quotient => quotient?,
    };
    while units > Decimal::ZERO && exceeds(units, per_unit, budget) {
        units -= Decimal::ONE;
    }
    while let Some(next) = units.checked_add(Decimal::ONE) {
        if exceeds(next, per_unit, budget) {
            break;
        }
        units = next;
    }

    Ok(units.to_u64().unwrap_or(u64::MAX))
}

/// True when `units * per_unit` is above `budget`, or too large to compute.
fn exceeds(units: Decimal, per_unit: Decimal, budget: Decimal) -> bool {
    units.checked_mul(per_unit).is_none_or(|cost| cost > budget)
}

/// Trait for checked arithmetic operations.
///
/// Provides safe arithmetic methods that return `Result` instead of
/// panicking on overflow, underflow, or division by zero.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely subtract two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result would underflow.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely divide two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the divisor is zero.
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(ArithmeticError::Overflow)
    }
}

impl CheckedArithmetic for u64 {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_div(rhs).ok_or(ArithmeticError::DivisionByZero)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod arithmetic_error {
        use super::*;

        #[test]
        fn display_formats_correctly() {
            assert_eq!(ArithmeticError::Overflow.to_string(), "arithmetic overflow");
            assert_eq!(
                ArithmeticError::DivisionByZero.to_string(),
                "division by zero"
            );
            assert_eq!(
                ArithmeticError::InvalidValue("negative").to_string(),
                "invalid value: negative"
            );
        }
    }

    mod floor_div_tests {
        use super::*;

        #[test]
        fn positive_quotient_drops_remainder() {
            let floor = floor_div(Decimal::new(10, 0), Decimal::new(3, 0)).unwrap();
            assert_eq!(floor, Decimal::new(3, 0));
        }

        #[test]
        fn negative_quotient_rounds_down() {
            let floor = floor_div(Decimal::new(-10, 0), Decimal::new(3, 0)).unwrap();
            assert_eq!(floor, Decimal::new(-4, 0));
        }

        #[test]
        fn by_zero_fails() {
            let result = floor_div(Decimal::new(10, 0), Decimal::ZERO);
            assert_eq!(result, Err(ArithmeticError::DivisionByZero));
        }

        #[test]
        fn quotient_beyond_decimal_overflows() {
            let result = floor_div(Decimal::MAX, Decimal::new(1, 8));
            assert_eq!(result, Err(ArithmeticError::Overflow));
        }
    }

    mod affordable_units_tests {
        use super::*;

        #[test]
        fn exact_multiple() {
            let units = affordable_units(Decimal::new(20, 0), Decimal::new(5, 0)).unwrap();
            assert_eq!(units, 4);
        }

        #[test]
        fn remainder_is_dropped() {
            let units = affordable_units(Decimal::new(29, 0), Decimal::new(5, 0)).unwrap();
            assert_eq!(units, 5);
        }

        #[test]
        fn cents_budget() {
            // 10.00 at 3.33 per unit
            let units = affordable_units(Decimal::new(1000, 2), Decimal::new(333, 2)).unwrap();
            assert_eq!(units, 3);
        }

        #[test]
        fn repeating_fraction_never_overshoots() {
            // 1/3 per unit, budget of exactly one unit's worth less a sliver
            let per_unit = Decimal::ONE / Decimal::new(3, 0);
            let budget = per_unit * Decimal::new(3, 0) - Decimal::new(1, 27);
            let units = affordable_units(budget, per_unit).unwrap();
            assert!(Decimal::from(units) * per_unit <= budget);
            assert!(Decimal::from(units + 1) * per_unit > budget);
        }

        #[test]
        fn huge_quotient_saturates() {
            // 1e21 / 1e-8 does not fit a Decimal
            let budget = Decimal::from_i128_with_scale(10_i128.pow(21), 0);
            let units = affordable_units(budget, Decimal::new(1, 8)).unwrap();
            assert_eq!(units, u64::MAX);
        }

        #[test]
        fn quotient_beyond_u64_saturates() {
            let units = affordable_units(Decimal::MAX, Decimal::ONE).unwrap();
            assert_eq!(units, u64::MAX);
        }

        #[test]
        fn non_positive_budget_affords_nothing() {
            assert_eq!(affordable_units(Decimal::ZERO, Decimal::ONE).unwrap(), 0);
            assert_eq!(
                affordable_units(Decimal::new(-5, 0), Decimal::ONE).unwrap(),
                0
            );
        }

        #[test]
        fn budget_smaller_than_one_unit() {
            let units = affordable_units(Decimal::new(4, 0), Decimal::new(5, 0)).unwrap();
            assert_eq!(units, 0);
        }

        #[test]
        fn non_positive_unit_cost_fails() {
            assert!(matches!(
                affordable_units(Decimal::ONE, Decimal::ZERO),
                Err(ArithmeticError::InvalidValue(_))
            ));
            assert!(matches!(
                affordable_units(Decimal::ONE, Decimal::NEGATIVE_ONE),
                Err(ArithmeticError::InvalidValue(_))
            ));
        }
    }

    mod checked_arithmetic_decimal {
        use super::*;

        #[test]
        fn safe_ops_work() {
            let a = Decimal::new(100, 0);
            let b = Decimal::new(5, 0);
            assert_eq!(a.safe_add(b).unwrap(), Decimal::new(105, 0));
            assert_eq!(a.safe_sub(b).unwrap(), Decimal::new(95, 0));
            assert_eq!(a.safe_mul(b).unwrap(), Decimal::new(500, 0));
            assert_eq!(a.safe_div(b).unwrap(), Decimal::new(20, 0));
        }

        #[test]
        fn safe_mul_overflow_fails() {
            assert_eq!(
                Decimal::MAX.safe_mul(Decimal::new(2, 0)),
                Err(ArithmeticError::Overflow)
            );
        }

        #[test]
        fn safe_div_by_zero_fails() {
            assert_eq!(
                Decimal::ONE.safe_div(Decimal::ZERO),
                Err(ArithmeticError::DivisionByZero)
            );
        }
    }

    mod checked_arithmetic_u64 {
        use super::*;

        #[test]
        fn safe_add_overflow_fails() {
            assert_eq!(u64::MAX.safe_add(1), Err(ArithmeticError::Overflow));
        }

        #[test]
        fn safe_sub_underflow_fails() {
            assert_eq!(0u64.safe_sub(1), Err(ArithmeticError::Underflow));
        }

        #[test]
        fn safe_div_by_zero_fails() {
            assert_eq!(100u64.safe_div(0), Err(ArithmeticError::DivisionByZero));
        }
    }
}
