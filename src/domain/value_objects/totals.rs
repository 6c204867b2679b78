//! # Sale Totals
//!
//! Aggregate shares, value and gain over a set of lots or allocations.

use crate::domain::value_objects::Amount;
use crate::domain::value_objects::arithmetic::{ArithmeticResult, CheckedArithmetic};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Running totals of units, value and realized gain.
///
/// Built by [`SaleTotals::add_units`] with checked arithmetic, so a total is
/// either exact or an error.
///
/// # Examples
///
/// ```
/// use lot_optimizer::domain::value_objects::{Amount, SaleTotals};
///
/// let totals = SaleTotals::default()
///     .add_units(100, Amount::from_whole(10), Amount::from_whole(5))
///     .unwrap();
///
/// assert_eq!(totals.shares(), 100);
/// assert_eq!(totals.value(), Amount::from_whole(1_000));
/// assert!(totals.exceeds_ceiling(Amount::from_whole(499)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleTotals {
    shares: u64,
    value: Amount,
    gain: Amount,
}

impl SaleTotals {
    /// Returns totals with `units` more units at the given per-unit terms.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if any total no longer fits.
    pub fn add_units(
        self,
        units: u64,
        value_per_unit: Amount,
        gain_per_unit: Amount,
    ) -> ArithmeticResult<Self> {
        Ok(Self {
            shares: self.shares.safe_add(units)?,
            value: self.value.safe_add(value_per_unit.times(units)?)?,
            gain: self.gain.safe_add(gain_per_unit.times(units)?)?,
        })
    }

    /// Total units.
    #[inline]
    #[must_use]
    pub fn shares(&self) -> u64 {
        self.shares
    }

    /// Total sale value (proceeds).
    #[inline]
    #[must_use]
    pub fn value(&self) -> Amount {
        self.value
    }

    /// Total realized gain; negative for a net loss.
    #[inline]
    #[must_use]
    pub fn gain(&self) -> Amount {
        self.gain
    }

    /// Returns true if the total gain is above `ceiling`.
    #[inline]
    #[must_use]
    pub fn exceeds_ceiling(&self, ceiling: Amount) -> bool {
        self.gain > ceiling
    }
}

impl fmt::Display for SaleTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SaleTotals(shares={}, value={}, gain={})",
            self.shares, self.value, self.gain
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let totals = SaleTotals::default();
        assert_eq!(totals.shares(), 0);
        assert!(totals.value().is_zero());
        assert!(totals.gain().is_zero());
    }

    #[test]
    fn accumulates_mixed_gains() {
        let totals = SaleTotals::default()
            .add_units(10, Amount::from_whole(5), Amount::from_whole(-3))
            .unwrap()
            .add_units(10, Amount::from_whole(5), Amount::from_whole(2))
            .unwrap();

        assert_eq!(totals.shares(), 20);
        assert_eq!(totals.value(), Amount::from_whole(100));
        assert_eq!(totals.gain(), Amount::from_whole(-10));
        assert!(!totals.exceeds_ceiling(Amount::ZERO));
    }

    #[test]
    fn ceiling_is_inclusive() {
        let totals = SaleTotals::default()
            .add_units(4, Amount::from_whole(10), Amount::from_whole(5))
            .unwrap();
        assert!(!totals.exceeds_ceiling(Amount::from_whole(20)));
        assert!(totals.exceeds_ceiling(Amount::from_whole(19)));
    }

    #[test]
    fn share_overflow_fails() {
        let totals = SaleTotals::default()
            .add_units(u64::MAX, Amount::ZERO, Amount::ZERO)
            .unwrap();
        assert!(totals.add_units(1, Amount::ZERO, Amount::ZERO).is_err());
    }

    #[test]
    fn display_format() {
        let display = SaleTotals::default().to_string();
        assert!(display.contains("SaleTotals"));
    }
}
