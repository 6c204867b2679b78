//! # Lot Entity
//!
//! A block of a fungible asset that can be sold in whole units, with a
//! fixed sale value and a fixed realized gain per unit.
//!
//! # Examples
//!
//! ```
//! use lot_optimizer::domain::entities::lot::Lot;
//! use lot_optimizer::domain::value_objects::Amount;
//!
//! let lot = Lot::new("lot-1", 100, Amount::from_whole(10), Amount::from_whole(5)).unwrap();
//!
//! assert_eq!(lot.available(), 100);
//! assert!(lot.has_positive_gain());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::Amount;
use crate::domain::value_objects::arithmetic::ArithmeticResult;
use serde::Serialize;
use std::fmt;

/// A candidate lot for sale.
///
/// The identity `I` is opaque: it is never interpreted, only carried
/// through to the allocations produced for this lot.
///
/// # Invariants
///
/// - `available` must be positive
/// - `value_per_unit` must be non-negative
/// - `gain_per_unit` may take any sign (negative is a realized loss)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lot<I> {
    id: I,
    available: u64,
    value_per_unit: Amount,
    gain_per_unit: Amount,
}

impl<I> Lot<I> {
    /// Creates a new lot with validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if `available` is zero.
    /// Returns `DomainError::InvalidAmount` if `value_per_unit` is negative.
    pub fn new(
        id: I,
        available: u64,
        value_per_unit: Amount,
        gain_per_unit: Amount,
    ) -> DomainResult<Self> {
        if available == 0 {
            return Err(DomainError::invalid_quantity(
                "available units must be positive",
            ));
        }
        if value_per_unit.is_negative() {
            return Err(DomainError::invalid_amount(format!(
                "value per unit must be non-negative, got {value_per_unit}"
            )));
        }
        Ok(Self {
            id,
            available,
            value_per_unit,
            gain_per_unit,
        })
    }

    /// Returns the caller-defined identity.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &I {
        &self.id
    }

    /// Returns the maximum number of units that can be sold.
    #[inline]
    #[must_use]
    pub fn available(&self) -> u64 {
        self.available
    }

    /// Returns the sale proceeds per unit.
    #[inline]
    #[must_use]
    pub fn value_per_unit(&self) -> Amount {
        self.value_per_unit
    }

    /// Returns the realized gain per unit.
    #[inline]
    #[must_use]
    pub fn gain_per_unit(&self) -> Amount {
        self.gain_per_unit
    }

    /// Returns true if selling a unit consumes gain budget.
    ///
    /// Lots with zero gain are loss-or-neutral.
    #[inline]
    #[must_use]
    pub fn has_positive_gain(&self) -> bool {
        self.gain_per_unit.is_positive()
    }

    /// Value of the whole lot.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product does not fit.
    pub fn market_value(&self) -> ArithmeticResult<Amount> {
        self.value_per_unit.times(self.available)
    }

    /// Realized gain of selling the whole lot.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product does not fit.
    pub fn total_gain(&self) -> ArithmeticResult<Amount> {
        self.gain_per_unit.times(self.available)
    }
}

impl<I: fmt::Display> fmt::Display for Lot<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lot(id={}, available={}, value={}, gain={})",
            self.id, self.available, self.value_per_unit, self.gain_per_unit,
        )
    }
}
