//! # Allocation Entity
//!
//! Represents how many units of one lot are selected for sale.
//!
//! This module provides the [`Allocation`] struct produced by the allocator.
//! An allocation carries the source lot's identity and per-unit terms, so
//! proceeds and realized gain are derived on demand rather than stored.
//!
//! # Examples
//!
//! ```
//! use lot_optimizer::domain::entities::allocation::Allocation;
//! use lot_optimizer::domain::entities::lot::Lot;
//! use lot_optimizer::domain::value_objects::Amount;
//!
//! let lot = Lot::new("lot-1", 100, Amount::from_whole(10), Amount::from_whole(5)).unwrap();
//! let alloc = Allocation::new(&lot, 4).unwrap();
//!
//! assert_eq!(alloc.proceeds().unwrap(), Amount::from_whole(40));
//! assert_eq!(alloc.gain().unwrap(), Amount::from_whole(20));
//! ```

use crate::domain::entities::lot::Lot;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::Amount;
use crate::domain::value_objects::arithmetic::ArithmeticResult;
use serde::Serialize;
use std::fmt;

/// A quantity of one lot selected for sale.
///
/// # Invariants
///
/// - `quantity` is positive
/// - `quantity` never exceeds the source lot's available units
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Allocation<I> {
    /// Identity of the source lot.
    lot_id: I,
    /// Units selected.
    quantity: u64,
    /// Sale value per unit, copied from the lot.
    value_per_unit: Amount,
    /// Realized gain per unit, copied from the lot.
    gain_per_unit: Amount,
}

impl<I: Clone> Allocation<I> {
    /// Creates a new allocation of `quantity` units from `lot`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuantity` if `quantity` is zero or
    /// greater than the lot's available units.
    pub fn new(lot: &Lot<I>, quantity: u64) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::invalid_quantity(
                "allocated quantity must be positive",
            ));
        }
        if quantity > lot.available() {
            return Err(DomainError::invalid_quantity(format!(
                "allocated quantity {quantity} exceeds available {}",
                lot.available()
            )));
        }
        Ok(Self::from_lot(lot, quantity))
    }

    /// Allocates every available unit of `lot`.
    #[must_use]
    pub fn full(lot: &Lot<I>) -> Self {
        Self::from_lot(lot, lot.available())
    }

    fn from_lot(lot: &Lot<I>, quantity: u64) -> Self {
        Self {
            lot_id: lot.id().clone(),
            quantity,
            value_per_unit: lot.value_per_unit(),
            gain_per_unit: lot.gain_per_unit(),
        }
    }
}

impl<I> Allocation<I> {
    /// Returns the source lot's identity.
    #[inline]
    #[must_use]
    pub fn lot_id(&self) -> &I {
        &self.lot_id
    }

    /// Returns the number of units selected.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Returns the sale value per unit.
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

    /// Sale proceeds of this allocation (`quantity * value_per_unit`).
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product does not fit.
    pub fn proceeds(&self) -> ArithmeticResult<Amount> {
        self.value_per_unit.times(self.quantity)
    }

    /// Realized gain of this allocation (`quantity * gain_per_unit`).
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product does not fit.
    pub fn gain(&self) -> ArithmeticResult<Amount> {
        self.gain_per_unit.times(self.quantity)
    }
}

impl<I: fmt::Display> fmt::Display for Allocation<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Allocation(lot={}, qty={}, value={}, gain={})",
            self.lot_id, self.quantity, self.value_per_unit, self.gain_per_unit,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn test_lot() -> Lot<String> {
        Lot::new(
            "lot-1".to_string(),
            10,
            Amount::from_whole(5),
            Amount::from_whole(-3),
        )
        .unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn new_creates_valid_allocation() {
            let alloc = Allocation::new(&test_lot(), 4).unwrap();
            assert_eq!(alloc.lot_id(), "lot-1");
            assert_eq!(alloc.quantity(), 4);
            assert_eq!(alloc.value_per_unit(), Amount::from_whole(5));
            assert_eq!(alloc.gain_per_unit(), Amount::from_whole(-3));
        }

        #[test]
        fn new_fails_with_zero_quantity() {
            let result = Allocation::new(&test_lot(), 0);
            assert!(matches!(result, Err(DomainError::InvalidQuantity(_))));
        }

        #[test]
        fn new_fails_above_available() {
            let result = Allocation::new(&test_lot(), 11);
            assert!(matches!(result, Err(DomainError::InvalidQuantity(_))));
        }

        #[test]
        fn full_takes_every_unit() {
            let alloc = Allocation::full(&test_lot());
            assert_eq!(alloc.quantity(), 10);
        }
    }

    mod derived {
        use super::*;

        #[test]
        fn proceeds_and_gain_computed() {
            let alloc = Allocation::full(&test_lot());
            assert_eq!(alloc.proceeds().unwrap(), Amount::from_whole(50));
            assert_eq!(alloc.gain().unwrap(), Amount::from_whole(-30));
        }
    }

    mod display {
        use super::*;

        #[test]
        fn display_format() {
            let display = Allocation::new(&test_lot(), 2).unwrap().to_string();
            assert!(display.contains("Allocation"));
            assert!(display.contains("lot-1"));
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn serializes_terms() {
            let alloc = Allocation::new(&test_lot(), 3).unwrap();
            let json = serde_json::to_value(&alloc).unwrap();
            assert_eq!(json["lot_id"], "lot-1");
            assert_eq!(json["quantity"], 3);
            assert_eq!(json["value_per_unit"], "5");
            assert_eq!(json["gain_per_unit"], "-3");
        }
    }
}
