//! # Lot Catalog
//!
//! An immutable, order-preserving collection of validated lots.
//!
//! The catalog performs no business filtering (age, plan, loss policy);
//! records are expected to arrive already selected by the caller.
//!
//! # Examples
//!
//! ```
//! use lot_optimizer::domain::entities::catalog::LotCatalog;
//! use lot_optimizer::domain::value_objects::Amount;
//!
//! let catalog = LotCatalog::try_from_terms([
//!     (1, 10, Amount::from_whole(5), Amount::from_whole(-3)),
//!     (2, 10, Amount::from_whole(5), Amount::from_whole(2)),
//! ]).unwrap();
//!
//! let (absorbed, positive) = catalog.partition_by_gain();
//! assert_eq!(absorbed.len(), 1);
//! assert_eq!(positive.len(), 1);
//! ```

use crate::domain::entities::lot::Lot;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::arithmetic::ArithmeticResult;
use crate::domain::value_objects::{Amount, SaleTotals};
use serde::Serialize;
use std::slice;

/// Immutable sequence of lots in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LotCatalog<I> {
    lots: Vec<Lot<I>>,
}

impl<I> LotCatalog<I> {
    /// Creates a catalog from already validated lots.
    #[must_use]
    pub fn new(lots: Vec<Lot<I>>) -> Self {
        Self { lots }
    }

    /// Creates a catalog from raw `(id, available, value, gain)` terms.
    ///
    /// # Errors
    ///
    /// Returns the first construction error raised by [`Lot::new`].
    pub fn try_from_terms<T>(terms: T) -> DomainResult<Self>
    where
        T: IntoIterator<Item = (I, u64, Amount, Amount)>,
    {
        let lots = terms
            .into_iter()
            .map(|(id, available, value, gain)| Lot::new(id, available, value, gain))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self::new(lots))
    }

    /// Returns the lots in input order.
    #[inline]
    #[must_use]
    pub fn lots(&self) -> &[Lot<I>] {
        &self.lots
    }

    /// Iterates the lots in input order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Lot<I>> {
        self.lots.iter()
    }

    /// Returns the lot at `index`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Lot<I>> {
        self.lots.get(index)
    }

    /// Number of lots.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lots.len()
    }

    /// Returns true if the catalog holds no lots.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    /// Splits the lots into `(loss_or_neutral, positive)` by per-unit gain.
    ///
    /// Both halves keep input order. Zero-gain lots are loss-or-neutral.
    #[must_use]
    pub fn partition_by_gain(&self) -> (Vec<&Lot<I>>, Vec<&Lot<I>>) {
        let (positive, absorbed): (Vec<_>, Vec<_>) =
            self.lots.iter().partition(|lot| lot.has_positive_gain());
        (absorbed, positive)
    }

    /// Totals over every unit of every lot.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if a total does not fit.
    pub fn totals(&self) -> ArithmeticResult<SaleTotals> {
        self.lots.iter().try_fold(SaleTotals::default(), |acc, lot| {
            acc.add_units(lot.available(), lot.value_per_unit(), lot.gain_per_unit())
        })
    }
}

impl<I> From<Vec<Lot<I>>> for LotCatalog<I> {
    fn from(lots: Vec<Lot<I>>) -> Self {
        Self::new(lots)
    }
}

impl<'a, I> IntoIterator for &'a LotCatalog<I> {
    type Item = &'a Lot<I>;
    type IntoIter = slice::Iter<'a, Lot<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
