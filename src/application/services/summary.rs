//! # Selection Summary
//!
//! Presentation helpers over an allocation set: aggregate totals and
//! identity ordering.

use crate::domain::entities::allocation::Allocation;
use crate::domain::value_objects::SaleTotals;
use crate::domain::value_objects::arithmetic::ArithmeticResult;

/// Sums shares, proceeds and realized gain over `allocations`.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` if a total does not fit.
///
/// # Examples
///
/// ```
/// use lot_optimizer::application::services::{solve, summarize};
/// use lot_optimizer::domain::entities::catalog::LotCatalog;
/// use lot_optimizer::domain::value_objects::Amount;
///
/// let catalog = LotCatalog::try_from_terms([
///     ("loss", 10, Amount::from_whole(5), Amount::from_whole(-3)),
///     ("gain", 10, Amount::from_whole(5), Amount::from_whole(2)),
/// ]).unwrap();
///
/// let totals = summarize(&solve(&catalog, Amount::ZERO).unwrap()).unwrap();
/// assert_eq!(totals.value(), Amount::from_whole(100));
/// assert_eq!(totals.gain(), Amount::from_whole(-10));
/// ```
pub fn summarize<I>(allocations: &[Allocation<I>]) -> ArithmeticResult<SaleTotals> {
    allocations
        .iter()
        .try_fold(SaleTotals::default(), |acc, alloc| {
            acc.add_units(alloc.quantity(), alloc.value_per_unit(), alloc.gain_per_unit())
        })
}

/// Reorders allocations by lot identity.
///
/// The allocator emits allocations in efficiency order, which changes with
/// the ceiling; reports sort by identity instead.
pub fn sort_by_lot_id<I: Ord>(allocations: &mut [Allocation<I>]) {
    allocations.sort_by(|a, b| a.lot_id().cmp(b.lot_id()));
}
