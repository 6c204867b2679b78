//! # Ranking Strategy
//!
//! Ranks positive-gain lots by efficiency: sale proceeds obtained per unit
//! of gain budget consumed (`value_per_unit / gain_per_unit`).
//!
//! Comparison is exact. Two lots are ordered by cross-multiplying their
//! terms, so lots with equal efficiency compare equal and keep their input
//! order under the stable sort.

use crate::domain::entities::lot::Lot;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;

/// A lot with its ranking information.
#[derive(Debug, Clone)]
pub struct RankedLot<'a, I> {
    /// The lot being ranked.
    pub lot: &'a Lot<I>,
    /// The rank (1 = most efficient).
    pub rank: usize,
    /// Proceeds per unit of gain, rounded to `Decimal` precision.
    pub efficiency: Decimal,
}

impl<'a, I> RankedLot<'a, I> {
    /// Creates a new ranked lot.
    #[must_use]
    pub fn new(lot: &'a Lot<I>, rank: usize, efficiency: Decimal) -> Self {
        Self {
            lot,
            rank,
            efficiency,
        }
    }

    /// Returns true if this lot is the most efficient (rank 1).
    #[must_use]
    pub fn is_best(&self) -> bool {
        self.rank == 1
    }
}

impl<I: fmt::Display> fmt::Display for RankedLot<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RankedLot(#{} efficiency={:.4} lot={})",
            self.rank, self.efficiency, self.lot
        )
    }
}

/// Efficiency of a positive-gain lot, saturating at `Decimal::MAX`.
fn efficiency<I>(lot: &Lot<I>) -> Decimal {
    lot.value_per_unit()
        .get()
        .checked_div(lot.gain_per_unit().get())
        .unwrap_or(Decimal::MAX)
}

/// Orders two positive-gain lots by efficiency, ascending.
///
/// `a.value / a.gain` vs `b.value / b.gain` is decided on
/// `a.value * b.gain` vs `b.value * a.gain`; only if a product overflows
/// does it fall back to the rounded quotients.
#[must_use]
pub fn compare_efficiency<I>(a: &Lot<I>, b: &Lot<I>) -> Ordering {
    let lhs = a
        .value_per_unit()
        .get()
        .checked_mul(b.gain_per_unit().get());
    let rhs = b
        .value_per_unit()
        .get()
        .checked_mul(a.gain_per_unit().get());
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
        _ => efficiency(a).cmp(&efficiency(b)),
    }
}

/// Ranks lots by descending efficiency, ties kept in input order.
///
/// Lots without a positive per-unit gain have no meaningful efficiency and
/// are left out of the ranking.
///
/// # Examples
///
/// ```
/// use lot_optimizer::application::services::ranking_strategy::rank_by_efficiency;
/// use lot_optimizer::domain::entities::lot::Lot;
/// use lot_optimizer::domain::value_objects::Amount;
///
/// let slow = Lot::new("slow", 100, Amount::from_whole(10), Amount::from_whole(5)).unwrap();
/// let fast = Lot::new("fast", 50, Amount::from_whole(20), Amount::from_whole(4)).unwrap();
///
/// let ranked = rank_by_efficiency([&slow, &fast]);
/// assert_eq!(*ranked[0].lot.id(), "fast");
/// assert!(ranked[0].is_best());
/// ```
#[must_use]
pub fn rank_by_efficiency<'a, I, L>(lots: L) -> Vec<RankedLot<'a, I>>
where
    I: 'a,
    L: IntoIterator<Item = &'a Lot<I>>,
{
    let mut candidates: Vec<&'a Lot<I>> = lots
        .into_iter()
        .filter(|lot| lot.has_positive_gain())
        .collect();

    // slice::sort_by is stable
    candidates.sort_by(|a, b| compare_efficiency(b, a));

    candidates
        .into_iter()
        .enumerate()
        .map(|(i, lot)| RankedLot::new(lot, i + 1, efficiency(lot)))
        .collect()
}
