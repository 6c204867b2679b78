//! # Gain-Ceiling Allocator
//!
//! Chooses how many units of each lot to sell so that total proceeds are
//! maximal while total realized gain stays at or below a ceiling.
//!
//! This module provides the [`AllocationStrategy`] trait and the
//! [`GainCeilingAllocator`] implementation, a two-phase greedy. Its proceeds
//! are within one unit's value of the best whole-unit selection, and optimal
//! when every positive-gain lot carries the same per-unit gain:
//!
//! 1. Every lot whose per-unit gain is zero or negative is sold in full.
//!    Such a lot never lowers proceeds and never raises total gain.
//! 2. The budget left under the ceiling is spent on positive-gain lots in
//!    descending order of `value / gain`, each taking as many whole units as
//!    still fit. Lots that cannot afford a single unit are skipped and the
//!    scan continues, since a later lot may have a smaller per-unit gain.
//!
//! When the ceiling is below what even the loss lots can reach, the
//! phase-one selection is returned as a best effort; callers detect the
//! overage with [`SaleTotals::exceeds_ceiling`].
//!
//! [`SaleTotals::exceeds_ceiling`]: crate::domain::value_objects::SaleTotals::exceeds_ceiling
//!
//! # Examples
//!
//! ```
//! use lot_optimizer::application::services::allocator::GainCeilingAllocator;
//! use lot_optimizer::domain::entities::catalog::LotCatalog;
//! use lot_optimizer::domain::value_objects::Amount;
//!
//! let catalog = LotCatalog::try_from_terms([
//!     ("lot-1", 100, Amount::from_whole(10), Amount::from_whole(5)),
//!     ("lot-2", 50, Amount::from_whole(20), Amount::from_whole(4)),
//! ]).unwrap();
//!
//! let allocations = GainCeilingAllocator::new()
//!     .solve(&catalog, Amount::from_whole(220))
//!     .unwrap();
//!
//! // lot-2 is more efficient and fits whole; lot-1 takes the last 20 of budget
//! assert_eq!(allocations.len(), 2);
//! assert_eq!(*allocations[0].lot_id(), "lot-2");
//! assert_eq!(allocations[0].quantity(), 50);
//! assert_eq!(allocations[1].quantity(), 4);
//! ```

use crate::application::services::ranking_strategy::rank_by_efficiency;
use crate::domain::entities::allocation::Allocation;
use crate::domain::entities::catalog::LotCatalog;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::arithmetic::{CheckedArithmetic, affordable_units};
use crate::domain::value_objects::Amount;
use std::fmt;
use tracing::{debug, trace, warn};

/// Trait for gain-constrained allocation strategies.
///
/// # Contract
///
/// - Every returned allocation has `0 < quantity <= available` of its lot.
/// - At most one allocation per lot.
/// - The catalog is never modified.
pub trait AllocationStrategy<I>: Send + Sync + fmt::Debug {
    /// Selects quantities from `catalog` under `gain_ceiling`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if an intermediate amount overflows.
    fn allocate(
        &self,
        catalog: &LotCatalog<I>,
        gain_ceiling: Amount,
    ) -> DomainResult<Vec<Allocation<I>>>;

    /// Returns the name of this strategy.
    fn name(&self) -> &'static str;
}

/// Two-phase greedy allocator maximizing proceeds under a gain ceiling.
///
/// Output order follows the algorithm, not the input: loss-or-neutral lots
/// in input order, then positive-gain lots in efficiency order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GainCeilingAllocator;

impl GainCeilingAllocator {
    /// Creates a new allocator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Selects the proceeds-maximal quantities under `gain_ceiling`.
    ///
    /// The ceiling is an upper bound of any sign. An empty catalog yields an
    /// empty selection.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if an intermediate amount overflows.
    pub fn solve<I: Clone>(
        &self,
        catalog: &LotCatalog<I>,
        gain_ceiling: Amount,
    ) -> DomainResult<Vec<Allocation<I>>> {
        let (absorbed, positive) = catalog.partition_by_gain();
        let mut allocations = Vec::with_capacity(catalog.len());

        let mut remaining = gain_ceiling;
        for lot in &absorbed {
            remaining = remaining.safe_sub(lot.total_gain()?)?;
            allocations.push(Allocation::full(lot));
        }
        debug!(
            absorbed = absorbed.len(),
            positive = positive.len(),
            %gain_ceiling,
            %remaining,
            "loss and neutral lots absorbed"
        );

        if !remaining.is_positive() {
            if remaining.is_negative() {
                warn!(
                    %gain_ceiling,
                    shortfall = %remaining,
                    "gain ceiling is below the lowest reachable gain, returning loss lots only"
                );
            }
            return Ok(allocations);
        }

        for ranked in rank_by_efficiency(positive) {
            if !remaining.is_positive() {
                break;
            }
            let lot = ranked.lot;
            let affordable = affordable_units(remaining.get(), lot.gain_per_unit().get())?;
            let quantity = affordable.min(lot.available());
            if quantity == 0 {
                trace!(rank = ranked.rank, %remaining, "lot does not fit, skipping");
                continue;
            }

            remaining = remaining.safe_sub(lot.gain_per_unit().times(quantity)?)?;
            trace!(
                rank = ranked.rank,
                quantity,
                available = lot.available(),
                %remaining,
                "lot allocated"
            );
            allocations.push(Allocation::new(lot, quantity)?);
        }

        debug!(
            allocations = allocations.len(),
            unused_budget = %remaining,
            "allocation complete"
        );
        Ok(allocations)
    }
}

impl<I: Clone> AllocationStrategy<I> for GainCeilingAllocator {
    fn allocate(
        &self,
        catalog: &LotCatalog<I>,
        gain_ceiling: Amount,
    ) -> DomainResult<Vec<Allocation<I>>> {
        self.solve(catalog, gain_ceiling)
    }

    fn name(&self) -> &'static str {
        "GainCeiling"
    }
}

/// Solves with the default [`GainCeilingAllocator`].
///
/// # Errors
///
/// Returns `DomainError::Arithmetic` if an intermediate amount overflows.
pub fn solve<I: Clone>(
    catalog: &LotCatalog<I>,
    gain_ceiling: Amount,
) -> DomainResult<Vec<Allocation<I>>> {
    GainCeilingAllocator::new().solve(catalog, gain_ceiling)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::application::services::summary::summarize;
    use crate::domain::errors::DomainError;
    use crate::domain::value_objects::{ArithmeticError, SaleTotals};
    use rust_decimal::Decimal;

    fn catalog(terms: &[(&'static str, u64, i64, i64)]) -> LotCatalog<&'static str> {
        LotCatalog::try_from_terms(terms.iter().map(|&(id, available, value, gain)| {
            (id, available, Amount::from_whole(value), Amount::from_whole(gain))
        }))
        .unwrap()
    }

    fn run(
        catalog: &LotCatalog<&'static str>,
        ceiling: i64,
    ) -> (Vec<(&'static str, u64)>, SaleTotals) {
        let allocations = solve(catalog, Amount::from_whole(ceiling)).unwrap();
        let totals = summarize(&allocations).unwrap();
        let picks = allocations
            .iter()
            .map(|a| (*a.lot_id(), a.quantity()))
            .collect();
        (picks, totals)
    }

    mod scenarios {
        use super::*;

        #[test]
        fn single_lot_fits_entirely() {
            let lots = catalog(&[("lot", 100, 10, 5)]);
            let (picks, totals) = run(&lots, 1_000);

            assert_eq!(picks, vec![("lot", 100)]);
            assert_eq!(totals.value(), Amount::from_whole(1_000));
            assert_eq!(totals.gain(), Amount::from_whole(500));
        }

        #[test]
        fn efficient_lot_first_then_partial() {
            let lots = catalog(&[("lot1", 100, 10, 5), ("lot2", 50, 20, 4)]);
            let (picks, totals) = run(&lots, 220);

            assert_eq!(picks, vec![("lot2", 50), ("lot1", 4)]);
            assert_eq!(totals.value(), Amount::from_whole(1_040));
            assert_eq!(totals.gain(), Amount::from_whole(220));
        }

        #[test]
        fn loss_frees_budget_for_gains() {
            let lots = catalog(&[("loss", 10, 5, -3), ("gain", 10, 5, 2)]);
            let (picks, totals) = run(&lots, 0);

            assert_eq!(picks, vec![("loss", 10), ("gain", 10)]);
            assert_eq!(totals.gain(), Amount::from_whole(-10));
            assert_eq!(totals.value(), Amount::from_whole(100));
        }
    }

    mod phase_one {
        use super::*;

        #[test]
        fn non_positive_lots_always_sold_in_full() {
            let lots = catalog(&[("loss", 10, 5, -3), ("flat", 7, 2, 0), ("loss2", 1, 0, -1)]);
            for ceiling in [-1_000, -31, 0, 1_000] {
                let (picks, totals) = run(&lots, ceiling);
                assert_eq!(picks, vec![("loss", 10), ("flat", 7), ("loss2", 1)]);
                assert_eq!(totals.value(), Amount::from_whole(64));
            }
        }

        #[test]
        fn zero_gain_lot_is_included_at_zero_ceiling() {
            let lots = catalog(&[("flat", 3, 9, 0)]);
            let (picks, _) = run(&lots, 0);
            assert_eq!(picks, vec![("flat", 3)]);
        }
    }

    mod budget {
        use super::*;

        #[test]
        fn skipped_lot_does_not_stop_scan() {
            // "wide" ranks first but one unit costs 20 of gain, more than
            // the whole budget; the scan must go on to the cheaper lots.
            let lots = catalog(&[("narrow", 5, 3, 1), ("wide", 5, 400, 20), ("mid", 5, 50, 5)]);
            let (picks, totals) = run(&lots, 13);

            assert_eq!(picks, vec![("mid", 2), ("narrow", 3)]);
            assert_eq!(totals.value(), Amount::from_whole(109));
            assert_eq!(totals.gain(), Amount::from_whole(13));
        }

        #[test]
        fn at_most_one_partial_fill_when_budget_runs_out() {
            let lots = catalog(&[("a", 10, 30, 3), ("b", 10, 20, 2), ("c", 10, 10, 1)]);
            let (picks, totals) = run(&lots, 45);

            // efficiency is 10 for all, so input order decides
            assert_eq!(picks, vec![("a", 10), ("b", 7), ("c", 1)]);
            assert_eq!(totals.gain(), Amount::from_whole(45));
        }

        #[test]
        fn zero_ceiling_without_losses_sells_nothing() {
            let lots = catalog(&[("a", 10, 30, 3)]);
            let (picks, totals) = run(&lots, 0);
            assert!(picks.is_empty());
            assert_eq!(totals, SaleTotals::default());
        }

        #[test]
        fn fractional_gains_never_overshoot() {
            let lot = LotCatalog::try_from_terms([(
                "cents",
                1_000,
                Amount::from_cents(1_000),
                Amount::from_cents(333),
            )])
            .unwrap();
            let allocations = solve(&lot, Amount::from_whole(10)).unwrap();
            assert_eq!(allocations[0].quantity(), 3);
            assert!(allocations[0].gain().unwrap() <= Amount::from_whole(10));
        }
    }

    mod infeasible_ceiling {
        use super::*;

        #[test]
        fn negative_ceiling_without_losses_returns_empty() {
            let lots = catalog(&[("a", 10, 30, 3)]);
            let allocations = solve(&lots, Amount::from_whole(-5)).unwrap();
            let totals = summarize(&allocations).unwrap();

            assert!(allocations.is_empty());
            assert!(totals.exceeds_ceiling(Amount::from_whole(-5)));
        }

        #[test]
        fn returns_loss_lots_when_losses_fall_short() {
            let lots = catalog(&[("loss", 10, 5, -3), ("gain", 10, 5, 2)]);
            let (picks, totals) = run(&lots, -50);

            assert_eq!(picks, vec![("loss", 10)]);
            assert_eq!(totals.gain(), Amount::from_whole(-30));
            assert!(totals.exceeds_ceiling(Amount::from_whole(-50)));
        }

        #[test]
        fn losses_exactly_meet_negative_ceiling() {
            let lots = catalog(&[("loss", 10, 5, -3), ("gain", 10, 5, 2)]);
            let (picks, totals) = run(&lots, -30);

            assert_eq!(picks, vec![("loss", 10)]);
            assert!(!totals.exceeds_ceiling(Amount::from_whole(-30)));
        }
    }

    mod edge_cases {
        use super::*;

        #[test]
        fn empty_catalog_yields_nothing() {
            let lots = catalog(&[]);
            for ceiling in [-10, 0, 10] {
                let (picks, totals) = run(&lots, ceiling);
                assert!(picks.is_empty());
                assert_eq!(totals, SaleTotals::default());
            }
        }

        #[test]
        fn overflow_is_reported() {
            let lots = LotCatalog::try_from_terms([(
                "huge",
                u64::MAX,
                Amount::ZERO,
                Amount::new(-Decimal::MAX),
            )])
            .unwrap();
            let result = solve(&lots, Amount::ZERO);
            assert!(matches!(
                result,
                Err(DomainError::Arithmetic(ArithmeticError::Overflow))
            ));
        }

        #[test]
        fn tiny_gain_under_huge_ceiling_takes_whole_lot() {
            // the budget quotient is too large for a Decimal
            let lots = LotCatalog::try_from_terms([(
                "dust",
                5,
                Amount::from_whole(1),
                Amount::new(Decimal::new(1, 8)),
            )])
            .unwrap();
            let ceiling = Amount::new(Decimal::from_i128_with_scale(10_i128.pow(21), 0));
            let allocations = solve(&lots, ceiling).unwrap();

            assert_eq!(allocations.len(), 1);
            assert_eq!(allocations[0].quantity(), 5);
            assert_eq!(allocations[0].gain().unwrap(), Amount::new(Decimal::new(5, 8)));
        }

        #[test]
        fn catalog_is_untouched() {
            let lots = catalog(&[("loss", 10, 5, -3), ("gain", 10, 5, 2)]);
            let before = lots.clone();
            let _ = solve(&lots, Amount::from_whole(3)).unwrap();
            assert_eq!(lots, before);
        }

        #[test]
        fn repeated_calls_are_identical() {
            let lots = catalog(&[("a", 10, 30, 3), ("b", 10, 20, 2), ("c", 4, 9, 1)]);
            let first = solve(&lots, Amount::from_whole(37)).unwrap();
            let second = solve(&lots, Amount::from_whole(37)).unwrap();
            assert_eq!(first, second);
        }
    }

    mod strategy_trait {
        use super::*;

        #[test]
        fn usable_as_trait_object() {
            let strategy: Box<dyn AllocationStrategy<&'static str>> =
                Box::new(GainCeilingAllocator::new());
            let lots = catalog(&[("lot", 100, 10, 5)]);
            let allocations = strategy.allocate(&lots, Amount::from_whole(50)).unwrap();

            assert_eq!(strategy.name(), "GainCeiling");
            assert_eq!(allocations[0].quantity(), 10);
        }
    }
}
