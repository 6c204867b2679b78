//! # Application Services
//!
//! Services that turn a lot catalog into a sale selection.
//!
//! - [`GainCeilingAllocator`]: Proceeds-maximal selection under a gain ceiling
//! - [`rank_by_efficiency`]: Ranking of positive-gain lots
//! - [`LotFilter`]: Eligibility policy applied before cataloguing
//! - [`summarize`]: Totals over a selection

pub mod allocator;
pub mod lot_filter;
pub mod ranking_strategy;
pub mod summary;

pub use allocator::{AllocationStrategy, GainCeilingAllocator, solve};
pub use lot_filter::{DEFAULT_MIN_AGE_MONTHS, LotFilter};
pub use ranking_strategy::{RankedLot, compare_efficiency, rank_by_efficiency};
pub use summary::{sort_by_lot_id, summarize};
