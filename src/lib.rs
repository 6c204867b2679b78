//! # lot-optimizer
//!
//! Chooses how many units of each lot of a fungible asset to sell so that
//! total sale value is maximal while total realized gain stays at or below
//! a ceiling.
//!
//! ## Layers
//!
//! - [`domain`]: [`Lot`](domain::entities::Lot),
//!   [`LotCatalog`](domain::entities::LotCatalog),
//!   [`Allocation`](domain::entities::Allocation) and exact
//!   [`Amount`](domain::value_objects::Amount) arithmetic
//! - [`application`]: the
//!   [`GainCeilingAllocator`](application::services::GainCeilingAllocator),
//!   efficiency ranking, lot filtering and summaries
//! - [`infrastructure`]: statement files and layered settings
//!
//! # Examples
//!
//! ```
//! use lot_optimizer::application::services::{solve, summarize};
//! use lot_optimizer::domain::entities::LotCatalog;
//! use lot_optimizer::domain::value_objects::Amount;
//!
//! let catalog = LotCatalog::try_from_terms([
//!     (1, 100, Amount::from_whole(10), Amount::from_whole(5)),
//!     (2, 50, Amount::from_whole(20), Amount::from_whole(4)),
//! ]).unwrap();
//!
//! let allocations = solve(&catalog, Amount::from_whole(220)).unwrap();
//! let totals = summarize(&allocations).unwrap();
//!
//! assert_eq!(totals.value(), Amount::from_whole(1_040));
//! assert_eq!(totals.gain(), Amount::from_whole(220));
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
